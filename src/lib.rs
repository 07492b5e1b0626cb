pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatCompletions, Completions, Transport, CHAT_COMPLETIONS_PATH, COMPLETIONS_PATH};

pub use connector::{HttpTransport, MockTransport, NeoClient, RecordedRequest};

pub use domain::{
    validate_messages, ChatCompletion, ChatCompletionChoice, ChatCompletionRequest, ClientConfig,
    ClientError, Completion, CompletionChoice, CompletionRequest, Message, Role, Usage,
    ValidationError, API_KEY_ENV, BASE_URL_ENV,
};
