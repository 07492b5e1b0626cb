mod chat_completion;
mod client_config;
mod completion;
mod message;
mod request;
mod usage;

pub use chat_completion::*;
pub use client_config::*;
pub use completion::*;
pub use message::*;
pub use request::*;
pub use usage::*;
