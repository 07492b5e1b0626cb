mod chat_completions;
mod completions;

pub use chat_completions::*;
pub use completions::*;
