//! Domain services containing the conversation rules.

mod message_validation;

pub use message_validation::*;
