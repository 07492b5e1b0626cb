//! # Domain Layer
//!
//! Request/response models, configuration, errors and the conversation rules.
//! Nothing here performs I/O apart from reading the environment on request.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
