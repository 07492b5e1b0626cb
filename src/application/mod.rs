//! # Application Layer
//!
//! Completion resources coordinating validation, the transport and response
//! parsing.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
