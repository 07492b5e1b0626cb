//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - HTTP transport to the inference service (reqwest)
//! - In-process mock transport for tests and offline use
//! - The client facade wiring configuration, transport and resources

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
