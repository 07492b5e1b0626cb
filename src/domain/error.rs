use thiserror::Error;

use super::Role;

/// A rule broken by a chat conversation. Checked in declaration order; only the
/// first violation is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid role: {role} at message {index}. Valid roles are system, assistant, user, tool.")]
    InvalidRole { index: usize, role: String },

    #[error("The role of the last message must be either 'user' or 'tool', got '{role}'.")]
    InvalidLastRole { role: Role },

    #[error("There must be only one 'system' role, found {count}.")]
    MultipleSystemMessages { count: usize },

    #[error("Repeating roles are not allowed: {role} appears consecutively at message {index}.")]
    RepeatedRole { index: usize, role: Role },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("Transport error: HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// No HTTP status was obtained, or the body could not be decoded as JSON.
    #[error("Request error: {0}")]
    Request(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Upstream HTTP status, when the service answered with a failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
