use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ClientError;

/// Sends one JSON request to the inference service and returns its JSON answer.
///
/// Implementors own authentication and the base URL; resources only know the
/// endpoint path. A single attempt is made per call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` to `path` (relative to the configured base URL).
    ///
    /// Returns the decoded body on a 2xx status and [`ClientError::Transport`]
    /// carrying the status and body otherwise.
    async fn post(&self, path: &str, payload: &Value) -> Result<Value, ClientError>;
}
