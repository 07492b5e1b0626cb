use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::Transport;
use crate::domain::ClientError;

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub payload: Value,
}

enum Reply {
    Json(Value),
    Status(u16, String),
}

/// In-process [`Transport`] that answers every call with a canned reply and
/// records what it was sent.
pub struct MockTransport {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Answer every request with `response` as a successful body.
    pub fn with_response(response: Value) -> Self {
        Self {
            reply: Reply::Json(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with a non-success HTTP status.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: Reply::Status(status, body.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, path: &str, payload: &Value) -> Result<Value, ClientError> {
        debug!("MockTransport: POST {path}");
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                path: path.to_string(),
                payload: payload.clone(),
            });
        }

        match &self.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(ClientError::transport(*status, body.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_requests() {
        let transport = MockTransport::with_response(json!({"data": "success"}));

        let response = transport
            .post("v1/test", &json!({"key": "value"}))
            .await
            .unwrap();

        assert_eq!(response["data"], "success");
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest {
                path: "v1/test".to_string(),
                payload: json!({"key": "value"}),
            }]
        );
    }

    #[tokio::test]
    async fn status_reply_is_a_transport_error() {
        let transport = MockTransport::with_status(503, "overloaded");

        let err = transport.post("v1/test", &json!({})).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(transport.call_count(), 1);
    }
}
