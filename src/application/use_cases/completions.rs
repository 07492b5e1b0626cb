use std::sync::Arc;

use tracing::debug;

use crate::application::Transport;
use crate::domain::{ClientError, Completion, CompletionRequest};

pub const COMPLETIONS_PATH: &str = "v1/completions";

/// Single-prompt text completion.
pub struct Completions {
    transport: Arc<dyn Transport>,
}

impl Completions {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Generate a continuation of `request.prompt` with `request.model`.
    pub async fn create(&self, request: &CompletionRequest) -> Result<Completion, ClientError> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ClientError::request(format!("failed to serialize completion request: {e}")))?;

        debug!(
            "Requesting completion from model {} (max_tokens={})",
            request.model, request.max_tokens
        );
        let response = self.transport.post(COMPLETIONS_PATH, &payload).await?;

        let completion = Completion::from_response(response)?;
        debug!(
            "Completion {} returned {} choice(s), {} tokens",
            completion.id,
            completion.choices.len(),
            completion.usage.total_tokens
        );
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockTransport;
    use serde_json::json;

    fn completion_response() -> serde_json::Value {
        json!({
            "id": "c1",
            "created": 1700000000,
            "model": "m",
            "object": "text_completion",
            "choices": [{"text": "... continued", "index": 0}],
            "usage": {"prompt_tokens": 5, "completion_tokens": 10, "total_tokens": 15}
        })
    }

    #[tokio::test]
    async fn test_create_posts_payload_and_parses_result() {
        let transport = Arc::new(MockTransport::with_response(completion_response()));
        let completions = Completions::new(transport.clone());

        let request = CompletionRequest::new("m", "Once upon a time,")
            .with_max_tokens(50)
            .with_temperature(0.7);
        let completion = completions.create(&request).await.unwrap();

        assert_eq!(completion.usage.total_tokens, 15);
        assert_eq!(completion.choices[0].text, "... continued");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "v1/completions");
        assert_eq!(
            requests[0].payload,
            json!({
                "model": "m",
                "prompt": "Once upon a time,",
                "max_tokens": 50,
                "temperature": 0.7,
                "top_p": 1.0
            })
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_propagated() {
        let transport = Arc::new(MockTransport::with_status(401, "bad key"));
        let completions = Completions::new(transport);

        let err = completions
            .create(&CompletionRequest::new("m", "p"))
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_missing_id_is_malformed() {
        let mut response = completion_response();
        response.as_object_mut().unwrap().remove("id");
        let completions = Completions::new(Arc::new(MockTransport::with_response(response)));

        let err = completions
            .create(&CompletionRequest::new("m", "p"))
            .await
            .unwrap_err();

        assert!(err.is_malformed_response());
    }
}
