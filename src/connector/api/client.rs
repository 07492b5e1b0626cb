use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatCompletions, Completions, Transport};
use crate::connector::HttpTransport;
use crate::domain::{ClientConfig, ClientError};

/// Entry point of the library: one transport shared by both resources.
///
/// ```no_run
/// # async fn run() -> Result<(), neoclient::ClientError> {
/// use neoclient::{ChatCompletionRequest, ClientConfig, Message, NeoClient};
///
/// let client = NeoClient::new(ClientConfig::from_env(None, None)?)?;
/// let chat = client
///     .chat_completions()
///     .create(&ChatCompletionRequest::new(
///         "neolang-small",
///         vec![Message::user("Say this is a test")],
///     ))
///     .await?;
/// println!("{}", chat.content().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
pub struct NeoClient {
    completions: Completions,
    chat_completions: ChatCompletions,
}

impl NeoClient {
    /// Build a client talking HTTP to `config.base_url()`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        debug!("Creating client for {}", config.base_url());
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Resolve configuration from `NEOINFER_URL` / `NEOINFER_API_KEY` (and a
    /// `.env` file, if present) and build a client.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env(None, None)?)
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            completions: Completions::new(Arc::clone(&transport)),
            chat_completions: ChatCompletions::new(transport),
        }
    }

    pub fn completions(&self) -> &Completions {
        &self.completions
    }

    pub fn chat_completions(&self) -> &ChatCompletions {
        &self.chat_completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockTransport;
    use crate::domain::{ChatCompletionRequest, CompletionRequest, Message};
    use serde_json::json;

    #[test]
    fn test_new_does_not_touch_the_network() {
        let config = ClientConfig::new("http://127.0.0.1:9", "test_key").unwrap();
        assert!(NeoClient::new(config).is_ok());
    }

    #[tokio::test]
    async fn test_resources_share_transport() {
        let transport = Arc::new(MockTransport::with_status(500, "boom"));
        let client = NeoClient::with_transport(transport.clone());

        let _ = client
            .completions()
            .create(&CompletionRequest::new("m", "p"))
            .await;
        let _ = client
            .chat_completions()
            .create(&ChatCompletionRequest::new("m", vec![Message::user("hi")]))
            .await;

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["v1/completions", "v1/chat/completions"]);
        assert_eq!(transport.requests()[1].payload["model"], json!("m"));
    }
}
