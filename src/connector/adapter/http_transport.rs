use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::Transport;
use crate::domain::{ClientConfig, ClientError};

/// [`Transport`] over HTTP: one bearer-authenticated JSON POST per call.
///
/// No timeout or retry is configured; a failed call surfaces immediately as a
/// [`ClientError`].
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, payload: &Value) -> Result<Value, ClientError> {
        let url = self.config.endpoint(path);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key()))
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::request(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            warn!("HttpTransport: {url} returned {status}: {body}");
            return Err(ClientError::transport(status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::request(format!("failed to decode response from {url}: {e}")))
    }
}

/// Body of a failed response; a read failure is reported in place of the text.
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => format!("<unreadable body: {e}>"),
    }
}
