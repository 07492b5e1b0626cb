use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::domain::ClientError;

pub const BASE_URL_ENV: &str = "NEOINFER_URL";
pub const API_KEY_ENV: &str = "NEOINFER_API_KEY";

/// Where the inference service lives and how to authenticate against it.
///
/// Resolved once, before any client is built, and immutable afterwards.
#[derive(Debug)]
pub struct ClientConfig {
    base_url: String,
    api_key: SecretString,
}

impl ClientConfig {
    /// Build a configuration from explicit values. Both must be non-empty.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::resolve(Some(base_url.into()), Some(api_key.into()), |_| None)
    }

    /// Resolve each value from its explicit argument first, then from `lookup`
    /// keyed by [`BASE_URL_ENV`] / [`API_KEY_ENV`]. Empty strings count as unset;
    /// trailing slashes are stripped from the base URL before that check.
    pub fn resolve<F>(
        base_url: Option<String>,
        api_key: Option<String>,
        lookup: F,
    ) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = normalize_base_url(base_url).or_else(|| normalize_base_url(lookup(BASE_URL_ENV)));
        let api_key = non_empty(api_key).or_else(|| non_empty(lookup(API_KEY_ENV)));

        let (Some(base_url), Some(api_key)) = (base_url, api_key) else {
            return Err(ClientError::configuration(format!(
                "{BASE_URL_ENV} and {API_KEY_ENV} must be set as arguments or environment variables"
            )));
        };

        Ok(Self {
            base_url,
            api_key: SecretString::from(api_key),
        })
    }

    /// Resolve against the process environment, after loading a `.env` file
    /// from the working directory (or its parents) if one exists.
    pub fn from_env(base_url: Option<String>, api_key: Option<String>) -> Result<Self, ClientError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::resolve(base_url, api_key, |key| std::env::var(key).ok())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Absolute URL of an endpoint path such as `v1/completions`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_base_url(value: Option<String>) -> Option<String> {
    non_empty(value.map(|v| v.trim_end_matches('/').to_string()))
}
