use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Usage;
use crate::domain::ClientError;

pub const TEXT_COMPLETION_OBJECT: &str = "text_completion";

/// One generated continuation of a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<Value>,
}

/// Response of the `v1/completions` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub id: String,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
    /// Unix timestamp (seconds) of when the request was processed.
    pub created: i64,
    pub model: String,
    pub object: String,
    pub usage: Usage,
}

impl Completion {
    pub fn from_response(response: Value) -> Result<Self, ClientError> {
        parse_response(response, TEXT_COMPLETION_OBJECT)
    }

    /// Text of the first choice, if the service returned any.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}

/// Deserialize a success payload into a typed result, rejecting payloads whose
/// `object` tag is not `expected_object`.
pub(crate) fn parse_response<T: DeserializeOwned>(
    response: Value,
    expected_object: &str,
) -> Result<T, ClientError> {
    if let Some(object) = response.get("object") {
        if object.as_str() != Some(expected_object) {
            return Err(ClientError::malformed(format!(
                "expected object '{expected_object}', got {object}"
            )));
        }
    }

    serde_json::from_value(response).map_err(|e| ClientError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "id": "c1",
            "created": 1700000000,
            "model": "m",
            "object": "text_completion",
            "choices": [{"text": "... continued", "index": 0}],
            "usage": {"prompt_tokens": 5, "completion_tokens": 10, "total_tokens": 15}
        })
    }

    #[test]
    fn parses_all_fields() {
        let completion = Completion::from_response(payload()).unwrap();

        assert_eq!(completion.id, "c1");
        assert_eq!(completion.created, 1_700_000_000);
        assert_eq!(completion.model, "m");
        assert_eq!(completion.object, "text_completion");
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].index, Some(0));
        assert_eq!(completion.choices[0].finish_reason, None);
        assert_eq!(completion.text(), Some("... continued"));
        assert_eq!(completion.usage.total_tokens, 15);
    }

    #[test]
    fn missing_choices_is_empty() {
        let mut response = payload();
        response.as_object_mut().unwrap().remove("choices");

        let completion = Completion::from_response(response).unwrap();
        assert!(completion.choices.is_empty());
        assert_eq!(completion.text(), None);
    }

    #[test]
    fn missing_required_keys_are_malformed() {
        for key in ["id", "created", "model", "object", "usage"] {
            let mut response = payload();
            response.as_object_mut().unwrap().remove(key);

            let err = Completion::from_response(response).unwrap_err();
            assert!(err.is_malformed_response(), "removing {key} gave {err}");
        }
    }

    #[test]
    fn unexpected_object_tag_is_malformed() {
        let mut response = payload();
        response["object"] = json!("chat.completion");

        let err = Completion::from_response(response).unwrap_err();
        assert!(err.is_malformed_response());
        assert!(err.to_string().contains("text_completion"));
    }
}
