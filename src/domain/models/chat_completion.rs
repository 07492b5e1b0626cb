use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::completion::parse_response;
use super::{Message, Usage};
use crate::domain::ClientError;

pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";

/// One generated reply in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: Message,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<Value>,
}

/// Response of the `v1/chat/completions` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    pub created: i64,
    pub model: String,
    pub object: String,
    pub usage: Usage,
}

impl ChatCompletion {
    pub fn from_response(response: Value) -> Result<Self, ClientError> {
        parse_response(response, CHAT_COMPLETION_OBJECT)
    }

    /// Content of the first generated message, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}
