use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::Transport;
use crate::domain::{validate_messages, ChatCompletion, ChatCompletionRequest, ClientError};

pub const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";

/// Next-message generation for a role-tagged conversation.
///
/// The conversation is checked with [`validate_messages`] before anything is
/// sent; a rejected conversation never reaches the transport.
pub struct ChatCompletions {
    transport: Arc<dyn Transport>,
}

impl ChatCompletions {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: &ChatCompletionRequest) -> Result<ChatCompletion, ClientError> {
        if let Err(e) = validate_messages(&request.messages) {
            warn!("Rejected chat completion request: {e}");
            return Err(e.into());
        }

        let payload = serde_json::to_value(request).map_err(|e| {
            ClientError::request(format!("failed to serialize chat completion request: {e}"))
        })?;

        debug!(
            "Requesting chat completion from model {} ({} messages, ignore_eos={})",
            request.model,
            request.messages.len(),
            request.ignore_eos
        );
        let response = self.transport.post(CHAT_COMPLETIONS_PATH, &payload).await?;

        let chat = ChatCompletion::from_response(response)?;
        debug!(
            "Chat completion {} returned {} choice(s), {} tokens",
            chat.id,
            chat.choices.len(),
            chat.usage.total_tokens
        );
        Ok(chat)
    }
}
