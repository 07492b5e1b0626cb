use serde::{Deserialize, Serialize};

/// Token accounting for one request/response pair, as reported by the service.
///
/// `total_tokens` is expected to equal `prompt_tokens + completion_tokens`; the
/// value is carried as received and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
