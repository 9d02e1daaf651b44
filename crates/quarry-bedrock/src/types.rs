use serde::{Deserialize, Serialize};

/// User message used when a completion request omits one
pub const DEFAULT_MESSAGE: &str = "Say this is a test";

/// Alias used when a completion request omits one
pub const DEFAULT_MODEL: &str = "amazon-titan";

/// Input used when an embedding request omits a message
pub const DEFAULT_EMBEDDING_MESSAGE: &str = "Test embedding";

/// Request body for both completion endpoints
///
/// Unknown fields are ignored; both fields fall back to documented
/// defaults when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionRequest {
    /// User message forwarded to the model
    pub message: Option<String>,
    /// Short alias selecting the backend model
    pub model: Option<String>,
}

impl ChatCompletionRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

/// Response body for `POST /chat-completion`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatCompletionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Output text extracted at the backend's field path
    pub output_text: String,
}

/// Response body for `POST /chat-completion-stream`
///
/// `output_obj` is the decoded concatenation of every response chunk,
/// returned verbatim with no per-backend field extraction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamChatCompletionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub output_obj: String,
}

/// Request body for `POST /embedding`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed
    pub message: Option<String>,
    /// Accepted for parity with the completion endpoints but ignored;
    /// the embedding backend is fixed
    pub model: Option<String>,
}

impl EmbeddingRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_EMBEDDING_MESSAGE)
    }
}

/// Response body for `POST /embedding`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub embedding: Vec<f64>,
}
