//! Shared dispatch state and the three invocation flows

use std::sync::Arc;

use futures_util::StreamExt;
use quarry_config::BedrockConfig;
use serde_json::Value;

use crate::client::{BedrockInvoker, InvocationClient};
use crate::error::BedrockError;
use crate::registry::{self, EMBED_TEXT, InvocationKind};
use crate::types::{ChatCompletionResponse, EmbeddingResponse, StreamChatCompletionResponse};

/// Shared state for the endpoint handlers
///
/// Holds the injected invocation client; the dispatch tables themselves
/// are process constants. Cloning is cheap and every request task reads
/// the same underlying client.
#[derive(Clone)]
pub struct BedrockState {
    client: Arc<dyn InvocationClient>,
}

impl BedrockState {
    /// Build state with the real SDK-backed client
    pub async fn from_config(config: &BedrockConfig) -> Self {
        Self::with_client(Arc::new(BedrockInvoker::from_config(config).await))
    }

    /// Build state around a caller-supplied client
    ///
    /// The seam tests use to substitute a stub for the SDK.
    pub fn with_client(client: Arc<dyn InvocationClient>) -> Self {
        Self { client }
    }

    /// Buffered completion: lookup, build, invoke, extract
    pub async fn complete(&self, model: &str, message: &str) -> Result<ChatCompletionResponse, BedrockError> {
        let Some(resolved) = registry::lookup(model, InvocationKind::Completion) else {
            tracing::debug!(model, "completion alias not in dispatch table");
            return Err(BedrockError::InvalidModel);
        };

        let payload = encode_body(&(resolved.spec.build_body)(message))?;
        let invocation = self.client.invoke(resolved.spec.model_id, payload).await?;

        let decoded: Value = serde_json::from_slice(&invocation.body).map_err(|e| {
            tracing::error!(model_id = resolved.spec.model_id, error = %e, "response body is not valid JSON");
            BedrockError::MalformedResponse {
                model_id: resolved.spec.model_id,
            }
        })?;

        let output_text = (resolved.spec.extract)(&decoded).ok_or(BedrockError::MalformedResponse {
            model_id: resolved.spec.model_id,
        })?;

        Ok(ChatCompletionResponse {
            request_id: invocation.request_id,
            output_text,
        })
    }

    /// Streaming completion, drained before responding
    ///
    /// The chunk sequence is fully consumed and concatenated; the caller
    /// receives the decoded text verbatim, not a field-extracted value.
    pub async fn complete_stream(
        &self,
        model: &str,
        message: &str,
    ) -> Result<StreamChatCompletionResponse, BedrockError> {
        let Some(resolved) = registry::lookup(model, InvocationKind::StreamingCompletion) else {
            tracing::debug!(model, "streaming alias not in dispatch table");
            return Err(BedrockError::InvalidModel);
        };

        let payload = encode_body(&(resolved.spec.build_body)(message))?;
        let stream = self.client.invoke_stream(resolved.spec.model_id, payload).await?;

        let mut chunks = stream.chunks;
        let mut buffered = Vec::new();
        while let Some(chunk) = chunks.next().await {
            buffered.extend_from_slice(&chunk?);
        }

        Ok(StreamChatCompletionResponse {
            request_id: stream.request_id,
            output_obj: String::from_utf8_lossy(&buffered).into_owned(),
        })
    }

    /// Embedding against the fixed backend; no alias resolution
    pub async fn embed(&self, message: &str) -> Result<EmbeddingResponse, BedrockError> {
        let payload = encode_body(&(EMBED_TEXT.build_body)(message))?;
        let invocation = self.client.invoke(EMBED_TEXT.model_id, payload).await?;

        let decoded: Value = serde_json::from_slice(&invocation.body).map_err(|e| {
            tracing::error!(model_id = EMBED_TEXT.model_id, error = %e, "response body is not valid JSON");
            BedrockError::MalformedResponse {
                model_id: EMBED_TEXT.model_id,
            }
        })?;

        let embedding = (EMBED_TEXT.extract)(&decoded).ok_or(BedrockError::MalformedResponse {
            model_id: EMBED_TEXT.model_id,
        })?;

        Ok(EmbeddingResponse {
            request_id: invocation.request_id,
            embedding,
        })
    }
}

fn encode_body(body: &Value) -> Result<Vec<u8>, BedrockError> {
    serde_json::to_vec(body).map_err(|e| BedrockError::Internal(e.into()))
}
