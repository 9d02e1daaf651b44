//! Axum route handlers for the three gateway endpoints

use axum::extract::State;
use axum::{Json, Router, routing};

use crate::error::BedrockError;
use crate::state::BedrockState;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, EmbeddingRequest, EmbeddingResponse, StreamChatCompletionResponse,
};

/// Build the gateway router with all endpoints
pub fn bedrock_router(state: BedrockState) -> Router {
    Router::new()
        .route("/chat-completion", routing::post(chat_completion))
        .route("/chat-completion-stream", routing::post(chat_completion_stream))
        .route("/embedding", routing::post(embedding))
        .with_state(state)
}

/// Handle `POST /chat-completion`
async fn chat_completion(
    State(state): State<BedrockState>,
    body: Option<Json<ChatCompletionRequest>>,
) -> Result<Json<ChatCompletionResponse>, BedrockError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let response = state.complete(request.model(), request.message()).await?;

    Ok(Json(response))
}

/// Handle `POST /chat-completion-stream`
///
/// Drains the backend's chunk stream fully before responding; the caller
/// sees the buffered concatenation, not incremental output.
async fn chat_completion_stream(
    State(state): State<BedrockState>,
    body: Option<Json<ChatCompletionRequest>>,
) -> Result<Json<StreamChatCompletionResponse>, BedrockError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let response = state.complete_stream(request.model(), request.message()).await?;

    Ok(Json(response))
}

/// Handle `POST /embedding`
async fn embedding(
    State(state): State<BedrockState>,
    body: Option<Json<EmbeddingRequest>>,
) -> Result<Json<EmbeddingResponse>, BedrockError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let response = state.embed(request.message()).await?;

    Ok(Json(response))
}
