//! Bedrock dispatch core for Quarry
//!
//! Maps short model aliases to Bedrock model identifiers, builds each
//! backend's bespoke request payload, invokes the model through an
//! injectable client, and extracts the normalized output text or
//! embedding vector.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod client;
pub mod error;
pub mod registry;
pub mod router;
pub mod state;
pub mod types;

pub use client::{BedrockInvoker, Invocation, InvocationClient, InvocationStream};
pub use error::BedrockError;
pub use registry::{InvocationKind, ModelAlias, ProviderSpec};
pub use router::bedrock_router;
pub use state::BedrockState;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, EmbeddingRequest, EmbeddingResponse, StreamChatCompletionResponse,
};
