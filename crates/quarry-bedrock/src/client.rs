//! Invocation client boundary over the Bedrock runtime SDK
//!
//! The dispatch core only needs two operations from the SDK: a buffered
//! invocation and a streaming one. Both are behind [`InvocationClient`]
//! so tests can substitute a stub without touching AWS.

use std::pin::Pin;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::operation::RequestId;
use aws_sdk_bedrockruntime::types::ResponseStream;
use aws_smithy_types::Blob;
use bytes::Bytes;
use futures_util::Stream;
use quarry_config::BedrockConfig;
use secrecy::ExposeSecret;

use crate::error::BedrockError;

/// Media type for Bedrock request and response payloads
const MEDIA_TYPE_JSON: &str = "application/json";

/// Result of a buffered invocation
pub struct Invocation {
    /// Backend request identifier from the response metadata
    pub request_id: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Result of a streaming invocation
pub struct InvocationStream {
    pub request_id: Option<String>,
    /// Response payload fragments in arrival order
    pub chunks: Pin<Box<dyn Stream<Item = Result<Bytes, BedrockError>> + Send>>,
}

/// Minimal client surface the dispatch core invokes models through
#[async_trait]
pub trait InvocationClient: Send + Sync {
    /// Invoke a model and buffer the full response body
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Invocation, BedrockError>;

    /// Invoke a model and surface the response as a chunk sequence
    async fn invoke_stream(&self, model_id: &str, body: Vec<u8>) -> Result<InvocationStream, BedrockError>;
}

/// [`InvocationClient`] backed by the Bedrock runtime SDK
pub struct BedrockInvoker {
    client: BedrockClient,
}

impl BedrockInvoker {
    /// Build the SDK client from configuration
    ///
    /// Uses explicit credentials when both halves are configured,
    /// otherwise falls back to the default AWS credential chain.
    pub async fn from_config(config: &BedrockConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some((access_key, secret_key)) = config.credentials() {
            let credentials = aws_credential_types::Credentials::new(
                access_key.expose_secret(),
                secret_key.expose_secret(),
                None,
                None,
                "quarry-config",
            );
            loader = loader.credentials_provider(credentials);
        }

        let sdk_config = loader.load().await;

        Self {
            client: BedrockClient::new(&sdk_config),
        }
    }
}

#[async_trait]
impl InvocationClient for BedrockInvoker {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Invocation, BedrockError> {
        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(MEDIA_TYPE_JSON)
            .accept(MEDIA_TYPE_JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model_id, error = %e, "bedrock invoke_model failed");
                BedrockError::Upstream(e.to_string())
            })?;

        let request_id = output.request_id().map(str::to_owned);

        Ok(Invocation {
            request_id,
            body: output.body.into_inner(),
        })
    }

    async fn invoke_stream(&self, model_id: &str, body: Vec<u8>) -> Result<InvocationStream, BedrockError> {
        let output = self
            .client
            .invoke_model_with_response_stream()
            .model_id(model_id)
            .content_type(MEDIA_TYPE_JSON)
            .accept(MEDIA_TYPE_JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model_id, error = %e, "bedrock invoke_model_with_response_stream failed");
                BedrockError::Upstream(e.to_string())
            })?;

        let request_id = output.request_id().map(str::to_owned);
        let receiver = output.body;

        let chunks = futures_util::stream::unfold(receiver, |mut receiver| async move {
            match receiver.recv().await {
                Ok(Some(ResponseStream::Chunk(part))) => {
                    let data = part.bytes.map_or_else(Bytes::new, |blob| Bytes::from(blob.into_inner()));
                    Some((Ok(data), receiver))
                }
                // Event variants other than Chunk carry no payload bytes
                Ok(Some(_)) => Some((Ok(Bytes::new()), receiver)),
                Ok(None) => None,
                Err(e) => Some((Err(BedrockError::Streaming(e.to_string())), receiver)),
            }
        });

        Ok(InvocationStream {
            request_id,
            chunks: Box::pin(chunks),
        })
    }
}
