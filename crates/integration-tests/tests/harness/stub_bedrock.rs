//! Stub invocation client returning canned Bedrock responses
//!
//! Stands in for the AWS SDK behind the `InvocationClient` seam: tests
//! choose the body or chunk sequence up front and can assert how many
//! invocations reached the backend and what was sent.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use quarry_bedrock::{BedrockError, BedrockState, Invocation, InvocationClient, InvocationStream};

/// Request identifier every stub invocation reports
pub const STUB_REQUEST_ID: &str = "stub-request";

/// A single invocation recorded by the stub
#[derive(Debug, Clone)]
pub struct RecordedInvocation {
    pub model_id: String,
    pub body: serde_json::Value,
}

pub struct StubInvoker {
    response_body: Vec<u8>,
    chunks: Vec<Bytes>,
    fail: bool,
    invocations: AtomicU32,
    recorded: Mutex<Vec<RecordedInvocation>>,
}

impl StubInvoker {
    /// Stub that answers every invocation with `body`
    pub fn with_body(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response_body: body.as_bytes().to_vec(),
            chunks: Vec::new(),
            fail: false,
            invocations: AtomicU32::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    /// Stub that yields `chunks` from streaming invocations
    pub fn with_chunks(chunks: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            response_body: Vec::new(),
            chunks: chunks.iter().map(|c| Bytes::copy_from_slice(c.as_bytes())).collect(),
            fail: false,
            invocations: AtomicU32::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    /// Stub that fails every invocation
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response_body: Vec::new(),
            chunks: Vec::new(),
            fail: true,
            invocations: AtomicU32::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    /// Dispatch state wired to this stub
    pub fn state(self: &Arc<Self>) -> BedrockState {
        BedrockState::with_client(Arc::clone(self) as Arc<dyn InvocationClient>)
    }

    /// Number of invocations that reached the stub
    pub fn invocation_count(&self) -> u32 {
        self.invocations.load(Ordering::Relaxed)
    }

    /// Invocations in arrival order
    pub fn recorded(&self) -> Vec<RecordedInvocation> {
        self.recorded.lock().unwrap().clone()
    }

    fn record(&self, model_id: &str, body: &[u8]) -> Result<(), BedrockError> {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        self.recorded.lock().unwrap().push(RecordedInvocation {
            model_id: model_id.to_owned(),
            body: serde_json::from_slice(body).expect("request payload is JSON"),
        });

        if self.fail {
            return Err(BedrockError::Upstream("stub backend failure".to_owned()));
        }

        Ok(())
    }
}

#[async_trait]
impl InvocationClient for StubInvoker {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Invocation, BedrockError> {
        self.record(model_id, &body)?;

        Ok(Invocation {
            request_id: Some(STUB_REQUEST_ID.to_owned()),
            body: self.response_body.clone(),
        })
    }

    async fn invoke_stream(&self, model_id: &str, body: Vec<u8>) -> Result<InvocationStream, BedrockError> {
        self.record(model_id, &body)?;

        let chunks = futures_util::stream::iter(self.chunks.clone().into_iter().map(Ok::<_, BedrockError>));

        Ok(InvocationStream {
            request_id: Some(STUB_REQUEST_ID.to_owned()),
            chunks: Box::pin(chunks),
        })
    }
}
