use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while dispatching to a Bedrock backend
#[derive(Debug, Error)]
pub enum BedrockError {
    /// Requested alias is not in the dispatch table for the endpoint
    #[error("Invalid model")]
    InvalidModel,

    /// The model invocation itself failed
    #[error("model invocation failed: {0}")]
    Upstream(String),

    /// Error while consuming a streaming response
    #[error("streaming response failed: {0}")]
    Streaming(String),

    /// Response body did not match the backend's expected shape
    #[error("unexpected response shape from model {model_id}")]
    MalformedResponse { model_id: &'static str },

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl BedrockError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidModel => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Streaming(_) | Self::MalformedResponse { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to expose to API consumers
    ///
    /// Upstream and decode detail stays in server-side logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidModel => "Invalid model".to_owned(),
            Self::Upstream(_) => "model invocation failed".to_owned(),
            Self::Streaming(_) => "streaming response failed".to_owned(),
            Self::MalformedResponse { .. } => "unexpected response shape from model backend".to_owned(),
            Self::Internal(_) => "an internal error occurred".to_owned(),
        }
    }
}

impl IntoResponse for BedrockError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({ "error": self.client_message() });

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_model_is_a_client_error_with_fixed_message() {
        let error = BedrockError::InvalidModel;
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.client_message(), "Invalid model");
    }

    #[test]
    fn upstream_detail_is_not_exposed() {
        let error = BedrockError::Upstream("AccessDeniedException: key AKIA... rejected".to_owned());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.client_message().contains("AKIA"));
    }

    #[test]
    fn malformed_response_is_a_server_error() {
        let error = BedrockError::MalformedResponse {
            model_id: "amazon.titan-text-express-v1",
        };
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
