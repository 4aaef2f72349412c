//! API Error Types
//!
//! Errors returned by the typed client. A rejection carries the server's
//! `detail` text when the payload had one.

use thiserror::Error;

use super::dto::ErrorBody;
use super::transport::{ApiResponse, TransportError};

/// Errors from a single request/response exchange
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("Request rejected ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// Request never produced a response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 2xx response whose body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a rejection from a non-2xx response, reading `detail` leniently
    pub(crate) fn rejected(response: &ApiResponse) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.as_str().map(str::to_string));

        ApiError::Rejected {
            status: response.status,
            detail,
        }
    }

    /// Server-supplied detail, if this is a rejection that carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the server answered (as opposed to transport or decode failures)
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_rejection_reads_detail() {
        let err = ApiError::rejected(&response(400, r#"{"detail":"Student is already signed up"}"#));
        assert!(err.is_rejection());
        assert_eq!(err.detail(), Some("Student is already signed up"));
    }

    #[test]
    fn test_rejection_without_usable_detail() {
        let err = ApiError::rejected(&response(500, "Internal Server Error"));
        assert_eq!(err.detail(), None);

        // FastAPI validation errors put a list under `detail`
        let err = ApiError::rejected(&response(422, r#"{"detail":[{"msg":"field required"}]}"#));
        assert_eq!(err.detail(), None);
        assert!(matches!(err, ApiError::Rejected { status: 422, .. }));
    }

    #[test]
    fn test_transport_error_is_not_rejection() {
        let err: ApiError = TransportError::Network("connection refused".to_string()).into();
        assert!(!err.is_rejection());
        assert_eq!(err.detail(), None);
    }
}
