//! API Errors
//!
//! Failures of a single request against the activities API.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The fetch itself failed (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Non-2xx response, with the server's `detail` if it sent one
    #[error("Server responded with status {status}")]
    Server { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Transport or parsing failure, as opposed to a server-reported one
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_))
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::Network("offline".into()).is_transport());
        assert!(ApiError::Decode("eof".into()).is_transport());
        assert!(!ApiError::Server { status: 400, detail: None }.is_transport());
    }

    #[test]
    fn test_detail_only_from_server_errors() {
        let err = ApiError::Server { status: 404, detail: Some("Activity not found".into()) };
        assert_eq!(err.detail(), Some("Activity not found"));
        assert_eq!(ApiError::Network("offline".into()).detail(), None);
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
