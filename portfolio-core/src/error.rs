//! Error types for the portfolio API flows.

use thiserror::Error;

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted...)
    #[error("network error on {endpoint}: {message}")]
    Network {
        /// Endpoint path that was requested
        endpoint: String,
        /// Error text reported by the transport
        message: String,
    },

    /// Response arrived with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path that was requested
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// Body did not match the expected JSON shape
    #[error("could not decode {endpoint}: {message}")]
    Decode {
        /// Endpoint path that was requested
        endpoint: String,
        /// serde error text
        message: String,
    },
}

impl ApiError {
    /// Endpoint the error belongs to.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Network { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// The two failure kinds the page can observe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// One of the read endpoints failed; recovered with demo data.
    #[error("profile load failed: {0}")]
    Load(#[source] ApiError),

    /// The contact write failed; surfaced as the `error` status.
    #[error("contact submission failed: {0}")]
    Submit(#[source] ApiError),
}

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_endpoint() {
        let err = ApiError::Status {
            endpoint: "/api/skills/".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "/api/skills/ returned HTTP 503");
        assert_eq!(err.endpoint(), "/api/skills/");
    }

    #[test]
    fn portfolio_error_wraps_source() {
        let err = PortfolioError::Submit(ApiError::Network {
            endpoint: "/contact/".into(),
            message: "offline".into(),
        });
        assert_eq!(
            err.to_string(),
            "contact submission failed: network error on /contact/: offline"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
