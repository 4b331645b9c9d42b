//! Error types for the A7 client.
//!
//! Every failure surfaces as exactly one [`A7Error`]. Response-level errors
//! (a completed HTTP exchange with a non-2xx status) map onto a fixed
//! status-to-kind table and keep the raw response body in the message so
//! callers can diagnose without re-issuing the call. Transport-level
//! failures (DNS, TCP, TLS, timeout) carry no status code.

use thiserror::Error;

/// Errors returned by the A7 client.
#[derive(Debug, Error)]
pub enum A7Error {
    /// Authentication failed (HTTP 401).
    #[error("{0}")]
    Authentication(String),

    /// Access forbidden (HTTP 403).
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Request validation failed (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Rate limit exceeded (HTTP 429).
    #[error("{0}")]
    RateLimit(String),

    /// Server-side error: any 5xx status, or a non-2xx status with no
    /// mapping of its own. Carries the original status code.
    #[error("{message}")]
    Server {
        /// Status code of the failed response.
        status: u16,
        /// Error message including the raw response body.
        message: String,
    },

    /// The HTTP exchange itself failed; no response exists to inspect.
    /// Covers DNS resolution, TCP connect, TLS handshake, and timeouts,
    /// as well as calls issued after the client was closed.
    #[error("{0}")]
    Connection(String),

    /// Client-side failure outside the status table, e.g. a 2xx response
    /// body that could not be decoded.
    #[error("{0}")]
    Generic(String),
}

impl A7Error {
    /// Translate a completed non-2xx response into the matching error kind.
    ///
    /// The message has the form `HTTP {status}: {body}` with the body text
    /// passed through verbatim.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = format!("HTTP {status}: {body}");
        match status {
            401 => Self::Authentication(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 => Self::Validation(message),
            429 => Self::RateLimit(message),
            // 5xx and every unmapped non-2xx status (e.g. 3xx seen as an
            // error, 418) deliberately land here.
            _ => Self::Server { status, message },
        }
    }

    /// The HTTP status code associated with this error, if any.
    ///
    /// `Connection` and `Generic` errors have none.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::RateLimit(_) => Some(429),
            Self::Server { status, .. } => Some(*status),
            Self::Connection(_) | Self::Generic(_) => None,
        }
    }
}

impl From<reqwest::Error> for A7Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Generic(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_authentication() {
        let err = A7Error::from_status(401, "unauthorized");
        assert!(matches!(err, A7Error::Authentication(_)));
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn status_403_maps_to_forbidden() {
        let err = A7Error::from_status(403, "nope");
        assert!(matches!(err, A7Error::Forbidden(_)));
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn status_404_maps_to_not_found() {
        let err = A7Error::from_status(404, r#"{"error":"not found"}"#);
        assert!(matches!(err, A7Error::NotFound(_)));
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn status_400_maps_to_validation() {
        let err = A7Error::from_status(400, "bad request");
        assert!(matches!(err, A7Error::Validation(_)));
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn status_429_maps_to_rate_limit() {
        let err = A7Error::from_status(429, "slow down");
        assert!(matches!(err, A7Error::RateLimit(_)));
        assert_eq!(err.status_code(), Some(429));
    }

    #[test]
    fn server_range_maps_to_server() {
        for status in [500, 502, 503, 599] {
            let err = A7Error::from_status(status, "boom");
            assert!(matches!(err, A7Error::Server { .. }));
            assert_eq!(err.status_code(), Some(status));
        }
    }

    #[test]
    fn unmapped_status_falls_back_to_server() {
        let err = A7Error::from_status(418, "teapot");
        assert!(matches!(err, A7Error::Server { status: 418, .. }));
        assert_eq!(err.status_code(), Some(418));
    }

    #[test]
    fn message_contains_status_and_body() {
        let err = A7Error::from_status(404, r#"{"error":"not found"}"#);
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains(r#"{"error":"not found"}"#));
        assert_eq!(message, r#"HTTP 404: {"error":"not found"}"#);
    }

    #[test]
    fn connection_error_has_no_status() {
        let err = A7Error::Connection("connect refused".to_string());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn generic_error_has_no_status() {
        let err = A7Error::Generic("bad payload".to_string());
        assert_eq!(err.status_code(), None);
    }
}
