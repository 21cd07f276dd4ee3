//! Transport error types.

/// Errors raised while fetching a resource from the upstream API.
///
/// None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Request could not complete (DNS, refused connection, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service could not be reached. Used by transports that have no
    /// underlying `reqwest::Error` to report.
    #[error("connection failed: {0}")]
    Connection(String),

    /// API returned a non-2xx status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl TransportError {
    /// HTTP status code, if the service answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::Status {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API error 404: Not Found");
        assert_eq!(err.status(), Some(404));

        let err = TransportError::Json {
            message: "expected value at line 1 column 1".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert_eq!(err.status(), None);

        let err = TransportError::Connection("connection refused".into());
        assert_eq!(err.to_string(), "connection failed: connection refused");
    }
}
