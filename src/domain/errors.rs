use std::fmt;

/// Closed set of codes classifying every error surfaced by the bridge.
///
/// Mapping policy: configuration validation failures are [`ErrorKind::BadRequest`],
/// authentication failures during bridge construction are [`ErrorKind::Unauthorized`],
/// operations attempted on a disconnected handle are [`ErrorKind::ClientError`], and
/// all post-construction I/O failures (local file access, network write, metadata
/// read, timeout) are [`ErrorKind::FileOperationFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing configuration, or an invalid operation argument.
    BadRequest,
    /// Backend authentication failed or required credentials are absent.
    Unauthorized,
    /// The handle is not connected to a native client.
    ClientError,
    /// A local or remote file operation failed.
    FileOperationFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::ClientError => "client error",
            ErrorKind::FileOperationFailed => "file operation failed",
        };
        f.write_str(label)
    }
}

/// The single error shape crossing the bridge boundary: a stable kind code
/// plus at most one level of wrapped cause.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BifrostError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BifrostError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying cause. No further nesting happens beyond this level.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn client_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClientError, message)
    }

    pub fn file_operation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FileOperationFailed, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Result type used across the whole bridge boundary.
pub type BifrostResult<T> = Result<T, BifrostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_preserved() {
        let err = BifrostError::bad_request("no provider specified");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_string(), "bad request: no provider specified");
    }

    #[test]
    fn source_is_retained() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BifrostError::with_source(ErrorKind::FileOperationFailed, "open failed", io);
        assert_eq!(err.kind(), ErrorKind::FileOperationFailed);
        assert!(std::error::Error::source(&err).is_some());
    }
}
