//! Generation backend error types.

/// Backend-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackendErrorKind {
    /// HTTP transport failure (connection, TLS, timeout)
    Http(String),
    /// Backend returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },
    /// Response body could not be deserialized
    Parse(String),
    /// Backend returned an empty candidate list
    EmptyGeneration,
}

impl std::fmt::Display for BackendErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendErrorKind::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            BackendErrorKind::Api { status, message } => {
                write!(f, "Backend error (status {}): {}", status, message)
            }
            BackendErrorKind::Parse(msg) => write!(f, "Response parsing failed: {}", msg),
            BackendErrorKind::EmptyGeneration => {
                write!(f, "Backend returned no generation candidates")
            }
        }
    }
}

/// Backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use assistente_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::EmptyGeneration);
/// assert!(format!("{}", err).contains("no generation candidates"));
/// ```
#[derive(Debug, Clone)]
pub struct BackendError {
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Backend Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for BackendError {}
