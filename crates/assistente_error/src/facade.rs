//! Façade error types.

/// Façade error with source location.
///
/// Raised when the generation result violates the façade contract,
/// e.g. no assistant message to extract a reply from.
#[derive(Debug, Clone)]
pub struct FacadeError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FacadeError {
    /// Create a new FacadeError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for FacadeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Façade Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for FacadeError {}
