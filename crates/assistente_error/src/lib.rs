//! Error types for the Assistente inference façade.
//!
//! This crate provides the foundation error types used across the
//! Assistente workspace.

mod backend;
mod config;
mod facade;
mod server;

pub use backend::{BackendError, BackendErrorKind};
pub use config::ConfigError;
pub use facade::FacadeError;
pub use server::ServerError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum AssistenteErrorKind {
    /// Generation backend error
    Backend(BackendError),
    /// Configuration error
    Config(ConfigError),
    /// Façade contract violation
    Facade(FacadeError),
    /// HTTP server error
    Server(ServerError),
}

impl std::fmt::Display for AssistenteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistenteErrorKind::Backend(e) => write!(f, "{}", e),
            AssistenteErrorKind::Config(e) => write!(f, "{}", e),
            AssistenteErrorKind::Facade(e) => write!(f, "{}", e),
            AssistenteErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Assistente error with kind discrimination.
#[derive(Debug)]
pub struct AssistenteError(Box<AssistenteErrorKind>);

impl AssistenteError {
    /// Create a new error from a kind.
    pub fn new(kind: AssistenteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AssistenteErrorKind {
        &self.0
    }
}

impl std::fmt::Display for AssistenteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Assistente Error: {}", self.0)
    }
}

impl std::error::Error for AssistenteError {}

// Generic From implementation for any type that converts to AssistenteErrorKind
impl<T> From<T> for AssistenteError
where
    T: Into<AssistenteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Assistente operations.
pub type AssistenteResult<T> = std::result::Result<T, AssistenteError>;
