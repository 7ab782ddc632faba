//! Driver trait definitions.
//!
//! The [`GenerationDriver`] trait is the seam between the façade and any
//! generation backend: the live HTTP pipeline in production, a recording
//! stub in tests.

use assistente_core::{GenerateRequest, GenerateResponse};
use assistente_error::BackendError;
use async_trait::async_trait;
use std::sync::Arc;

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, BackendError>;

/// A generation backend: given a conversation and sampling options,
/// produces the completed exchange.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Run one generation request to completion.
    ///
    /// Implementations own transport, authentication, and response
    /// assembly. Failures propagate; no retry happens at this seam.
    async fn generate(&self, request: &GenerateRequest) -> DriverResult<GenerateResponse>;
}

#[async_trait]
impl<D> GenerationDriver for Arc<D>
where
    D: GenerationDriver + ?Sized,
{
    async fn generate(&self, request: &GenerateRequest) -> DriverResult<GenerateResponse> {
        (**self).generate(request).await
    }
}
