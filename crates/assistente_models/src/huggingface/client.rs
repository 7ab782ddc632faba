//! HTTP client for the HuggingFace Inference API.

use crate::huggingface::{TextGenerationCandidate, TextGenerationRequest};
use assistente_error::{BackendError, BackendErrorKind};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default base URL of the hosted Inference API.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// The pipeline task requests are routed to.
pub const TASK: &str = "text-generation";

/// HuggingFace Inference API client.
///
/// Model resolution, weights loading, and device placement all happen
/// server-side; this client carries the model identifier in the URL and
/// the access token in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    /// Creates a client against the hosted Inference API.
    pub fn new(token: Option<String>) -> Result<Self, BackendError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, token)
    }

    /// Creates a client against a custom endpoint (e.g. a self-hosted
    /// text-generation server).
    #[instrument(skip(token), fields(endpoint = %endpoint.as_ref()))]
    pub fn with_endpoint(
        endpoint: impl AsRef<str>,
        token: Option<String>,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| BackendError::new(BackendErrorKind::Http(e.to_string())))?;

        debug!(authenticated = token.is_some(), "Created HuggingFace client");

        Ok(Self {
            client,
            endpoint: endpoint.as_ref().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Sends a text-generation request for the given model.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport, the API
    /// answers with a non-success status, or the body cannot be parsed.
    #[instrument(skip(self, request), fields(model = %model))]
    pub async fn generate(
        &self,
        model: &str,
        request: &TextGenerationRequest,
    ) -> Result<Vec<TextGenerationCandidate>, BackendError> {
        let url = format!("{}/pipeline/{}/{}", self.endpoint, TASK, model);

        let mut builder = self.client.post(&url).json(request);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        debug!(url = %url, "Sending generation request");

        let response = builder.send().await.map_err(|e| {
            error!(model = %model, error = ?e, "HTTP request failed");
            BackendError::new(BackendErrorKind::Http(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(model = %model, status = %status, error = %message, "API error");
            return Err(BackendError::new(BackendErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let candidates: Vec<TextGenerationCandidate> = response.json().await.map_err(|e| {
            error!(model = %model, error = ?e, "Failed to parse response");
            BackendError::new(BackendErrorKind::Parse(e.to_string()))
        })?;

        debug!(candidates = candidates.len(), "Received response");

        Ok(candidates)
    }
}
