//! HTTP server for the chat UI and ask endpoint.

use crate::page::PAGE;
use crate::{AppConfig, Assistant};
use assistente_error::{AssistenteResult, ServerError};
use assistente_models::{HuggingFaceClient, TextGenerationPipeline};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Server state shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// The inference façade.
    pub assistant: Arc<Assistant>,
}

impl AppState {
    /// Creates a new server state.
    pub fn new(assistant: Arc<Assistant>) -> Self {
        Self { assistant }
    }
}

/// An ask request from the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    /// User prompt text
    pub prompt: String,
}

/// The reply returned to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Assistant reply text
    pub reply: String,
}

/// Creates the router serving the page, the ask endpoint, and health.
pub fn create_router(assistant: Arc<Assistant>) -> Router {
    let state = AppState { assistant };

    Router::new()
        .route("/", get(serve_page))
        .route("/api/ask", post(ask))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serves the one-box chat page.
#[instrument(skip_all)]
async fn serve_page() -> impl IntoResponse {
    Html(PAGE)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Answers a prompt through the façade.
///
/// Façade errors are not retried or repaired; they are logged and
/// surfaced to the page as a 500.
#[instrument(skip(state, request), fields(prompt_chars = request.prompt.len()))]
async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.assistant.answer(&request.prompt).await {
        Ok(reply) => Ok(Json(AskResponse { reply })),
        Err(e) => {
            error!(error = %e, "Generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "generation failed" })),
            ))
        }
    }
}

/// Builds the pipeline and façade from configuration and serves the
/// chat UI until interrupted.
pub async fn run(config: AppConfig) -> AssistenteResult<()> {
    let client = match config.endpoint() {
        Some(endpoint) => {
            HuggingFaceClient::with_endpoint(endpoint, config.hf_token().clone())?
        }
        None => HuggingFaceClient::new(config.hf_token().clone())?,
    };
    let pipeline = TextGenerationPipeline::new(client, config.model().clone());
    let assistant = Arc::new(
        Assistant::new(Arc::new(pipeline), config.system_instruction().clone())
            .with_options(*config.options()),
    );

    let router = create_router(assistant);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| {
            ServerError::new(format!("Failed to bind {}: {}", config.bind_addr(), e))
        })?;

    info!(addr = %config.bind_addr(), model = %config.model(), "Assistente Virtual listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(format!("Server failed: {}", e)))?;

    info!("Shutting down");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
}
