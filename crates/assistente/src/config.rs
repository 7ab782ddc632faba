//! Process configuration.
//!
//! All process-wide state (credential, model identifier, endpoint,
//! listen address, system instruction, sampling options) is collected
//! here once at startup and passed by reference, replacing ambient
//! environment lookups at call sites.

use assistente_core::GenerationOptions;
use assistente_error::{AssistenteResult, ConfigError};
use std::net::SocketAddr;

/// Default model identifier on the inference backend.
pub const DEFAULT_MODEL: &str = "microsoft/Phi-3.5-mini-instruct";

/// Default listen address for the chat UI.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7860";

/// The fixed system instruction sent with every request.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "Você é um assistente virtual prestativo. Responda somente em Português.";

/// Application configuration, constructed once at startup.
///
/// # Examples
///
/// ```
/// use assistente::AppConfig;
///
/// let config = AppConfig::builder().build().unwrap();
/// assert_eq!(config.model(), "microsoft/Phi-3.5-mini-instruct");
/// assert!(config.hf_token().is_none());
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AppConfig {
    /// Model identifier on the inference backend
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Backend base URL; None selects the hosted Inference API
    #[builder(default)]
    endpoint: Option<String>,
    /// HuggingFace access token; public models work without one
    #[builder(default)]
    hf_token: Option<String>,
    /// Address the chat UI listens on
    #[builder(default = "DEFAULT_BIND_ADDR.parse().expect(\"valid default address\")")]
    bind_addr: SocketAddr,
    /// System instruction prepended to every conversation
    #[builder(default = "DEFAULT_SYSTEM_INSTRUCTION.to_string()")]
    system_instruction: String,
    /// Sampling options, fixed for the process lifetime
    #[builder(default)]
    options: GenerationOptions,
}

impl AppConfig {
    /// Creates a builder for AppConfig.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parses a listen address, mapping failures to a configuration error.
    pub fn parse_bind_addr(addr: &str) -> AssistenteResult<SocketAddr> {
        addr.parse().map_err(|_| {
            ConfigError::new(format!("Invalid listen address: {}", addr)).into()
        })
    }
}
