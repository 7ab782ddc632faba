//! Command-line interface.

use crate::config::{
    AppConfig, DEFAULT_BIND_ADDR, DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION,
};
use assistente_error::AssistenteResult;
use clap::Parser;

/// Assistente Virtual: a one-box chat UI over a hosted
/// text-generation backend.
#[derive(Debug, Parser)]
#[command(name = "assistente", version)]
pub struct Cli {
    /// Model identifier on the inference backend
    #[arg(long, env = "ASSISTENTE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Backend base URL (defaults to the hosted Inference API)
    #[arg(long, env = "ASSISTENTE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// HuggingFace access token; public models work without one
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Address to serve the chat UI on
    #[arg(long, env = "ASSISTENTE_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: String,

    /// System instruction prepended to every conversation
    #[arg(
        long,
        env = "ASSISTENTE_SYSTEM_INSTRUCTION",
        default_value = DEFAULT_SYSTEM_INSTRUCTION
    )]
    pub system_instruction: String,
}

impl Cli {
    /// Resolves the parsed arguments into the application configuration.
    pub fn into_config(self) -> AssistenteResult<AppConfig> {
        let bind_addr = AppConfig::parse_bind_addr(&self.bind_addr)?;

        Ok(AppConfig::builder()
            .model(self.model)
            .endpoint(self.endpoint)
            .hf_token(self.token)
            .bind_addr(bind_addr)
            .system_instruction(self.system_instruction)
            .build()
            .expect("all fields set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_configuration() {
        let cli = Cli::try_parse_from(["assistente"]).unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.bind_addr().to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.system_instruction(), DEFAULT_SYSTEM_INSTRUCTION);
        assert!(config.endpoint().is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "assistente",
            "--model",
            "mistralai/Mistral-7B-Instruct-v0.3",
            "--bind-addr",
            "0.0.0.0:8080",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.model(), "mistralai/Mistral-7B-Instruct-v0.3");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_bind_addr_is_a_config_error() {
        let cli = Cli::try_parse_from(["assistente", "--bind-addr", "not-an-address"]).unwrap();
        assert!(cli.into_config().is_err());
    }
}
