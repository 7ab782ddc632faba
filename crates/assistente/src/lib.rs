//! Assistente: a one-box chat UI over a hosted text-generation backend.
//!
//! The bespoke logic lives in [`Assistant`]: build a fixed two-message
//! conversation from the user prompt, invoke the configured generation
//! driver with fixed sampling options, and extract the assistant reply
//! by role. Everything else is configuration and plumbing around the
//! external collaborators (the inference backend and the browser).

pub mod cli;
mod config;
mod facade;
mod page;
mod server;

pub use config::{
    AppConfig, AppConfigBuilder, DEFAULT_BIND_ADDR, DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION,
};
pub use facade::Assistant;
pub use server::{create_router, run, AppState, AskRequest, AskResponse};
