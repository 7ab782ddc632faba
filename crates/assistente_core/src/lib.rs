//! Core data types for the Assistente inference façade.
//!
//! This crate provides the foundation data types shared by the façade,
//! the generation backend driver, and the HTTP server.

mod conversation;
mod message;
mod options;
mod request;
mod role;

pub use conversation::Conversation;
pub use message::Message;
pub use options::GenerationOptions;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
