//! Request and response types for text generation.

use crate::{Conversation, GenerationOptions, Message, Role};
use serde::{Deserialize, Serialize};

/// A generation request: a conversation plus the fixed sampling options.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation to continue
    conversation: Conversation,
    /// Sampling options
    #[builder(default)]
    options: GenerationOptions,
}

impl GenerateRequest {
    /// Creates a builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The generation result: the input conversation with the assistant
/// reply appended by the backend driver.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// The messages of the completed exchange, in order
    messages: Vec<Message>,
}

impl GenerateResponse {
    /// Creates a builder for GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Content of the last assistant message, if the result contains one.
    ///
    /// Replies are looked up by role rather than by position; callers
    /// decide whether an absent reply is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use assistente_core::{GenerateResponse, Message};
    ///
    /// let response = GenerateResponse::builder()
    ///     .messages(vec![
    ///         Message::system("Você é um assistente virtual prestativo."),
    ///         Message::user("Qual a capital do Brasil?"),
    ///         Message::assistant("Brasília."),
    ///     ])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(response.assistant_reply(), Some("Brasília."));
    /// ```
    pub fn assistant_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| *m.role() == Role::Assistant)
            .map(|m| m.content().as_str())
    }
}
