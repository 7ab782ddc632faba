//! The inference façade.

use assistente_core::{Conversation, GenerateRequest, GenerationOptions, Message};
use assistente_error::{AssistenteResult, FacadeError};
use assistente_interface::GenerationDriver;
use std::sync::Arc;
use tracing::{debug, instrument};

/// The façade between the chat UI and the generation backend.
///
/// Holds the configured driver, the fixed system instruction, and the
/// fixed sampling options. Each call builds a fresh two-message
/// conversation; no state is carried between requests.
pub struct Assistant {
    driver: Arc<dyn GenerationDriver>,
    system_instruction: String,
    options: GenerationOptions,
}

impl Assistant {
    /// Creates an assistant over the given driver with the default
    /// sampling options.
    pub fn new(driver: Arc<dyn GenerationDriver>, system_instruction: impl Into<String>) -> Self {
        Self {
            driver,
            system_instruction: system_instruction.into(),
            options: GenerationOptions::default(),
        }
    }

    /// Replaces the sampling options. Fixed thereafter; `answer` never
    /// varies them per request.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Answers a user prompt.
    ///
    /// Builds the conversation `[system instruction, user prompt]`,
    /// invokes the driver, and returns the assistant reply exactly as
    /// generated. No retry, no validation of the prompt, no
    /// post-processing of the reply.
    ///
    /// # Errors
    ///
    /// Propagates any driver failure; fails if the generation result
    /// contains no assistant message.
    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    pub async fn answer(&self, prompt: &str) -> AssistenteResult<String> {
        let conversation = Conversation::new(vec![
            Message::system(self.system_instruction.clone()),
            Message::user(prompt),
        ]);

        let request = GenerateRequest::builder()
            .conversation(conversation)
            .options(self.options)
            .build()
            .expect("conversation set");

        let response = self.driver.generate(&request).await?;

        let reply = response.assistant_reply().ok_or_else(|| {
            FacadeError::new("No assistant message in generation result")
        })?;

        debug!(reply_chars = reply.len(), "Generated reply");

        Ok(reply.to_string())
    }
}
