//! Type conversions between core and HuggingFace wire formats.

use crate::huggingface::{
    TextGenerationCandidate, TextGenerationParameters, TextGenerationParametersBuilder,
};
use assistente_core::{GenerateRequest, GenerateResponse, GenerationOptions, Message};
use assistente_error::{BackendError, BackendErrorKind};

/// Maps core generation options onto wire parameters.
pub fn to_parameters(options: &GenerationOptions) -> TextGenerationParameters {
    TextGenerationParametersBuilder::default()
        .max_new_tokens(Some(*options.max_new_tokens()))
        .return_full_text(Some(*options.return_full_text()))
        .temperature(Some(*options.temperature()))
        .do_sample(Some(*options.do_sample()))
        .build()
        .expect("all parameter fields set")
}

/// Assembles the completed exchange from the backend's candidates.
///
/// The input conversation is echoed back with the first candidate
/// appended as the assistant message. An empty candidate list is an
/// error; the façade never fabricates a reply.
pub fn from_candidates(
    request: &GenerateRequest,
    candidates: Vec<TextGenerationCandidate>,
) -> Result<GenerateResponse, BackendError> {
    let candidate = candidates
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::new(BackendErrorKind::EmptyGeneration))?;

    let mut messages = request.conversation().messages().clone();
    messages.push(Message::assistant(candidate.generated_text().clone()));

    Ok(GenerateResponse::builder()
        .messages(messages)
        .build()
        .expect("messages set"))
}
