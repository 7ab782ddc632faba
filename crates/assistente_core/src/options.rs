//! Generation sampling options.

use serde::{Deserialize, Serialize};

/// Sampling options applied to every generation request.
///
/// Set once at startup and never varied per request. The defaults are
/// the values the façade runs with.
///
/// # Examples
///
/// ```
/// use assistente_core::GenerationOptions;
///
/// let options = GenerationOptions::default();
/// assert_eq!(*options.max_new_tokens(), 500);
/// assert!(!*options.return_full_text());
/// assert_eq!(*options.temperature(), 0.1);
/// assert!(*options.do_sample());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct GenerationOptions {
    /// Maximum number of new tokens to generate
    max_new_tokens: u32,
    /// Return only the generated continuation, not the prompt
    return_full_text: bool,
    /// Sampling temperature in (0, 1]
    temperature: f32,
    /// Enable sampling instead of greedy decoding
    do_sample: bool,
}

impl GenerationOptions {
    /// Creates a builder for GenerationOptions.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_new_tokens: 500,
            return_full_text: false,
            temperature: 0.1,
            do_sample: true,
        }
    }
}
