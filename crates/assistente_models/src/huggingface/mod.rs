//! HuggingFace Inference API integration.

mod client;
mod conversions;
mod dto;

pub use client::{HuggingFaceClient, DEFAULT_ENDPOINT, TASK};
pub use conversions::{from_candidates, to_parameters};
pub use dto::{
    InferenceOptions, InferenceOptionsBuilder, TextGenerationCandidate,
    TextGenerationCandidateBuilder, TextGenerationParameters, TextGenerationParametersBuilder,
    TextGenerationRequest, TextGenerationRequestBuilder,
};
