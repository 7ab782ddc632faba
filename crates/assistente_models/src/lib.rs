//! Generation backend implementations for the Assistente façade.
//!
//! Currently one backend: the HuggingFace Inference API, wrapped in a
//! [`TextGenerationPipeline`] that implements
//! [`assistente_interface::GenerationDriver`].

mod huggingface;
mod pipeline;
mod template;

pub use huggingface::{
    from_candidates, to_parameters, HuggingFaceClient, InferenceOptions, TextGenerationCandidate,
    TextGenerationParameters, TextGenerationRequest, DEFAULT_ENDPOINT, TASK,
};
pub use pipeline::TextGenerationPipeline;
pub use template::PromptTemplate;
