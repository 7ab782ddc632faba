//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// HuggingFace generation parameters.
///
/// Field names follow the Inference API contract; unset fields are
/// omitted from the request body.
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize)]
#[builder(setter(into))]
pub struct TextGenerationParameters {
    /// Maximum new tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_new_tokens: Option<u32>,
    /// Return the prompt together with the continuation
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    return_full_text: Option<bool>,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Sample instead of greedy decoding
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    do_sample: Option<bool>,
}

impl TextGenerationParameters {
    /// Creates a new builder for `TextGenerationParameters`.
    pub fn builder() -> TextGenerationParametersBuilder {
        TextGenerationParametersBuilder::default()
    }
}

/// Serving-side options for the Inference API.
///
/// `wait_for_model` blocks while the model is loaded server-side instead
/// of failing with a 503 on cold starts.
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize)]
#[builder(setter(into))]
pub struct InferenceOptions {
    /// Serve cached results for identical requests
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    use_cache: Option<bool>,
    /// Wait for a cold model to load rather than erroring
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_for_model: Option<bool>,
}

impl InferenceOptions {
    /// Creates a new builder for `InferenceOptions`.
    pub fn builder() -> InferenceOptionsBuilder {
        InferenceOptionsBuilder::default()
    }
}

/// HuggingFace API request body.
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize)]
#[builder(setter(into))]
pub struct TextGenerationRequest {
    /// Rendered prompt text
    inputs: String,
    /// Generation parameters
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<TextGenerationParameters>,
    /// Serving options
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<InferenceOptions>,
}

impl TextGenerationRequest {
    /// Creates a new builder for `TextGenerationRequest`.
    pub fn builder() -> TextGenerationRequestBuilder {
        TextGenerationRequestBuilder::default()
    }
}

/// One generation candidate from the API.
///
/// The API returns an array of these; with a single sequence requested
/// it holds exactly one element.
#[derive(Debug, Clone, PartialEq, Getters, Builder, Deserialize)]
#[builder(setter(into))]
pub struct TextGenerationCandidate {
    /// Generated text
    generated_text: String,
}

impl TextGenerationCandidate {
    /// Creates a new builder for `TextGenerationCandidate`.
    pub fn builder() -> TextGenerationCandidateBuilder {
        TextGenerationCandidateBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_inference_api_field_names() {
        let request = TextGenerationRequest::builder()
            .inputs("<|user|>\noi<|end|>\n<|assistant|>\n".to_string())
            .parameters(Some(
                TextGenerationParameters::builder()
                    .max_new_tokens(Some(500u32))
                    .return_full_text(Some(false))
                    .temperature(Some(0.1f32))
                    .do_sample(Some(true))
                    .build()
                    .unwrap(),
            ))
            .build()
            .unwrap();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["parameters"]["max_new_tokens"], 500);
        assert_eq!(body["parameters"]["return_full_text"], false);
        assert_eq!(body["parameters"]["do_sample"], true);
        assert!(body.get("options").is_none());
    }

    #[test]
    fn unset_parameters_are_omitted() {
        let parameters = TextGenerationParameters::builder()
            .temperature(Some(0.1f32))
            .build()
            .unwrap();

        let body = serde_json::to_value(&parameters).unwrap();
        assert!(body.get("max_new_tokens").is_none());
        assert!(body.get("temperature").is_some());
    }

    #[test]
    fn candidate_array_deserializes() {
        let candidates: Vec<TextGenerationCandidate> =
            serde_json::from_str(r#"[{"generated_text": "Brasília."}]"#).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].generated_text(), "Brasília.");
    }
}
