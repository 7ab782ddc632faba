//! The text-generation pipeline driver.

use crate::huggingface::{
    from_candidates, to_parameters, HuggingFaceClient, InferenceOptions, InferenceOptionsBuilder,
    TextGenerationRequest,
};
use crate::template::PromptTemplate;
use assistente_core::{GenerateRequest, GenerateResponse};
use assistente_interface::{DriverResult, GenerationDriver};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// A generation pipeline bound to one model: prompt template, HTTP
/// client, and serving options.
///
/// Constructed once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct TextGenerationPipeline {
    client: HuggingFaceClient,
    model: String,
    template: PromptTemplate,
    serving: InferenceOptions,
}

impl TextGenerationPipeline {
    /// Creates a pipeline for the given model, selecting the prompt
    /// template from the model identifier.
    ///
    /// Cold starts wait for the model to load server-side; response
    /// caching is disabled because requests sample.
    pub fn new(client: HuggingFaceClient, model: impl Into<String>) -> Self {
        let model = model.into();
        let template = PromptTemplate::for_model(&model);
        let serving = InferenceOptionsBuilder::default()
            .use_cache(Some(false))
            .wait_for_model(Some(true))
            .build()
            .expect("all serving options set");

        Self {
            client,
            model,
            template,
            serving,
        }
    }

    /// Overrides the auto-selected prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// The model identifier this pipeline generates with.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationDriver for TextGenerationPipeline {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> DriverResult<GenerateResponse> {
        let inputs = self.template.render(request.conversation());
        debug!(
            message_count = request.conversation().len(),
            prompt_chars = inputs.len(),
            "Rendered prompt"
        );

        let wire = TextGenerationRequest::builder()
            .inputs(inputs)
            .parameters(Some(to_parameters(request.options())))
            .options(Some(self.serving.clone()))
            .build()
            .expect("inputs set");

        let candidates = self.client.generate(&self.model, &wire).await?;
        from_candidates(request, candidates)
    }
}
