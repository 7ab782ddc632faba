//! Tests for the HuggingFace pipeline against the live Inference API.
//!
//! These tests require network access and an `HF_TOKEN` with inference
//! permissions in the environment (or a `.env` file).
//!
//! Run with: cargo test --package assistente_models -- --ignored

use assistente_core::{Conversation, GenerateRequest, Message};
use assistente_error::BackendErrorKind;
use assistente_interface::GenerationDriver;
use assistente_models::{HuggingFaceClient, TextGenerationPipeline};

fn live_client() -> Result<HuggingFaceClient, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let token = std::env::var("HF_TOKEN").ok();
    Ok(HuggingFaceClient::new(token)?)
}

#[tokio::test]
#[ignore] // Requires network access and HF_TOKEN
async fn test_live_generation() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline =
        TextGenerationPipeline::new(live_client()?, "microsoft/Phi-3.5-mini-instruct");

    let request = GenerateRequest::builder()
        .conversation(Conversation::new(vec![
            Message::system(
                "Você é um assistente virtual prestativo. Responda somente em Português.",
            ),
            Message::user("Qual a capital do Brasil?"),
        ]))
        .build()?;

    let response = pipeline.generate(&request).await?;

    let reply = response.assistant_reply().expect("assistant reply present");
    assert!(!reply.is_empty());
    println!("Reply: {}", reply);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_unknown_model_is_an_api_error() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = TextGenerationPipeline::new(live_client()?, "assistente/nonexistent-model");

    let request = GenerateRequest::builder()
        .conversation(Conversation::new(vec![Message::user("oi")]))
        .build()?;

    let result = pipeline.generate(&request).await;
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(matches!(e.kind, BackendErrorKind::Api { .. }));
    }
    Ok(())
}
