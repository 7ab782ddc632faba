//! Tests for the façade contract, with the generation backend stubbed.
//!
//! The stub driver records every request it receives and echoes the
//! conversation back with a fixed assistant reply appended, which is
//! the response shape the live pipeline produces.

use assistente::{Assistant, DEFAULT_SYSTEM_INSTRUCTION};
use assistente_core::{GenerateRequest, GenerateResponse, GenerationOptions, Message, Role};
use assistente_error::AssistenteErrorKind;
use assistente_interface::{DriverResult, GenerationDriver};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

struct RecordingDriver {
    requests: Mutex<Vec<GenerateRequest>>,
    reply: Option<String>,
}

impl RecordingDriver {
    fn with_reply(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Some(reply.to_string()),
        })
    }

    fn without_reply() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: None,
        })
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationDriver for RecordingDriver {
    async fn generate(&self, request: &GenerateRequest) -> DriverResult<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let mut messages = request.conversation().messages().clone();
        if let Some(reply) = &self.reply {
            messages.push(Message::assistant(reply.clone()));
        }

        Ok(GenerateResponse::builder()
            .messages(messages)
            .build()
            .unwrap())
    }
}

fn assistant(driver: Arc<RecordingDriver>) -> Assistant {
    Assistant::new(driver, DEFAULT_SYSTEM_INSTRUCTION)
}

#[tokio::test]
async fn answer_builds_the_fixed_two_message_conversation() {
    let driver = RecordingDriver::with_reply("Brasília.");
    assistant(driver.clone())
        .answer("Qual a capital do Brasil?")
        .await
        .unwrap();

    let requests = driver.requests();
    assert_eq!(requests.len(), 1);

    let messages = requests[0].conversation().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(*messages[0].role(), Role::System);
    assert_eq!(messages[0].content(), DEFAULT_SYSTEM_INSTRUCTION);
    assert_eq!(*messages[1].role(), Role::User);
    assert_eq!(messages[1].content(), "Qual a capital do Brasil?");
}

#[tokio::test]
async fn answer_always_sends_the_fixed_generation_options() {
    let driver = RecordingDriver::with_reply("ok");
    let assistant = assistant(driver.clone());

    assistant.answer("primeira pergunta").await.unwrap();
    assistant.answer("segunda pergunta").await.unwrap();

    let expected = GenerationOptions::default();
    for request in driver.requests() {
        assert_eq!(*request.options().max_new_tokens(), 500);
        assert!(!*request.options().return_full_text());
        assert_eq!(*request.options().temperature(), 0.1);
        assert!(*request.options().do_sample());
        assert_eq!(*request.options(), expected);
    }
}

#[tokio::test]
async fn answer_returns_the_reply_byte_for_byte() {
    let driver = RecordingDriver::with_reply("Brasília.");
    let reply = assistant(driver)
        .answer("Qual a capital do Brasil?")
        .await
        .unwrap();

    assert_eq!(reply, "Brasília.");
}

#[tokio::test]
async fn answer_fails_when_the_result_has_no_assistant_message() {
    let driver = RecordingDriver::without_reply();
    let result = assistant(driver).answer("Qual a capital do Brasil?").await;

    let err = result.unwrap_err();
    assert!(matches!(err.kind(), AssistenteErrorKind::Facade(_)));
}

#[tokio::test]
async fn consecutive_answers_build_independent_conversations() {
    let driver = RecordingDriver::with_reply("ok");
    let assistant = assistant(driver.clone());

    assistant.answer("Qual a capital do Brasil?").await.unwrap();
    assistant.answer("E a da Argentina?").await.unwrap();

    let requests = driver.requests();
    assert_eq!(requests.len(), 2);

    let second = requests[1].conversation().messages();
    assert_eq!(second.len(), 2);
    assert!(second
        .iter()
        .all(|m| m.content() != "Qual a capital do Brasil?"));
    assert_eq!(second[1].content(), "E a da Argentina?");
}
