//! Prompt rendering for instruction-tuned chat models.
//!
//! The hosted text-generation endpoint takes a flat prompt string, so
//! the conversation is rendered client-side in the model's native chat
//! format before it crosses the wire.

use assistente_core::Conversation;

/// Chat formats understood by the supported model families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    /// Phi-3 instruct format: `<|role|>\n...<|end|>\n`
    Phi3,
    /// ChatML: `<|im_start|>role\n...<|im_end|>\n`
    ChatMl,
}

impl PromptTemplate {
    /// Selects a template from the model identifier.
    ///
    /// Phi models use their own instruct format; everything else gets
    /// ChatML, the most widely adopted default.
    pub fn for_model(model: &str) -> Self {
        if model.to_ascii_lowercase().contains("phi") {
            PromptTemplate::Phi3
        } else {
            PromptTemplate::ChatMl
        }
    }

    /// Renders a conversation into a prompt ending with an open
    /// assistant turn for the model to complete.
    pub fn render(&self, conversation: &Conversation) -> String {
        match self {
            PromptTemplate::Phi3 => {
                let mut prompt = String::new();
                for message in conversation.messages() {
                    prompt.push_str(&format!(
                        "<|{}|>\n{}<|end|>\n",
                        message.role(),
                        message.content()
                    ));
                }
                prompt.push_str("<|assistant|>\n");
                prompt
            }
            PromptTemplate::ChatMl => {
                let mut prompt = String::new();
                for message in conversation.messages() {
                    prompt.push_str(&format!(
                        "<|im_start|>{}\n{}<|im_end|>\n",
                        message.role(),
                        message.content()
                    ));
                }
                prompt.push_str("<|im_start|>assistant\n");
                prompt
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistente_core::Message;

    fn conversation() -> Conversation {
        Conversation::new(vec![
            Message::system("Você é um assistente virtual prestativo."),
            Message::user("Qual a capital do Brasil?"),
        ])
    }

    #[test]
    fn phi3_selected_for_phi_models() {
        assert_eq!(
            PromptTemplate::for_model("microsoft/Phi-3.5-mini-instruct"),
            PromptTemplate::Phi3
        );
        assert_eq!(
            PromptTemplate::for_model("mistralai/Mistral-7B-Instruct-v0.3"),
            PromptTemplate::ChatMl
        );
    }

    #[test]
    fn phi3_renders_roles_and_open_assistant_turn() {
        let prompt = PromptTemplate::Phi3.render(&conversation());
        assert_eq!(
            prompt,
            "<|system|>\nVocê é um assistente virtual prestativo.<|end|>\n\
             <|user|>\nQual a capital do Brasil?<|end|>\n\
             <|assistant|>\n"
        );
    }

    #[test]
    fn chatml_renders_roles_and_open_assistant_turn() {
        let prompt = PromptTemplate::ChatMl.render(&conversation());
        assert!(prompt.starts_with("<|im_start|>system\n"));
        assert!(prompt.ends_with("<|im_start|>assistant\n"));
        assert!(prompt.contains("<|im_start|>user\nQual a capital do Brasil?<|im_end|>\n"));
    }
}
