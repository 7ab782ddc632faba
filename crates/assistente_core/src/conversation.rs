//! Conversation types.

use crate::Message;
use serde::{Deserialize, Serialize};

/// An ordered sequence of role-tagged messages sent to a generation backend.
///
/// Conversations are built fresh per request; nothing here persists
/// across turns.
///
/// # Examples
///
/// ```
/// use assistente_core::{Conversation, Message, Role};
///
/// let conversation = Conversation::new(vec![
///     Message::system("Você é um assistente virtual prestativo."),
///     Message::user("Qual a capital do Brasil?"),
/// ]);
///
/// assert_eq!(conversation.messages().len(), 2);
/// assert_eq!(*conversation.messages()[1].role(), Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_getters::Getters)]
pub struct Conversation {
    /// The ordered messages of the conversation
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates a conversation from an ordered list of messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the conversation holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
