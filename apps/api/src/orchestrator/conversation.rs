//! Conversation history helpers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Drops exact repeats of the previous message and any non-system message
/// whose role matches the last non-system role, so user and assistant alternate.
pub fn normalize_messages(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut normalized: Vec<ChatMessage> = Vec::with_capacity(messages.len());
    let mut last_role: Option<Role> = None;

    for msg in messages {
        if normalized.last() == Some(msg) {
            continue;
        }
        if msg.role != Role::System && last_role == Some(msg.role) {
            continue;
        }
        if msg.role != Role::System {
            last_role = Some(msg.role);
        }
        normalized.push(msg.clone());
    }

    normalized
}

/// Number of prior user messages after normalization.
pub fn turn_count(history: &[ChatMessage]) -> usize {
    normalize_messages(history)
        .iter()
        .filter(|m| m.role == Role::User)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(text: &str) -> ChatMessage {
        ChatMessage::new(Role::User, text)
    }

    fn assistant(text: &str) -> ChatMessage {
        ChatMessage::new(Role::Assistant, text)
    }

    #[test]
    fn test_empty_history() {
        assert!(normalize_messages(&[]).is_empty());
        assert_eq!(turn_count(&[]), 0);
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let history = vec![user("hi"), user("hi"), assistant("hello")];
        assert_eq!(normalize_messages(&history), vec![user("hi"), assistant("hello")]);
    }

    #[test]
    fn test_same_role_twice_keeps_first() {
        let history = vec![user("first"), user("second"), assistant("reply"), assistant("again")];
        assert_eq!(
            normalize_messages(&history),
            vec![user("first"), assistant("reply")]
        );
    }

    #[test]
    fn test_system_messages_do_not_break_alternation() {
        let history = vec![
            ChatMessage::new(Role::System, "note"),
            user("q1"),
            ChatMessage::new(Role::System, "note 2"),
            assistant("a1"),
            user("q2"),
        ];
        let normalized = normalize_messages(&history);
        assert_eq!(normalized.len(), 5);
        assert_eq!(turn_count(&history), 2);
    }

    #[test]
    fn test_turn_count_ignores_collapsed_user_messages() {
        let history = vec![user("a"), user("b"), user("c"), assistant("x"), user("d")];
        assert_eq!(turn_count(&history), 2);
    }

    #[test]
    fn test_roles_deserialize_lowercase() {
        let msg: ChatMessage = serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }
}
