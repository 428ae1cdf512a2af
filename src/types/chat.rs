//! Conversation types for the /ask endpoint

use serde::{Deserialize, Serialize};

use super::selector::RawSelector;

/// Speaker of one conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn of conversation history. Insertion order is chronological and
/// is preserved verbatim into prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Render history as "USER: ..." / "ASSISTANT: ..." lines for a prompt
pub fn format_history(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("{}: {}", turn.role.as_str().to_uppercase(), turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body of POST /ask
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    /// `null`, `"GLOBAL"`, a document name, or a list of names
    #[serde(default)]
    pub document: Option<RawSelector>,
}

/// Body of the /ask response
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_preserves_order() {
        let history = vec![
            ChatTurn::user("Tell me about democracy."),
            ChatTurn::assistant("Democracy is..."),
            ChatTurn::user("Give me examples."),
        ];
        let rendered = format_history(&history);
        assert_eq!(
            rendered,
            "USER: Tell me about democracy.\nASSISTANT: Democracy is...\nUSER: Give me examples."
        );
    }

    #[test]
    fn test_ask_request_deserializes_selector_shapes() {
        let single: AskRequest =
            serde_json::from_str(r#"{"question":"q","history":[],"document":"Intro"}"#).unwrap();
        assert!(matches!(single.document, Some(RawSelector::One(_))));

        let many: AskRequest =
            serde_json::from_str(r#"{"question":"q","history":[],"document":["A","B"]}"#).unwrap();
        assert!(matches!(many.document, Some(RawSelector::Many(_))));

        let absent: AskRequest = serde_json::from_str(r#"{"question":"q"}"#).unwrap();
        assert!(absent.document.is_none());

        let null: AskRequest =
            serde_json::from_str(r#"{"question":"q","history":[],"document":null}"#).unwrap();
        assert!(null.document.is_none());
    }
}
