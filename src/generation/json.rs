//! Normalization of model output that is supposed to be JSON
//!
//! Exactly three transformations are applied before strict parsing: code
//! fences are stripped, typographic quotes are normalized, and trailing
//! commas before a closing brace/bracket are removed. Anything still
//! invalid after that is rejected, never fuzzily repaired.

use regex::Regex;
use std::sync::OnceLock;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```json|```").expect("invalid fence regex"))
}

fn trailing_comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*([}\]])").expect("invalid trailing-comma regex"))
}

/// Apply the documented normalization steps to raw model output.
pub fn normalize_llm_json(text: &str) -> String {
    let text = fence_re().replace_all(text, "");
    let text = text.replace('\u{201C}', "\"").replace('\u{201D}', "\"");
    let text = trailing_comma_re().replace_all(&text, "$1");
    text.trim().to_string()
}

/// Extract the outermost JSON object from surrounding prose: everything
/// from the first `{` to the last `}`. Returns None when no object is
/// present.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_output_round_trips() {
        let raw = "```json\n{\"a\":1,}\n```";
        let normalized = normalize_llm_json(raw);
        assert_eq!(normalized, "{\"a\":1}");
        let value: serde_json::Value = serde_json::from_str(&normalized).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_smart_quotes_normalized() {
        let raw = "{\u{201C}title\u{201D}: \u{201C}Quiz\u{201D}}";
        let normalized = normalize_llm_json(raw);
        assert_eq!(normalized, r#"{"title": "Quiz"}"#);
    }

    #[test]
    fn test_trailing_commas_in_arrays_and_objects() {
        let raw = r#"{"choices": ["a", "b",], "correct": 0,}"#;
        let normalized = normalize_llm_json(raw);
        assert!(serde_json::from_str::<serde_json::Value>(&normalized).is_ok());
    }

    #[test]
    fn test_valid_json_untouched() {
        let raw = r#"{"title": "Quiz", "questions": []}"#;
        assert_eq!(normalize_llm_json(raw), raw);
    }

    #[test]
    fn test_extract_object_from_prose() {
        let raw = "Here is your quiz:\n{\"a\": 1}\nEnjoy!";
        assert_eq!(extract_json_object(raw), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_object_missing() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }
}
