//! Retrieved passages

use serde::{Deserialize, Serialize};

/// A passage retrieved from the vector store. Immutable once retrieved;
/// uniqueness is defined by exact content equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Passage text
    pub content: String,
    /// Name of the source document
    pub source: String,
}

impl Chunk {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }

    /// First `max_len` characters with newlines flattened, for logging
    pub fn snippet(&self, max_len: usize) -> String {
        self.content
            .replace('\n', " ")
            .chars()
            .take(max_len)
            .collect()
    }
}

/// Join chunk texts into one context block for a prompt
pub fn join_chunks(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_flattens_newlines() {
        let chunk = Chunk::new("line one\nline two", "Doc");
        assert_eq!(chunk.snippet(100), "line one line two");
        assert_eq!(chunk.snippet(8), "line one");
    }

    #[test]
    fn test_join_chunks() {
        let chunks = vec![Chunk::new("a", "D"), Chunk::new("b", "D")];
        assert_eq!(join_chunks(&chunks), "a\n\nb");
    }
}
