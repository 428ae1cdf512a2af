//! Quiz (QCM) generation pipeline

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::generation::json::{extract_json_object, normalize_llm_json};
use crate::generation::prompt::PromptBuilder;
use crate::providers::chat::{ChatMessage, ChatProvider};
use crate::retrieval::Retriever;
use crate::types::{DocumentSelector, Quiz, SourceFilter};

/// Generates quizzes from retrieved course material
pub struct QuizGenerator {
    retriever: Arc<Retriever>,
    chat: Arc<dyn ChatProvider>,
    top_k: usize,
}

impl QuizGenerator {
    pub fn new(retriever: Arc<Retriever>, chat: Arc<dyn ChatProvider>, top_k: usize) -> Self {
        Self {
            retriever,
            chat,
            top_k,
        }
    }

    /// Generate a quiz on `topic`, scoped by `selector`.
    ///
    /// Empty retrieval is a not-found condition rather than a hard
    /// failure. Model output that still fails to parse after
    /// normalization is rejected with the raw text attached.
    pub async fn generate(&self, topic: &str, selector: &DocumentSelector) -> Result<Quiz> {
        tracing::info!("quiz generation: topic={:?} scope={}", topic, selector.label());

        let filter = SourceFilter::from_selector(selector);
        let chunks = self.retriever.retrieve(topic, self.top_k, &filter).await?;

        if chunks.iter().all(|c| c.content.trim().is_empty()) {
            return Err(Error::EmptyRetrieval(
                "No content found to generate this quiz.".to_string(),
            ));
        }

        let prompt = PromptBuilder::quiz_prompt(topic, &chunks);
        let raw = self.chat.chat(&[ChatMessage::user(prompt)]).await?;
        tracing::debug!("raw quiz output: {}", raw);

        let object = extract_json_object(&raw)
            .ok_or_else(|| Error::malformed("model output contained no JSON object", &raw))?;
        let normalized = normalize_llm_json(object);

        Quiz::from_model_output(&normalized, &raw)
    }
}
