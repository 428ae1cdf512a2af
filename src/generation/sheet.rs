//! Revision-sheet generation pipeline
//!
//! Retrieves a broad slice of the selected course, asks the model for a
//! formal study sheet, and frames the result as a downloadable document.
//! Page layout proper is an external concern; the service ships the
//! structured document bytes with attachment headers.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::generation::prompt::PromptBuilder;
use crate::providers::chat::{ChatMessage, ChatProvider};
use crate::retrieval::Retriever;
use crate::types::{DocumentSelector, SourceFilter};

/// Fixed retrieval query gathering the study-relevant material
const SHEET_QUERY: &str = "key concepts, important definitions and structured summary";

/// Header line printed at the top of every sheet
const SHEET_HEADER: &str = "POLLY | Pedagogical Assistant";

/// A rendered revision sheet ready to stream to the caller
#[derive(Debug, Clone)]
pub struct RevisionSheet {
    /// Attachment filename derived from the document name
    pub filename: String,
    /// Document body
    pub content: String,
}

impl RevisionSheet {
    pub fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }
}

/// Generates revision sheets from retrieved course material
pub struct SheetGenerator {
    retriever: Arc<Retriever>,
    chat: Arc<dyn ChatProvider>,
    top_k: usize,
}

impl SheetGenerator {
    pub fn new(retriever: Arc<Retriever>, chat: Arc<dyn ChatProvider>, top_k: usize) -> Self {
        Self {
            retriever,
            chat,
            top_k,
        }
    }

    /// Generate the revision sheet for the selected document(s).
    pub async fn generate(&self, selector: &DocumentSelector) -> Result<RevisionSheet> {
        let doc_name = primary_document(selector);
        tracing::info!("revision sheet requested for {:?}", doc_name);

        let filter = SourceFilter::from_selector(selector);
        let chunks = self.retriever.retrieve(SHEET_QUERY, self.top_k, &filter).await?;

        if chunks.is_empty() {
            return Err(Error::EmptyRetrieval(format!(
                "No content found for course '{}'.",
                doc_name
            )));
        }

        let prompt = PromptBuilder::sheet_prompt(&doc_name, &chunks);
        let body = self.chat.chat(&[ChatMessage::user(prompt)]).await?;

        Ok(RevisionSheet {
            filename: sheet_filename(&doc_name),
            content: frame_sheet(&doc_name, &body),
        })
    }
}

/// The sheet is titled after the first selected document.
fn primary_document(selector: &DocumentSelector) -> String {
    match selector {
        DocumentSelector::Single(name) => name.clone(),
        DocumentSelector::Many(names) if !names.is_empty() => names[0].clone(),
        _ => selector.label(),
    }
}

/// Attachment filename: spaces become underscores.
fn sheet_filename(doc_name: &str) -> String {
    format!("Sheet_{}.md", doc_name.replace(' ', "_"))
}

/// Frame the model output with the branded header and footer.
fn frame_sheet(doc_name: &str, body: &str) -> String {
    format!(
        "{header}\n\n{body}\n\n---\n{header} - Course: {doc}\n",
        header = SHEET_HEADER,
        body = body.trim(),
        doc = doc_name
    )
}
