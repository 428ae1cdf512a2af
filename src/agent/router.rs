//! Tool arbitration for the tutoring conversation
//!
//! The router owns tool dispatch instead of delegating the choice to the
//! model. Every question goes through the internal course search first;
//! the external web search is only reachable after the assistant has made
//! the handoff offer and the user has agreed to it.

use std::sync::Arc;

use crate::agent::consent;
use crate::error::Result;
use crate::generation::prompt::{external_offer, PromptBuilder};
use crate::providers::chat::{ChatMessage, ChatProvider};
use crate::providers::WebSearchProvider;
use crate::retrieval::Retriever;
use crate::types::{ChatTurn, DocumentSelector, Role, SourceFilter};

/// Which tool a routing pass invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    InternalSearch,
    ExternalSearch,
}

/// Record of a single tool call made while answering
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub kind: ToolKind,
    pub query: String,
}

/// The routed answer plus the tool calls that produced it
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub answer: String,
    pub invocations: Vec<ToolInvocation>,
}

/// Drives one question through the search-then-answer protocol.
pub struct ToolRouter {
    retriever: Arc<Retriever>,
    chat: Arc<dyn ChatProvider>,
    web_search: Arc<dyn WebSearchProvider>,
    top_k: usize,
}

impl ToolRouter {
    pub fn new(
        retriever: Arc<Retriever>,
        chat: Arc<dyn ChatProvider>,
        web_search: Arc<dyn WebSearchProvider>,
        top_k: usize,
    ) -> Self {
        Self {
            retriever,
            chat,
            web_search,
            top_k,
        }
    }

    /// Answer `question` in the context of `history`, scoped to `selector`.
    pub async fn route(
        &self,
        question: &str,
        history: &[ChatTurn],
        selector: &DocumentSelector,
    ) -> Result<RouteOutcome> {
        if consent::consent_granted(question, history) {
            tracing::info!("external search consent granted");
            return self.answer_external(question, history, selector).await;
        }
        self.answer_internal(question, history, selector).await
    }

    /// The course-first path: reformulate, search the course, then either
    /// compose from the retrieved passages or fall back to the handoff offer.
    async fn answer_internal(
        &self,
        question: &str,
        history: &[ChatTurn],
        selector: &DocumentSelector,
    ) -> Result<RouteOutcome> {
        let standalone = self.reformulate(question, history).await?;

        let filter = SourceFilter::from_selector(selector);
        let chunks = self.retriever.retrieve(&standalone, self.top_k, &filter).await?;
        let invocations = vec![ToolInvocation {
            kind: ToolKind::InternalSearch,
            query: standalone.clone(),
        }];

        if chunks.is_empty() {
            tracing::info!("no course passages found, offering external search");
            return Ok(RouteOutcome {
                answer: external_offer(&selector.label()),
                invocations,
            });
        }

        let messages = [
            ChatMessage::system(PromptBuilder::tutor_system_prompt(&selector.label())),
            ChatMessage::user(PromptBuilder::compose_internal(question, history, &chunks)),
        ];
        let answer = self.chat.chat(&messages).await?;

        Ok(RouteOutcome {
            answer,
            invocations,
        })
    }

    /// The consented path: search the web for the question that triggered
    /// the offer, then compose with explicit external provenance.
    async fn answer_external(
        &self,
        message: &str,
        history: &[ChatTurn],
        selector: &DocumentSelector,
    ) -> Result<RouteOutcome> {
        // The consent message itself ("yes please") carries no query;
        // the question the offer answered is the last user turn before it.
        let (original_question, prior_history) = history
            .iter()
            .rposition(|turn| turn.role == Role::User)
            .map(|idx| (history[idx].content.as_str(), &history[..idx]))
            .unwrap_or((message, &[][..]));

        let query = self.reformulate(original_question, prior_history).await?;
        let results = self.web_search.search(&query).await?;

        let messages = [
            ChatMessage::system(PromptBuilder::tutor_system_prompt(&selector.label())),
            ChatMessage::user(PromptBuilder::compose_external(
                original_question,
                history,
                &results,
            )),
        ];
        let answer = self.chat.chat(&messages).await?;

        Ok(RouteOutcome {
            answer,
            invocations: vec![ToolInvocation {
                kind: ToolKind::ExternalSearch,
                query,
            }],
        })
    }

    /// Rewrite a follow-up into a standalone search query. A question with
    /// no history is already standalone.
    async fn reformulate(&self, question: &str, history: &[ChatTurn]) -> Result<String> {
        if history.is_empty() {
            return Ok(question.to_string());
        }
        let prompt = PromptBuilder::reformulation_prompt(question, history);
        let standalone = self.chat.chat(&[ChatMessage::user(prompt)]).await?;
        let standalone = standalone.trim();
        if standalone.is_empty() {
            return Ok(question.to_string());
        }
        tracing::info!(original = question, reformulated = standalone, "reformulated question");
        Ok(standalone.to_string())
    }
}
