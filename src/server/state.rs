//! Shared application state
//!
//! Everything behind the `Arc` is immutable after startup. In particular
//! there is no process-wide "current document": the selection travels with
//! each request so concurrent users never see each other's choice.

use std::sync::Arc;

use crate::agent::ToolRouter;
use crate::config::TutorConfig;
use crate::generation::{QuizGenerator, SheetGenerator};
use crate::providers::{ChatProvider, EmbeddingProvider, VectorStoreProvider, WebSearchProvider};
use crate::retrieval::Retriever;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: TutorConfig,
    store: Arc<dyn VectorStoreProvider>,
    router: ToolRouter,
    quiz: QuizGenerator,
    sheet: SheetGenerator,
}

impl AppState {
    pub fn new(
        config: TutorConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        chat: Arc<dyn ChatProvider>,
        web_search: Arc<dyn WebSearchProvider>,
        store: Arc<dyn VectorStoreProvider>,
    ) -> Self {
        let retriever = Arc::new(Retriever::new(embedder, store.clone()));
        let router = ToolRouter::new(
            retriever.clone(),
            chat.clone(),
            web_search,
            config.retrieval.top_k,
        );
        let quiz = QuizGenerator::new(retriever.clone(), chat.clone(), config.retrieval.top_k);
        let sheet = SheetGenerator::new(retriever, chat, config.retrieval.sheet_top_k);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                router,
                quiz,
                sheet,
            }),
        }
    }

    pub fn config(&self) -> &TutorConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &dyn VectorStoreProvider {
        self.inner.store.as_ref()
    }

    pub fn router(&self) -> &ToolRouter {
        &self.inner.router
    }

    pub fn quiz(&self) -> &QuizGenerator {
        &self.inner.quiz
    }

    pub fn sheet(&self) -> &SheetGenerator {
        &self.inner.sheet
    }
}
