//! Deduplicating retriever
//!
//! Embeds the query, over-fetches candidates from the vector store, and
//! keeps the first `k` unique passages in similarity order.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::providers::{EmbeddingProvider, VectorStoreProvider};
use crate::types::{Chunk, SourceFilter};

/// Candidates requested per unique chunk wanted; absorbs duplicates before
/// truncation.
const FETCH_MULTIPLIER: usize = 2;

/// Snippet length used when logging returned chunks
const LOG_SNIPPET_LEN: usize = 100;

/// Retriever over the vector store
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStoreProvider>,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStoreProvider>) -> Self {
        Self { embedder, store }
    }

    /// Retrieve up to `k` unique chunks for `query`, restricted by `filter`.
    ///
    /// Returns fewer than `k` chunks when the filtered corpus does not
    /// contain enough unique matches; that is a valid partial result, not
    /// an error.
    pub async fn retrieve(&self, query: &str, k: usize, filter: &SourceFilter) -> Result<Vec<Chunk>> {
        tracing::info!("vector search: query={:?} filter={}", query, filter);

        let embedding = self.embedder.embed(query).await?;
        let candidates = self
            .store
            .similarity_search(&embedding, k * FETCH_MULTIPLIER, filter)
            .await?;

        let chunks = dedup_ranked(candidates, k);

        tracing::info!("vector search returned {} unique chunks", chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            tracing::info!(
                "  [chunk {}] source: {} | content: {}...",
                i + 1,
                chunk.source,
                chunk.snippet(LOG_SNIPPET_LEN)
            );
        }

        Ok(chunks)
    }
}

/// Keep the first occurrence of each passage text, preserving the
/// similarity-ranked order, and stop once `k` unique chunks are collected.
fn dedup_ranked(candidates: Vec<Chunk>, k: usize) -> Vec<Chunk> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(k);

    for chunk in candidates {
        if unique.len() == k {
            break;
        }
        if seen.insert(chunk.content.clone()) {
            unique.push(chunk);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedEmbedder;

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![0.1, 0.2, 0.3])
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    /// Records the (k, filter) of each search and replays canned candidates
    struct RecordingStore {
        candidates: Vec<Chunk>,
        calls: Mutex<Vec<(usize, SourceFilter)>>,
    }

    impl RecordingStore {
        fn new(candidates: Vec<Chunk>) -> Self {
            Self {
                candidates,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VectorStoreProvider for RecordingStore {
        async fn similarity_search(
            &self,
            _query_embedding: &[f32],
            k: usize,
            filter: &SourceFilter,
        ) -> Result<Vec<Chunk>> {
            self.calls.lock().unwrap().push((k, filter.clone()));
            Ok(self.candidates.iter().take(k).cloned().collect())
        }

        async fn list_sources(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn retriever_over(candidates: Vec<Chunk>) -> (Retriever, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::new(candidates));
        let retriever = Retriever::new(Arc::new(FixedEmbedder), store.clone());
        (retriever, store)
    }

    #[tokio::test]
    async fn test_dedup_keeps_first_occurrence_order() {
        let c1 = Chunk::new("passage one", "Doc");
        let c2 = Chunk::new("passage two", "Doc");
        let c3 = Chunk::new("passage three", "Doc");
        let (retriever, _) =
            retriever_over(vec![c1.clone(), c2.clone(), c1.clone(), c3.clone()]);

        let result = retriever
            .retrieve("q", 2, &SourceFilter::None)
            .await
            .unwrap();
        assert_eq!(result, vec![c1, c2]);
    }

    #[tokio::test]
    async fn test_never_returns_more_than_k() {
        let candidates: Vec<Chunk> = (0..10)
            .map(|i| Chunk::new(format!("passage {}", i), "Doc"))
            .collect();
        let (retriever, _) = retriever_over(candidates);

        let result = retriever
            .retrieve("q", 4, &SourceFilter::None)
            .await
            .unwrap();
        assert_eq!(result.len(), 4);
    }

    #[tokio::test]
    async fn test_partial_result_when_corpus_exhausted() {
        let c1 = Chunk::new("only passage", "Doc");
        let (retriever, _) = retriever_over(vec![c1.clone(), c1.clone()]);

        let result = retriever
            .retrieve("q", 5, &SourceFilter::None)
            .await
            .unwrap();
        assert_eq!(result, vec![c1]);
    }

    #[tokio::test]
    async fn test_fetch_amplification_and_filter_passthrough() {
        let (retriever, store) = retriever_over(vec![]);
        let filter = SourceFilter::Equals("Intro to Democracy".into());

        let result = retriever.retrieve("q", 8, &filter).await.unwrap();
        assert!(result.is_empty());

        let calls = store.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 16); // 2k candidates requested
        assert_eq!(calls[0].1, filter);
    }
}
