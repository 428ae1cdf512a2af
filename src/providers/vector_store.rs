//! Vector store provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Chunk, SourceFilter};

/// Trait for similarity search over the course corpus
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Return up to `k` chunks ordered by similarity to the query
    /// embedding, restricted by the source filter. May contain duplicate
    /// passage texts; deduplication is the retriever's concern.
    async fn similarity_search(
        &self,
        query_embedding: &[f32],
        k: usize,
        filter: &SourceFilter,
    ) -> Result<Vec<Chunk>>;

    /// All distinct source document names known to the store
    async fn list_sources(&self) -> Result<Vec<String>>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
