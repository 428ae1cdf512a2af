//! Web-search provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the external web-search tool
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Run a web search and return a textual digest of the results
    async fn search(&self, query: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
