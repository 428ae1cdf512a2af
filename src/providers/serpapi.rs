//! SerpAPI web-search provider

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{Error, Result};

use super::web_search::WebSearchProvider;

/// Maximum organic results folded into the digest
const MAX_RESULTS: usize = 5;

/// Web search through SerpAPI
pub struct SerpApiSearch {
    client: Client,
    config: SearchConfig,
}

impl SerpApiSearch {
    pub fn new(config: &SearchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Fold the SerpAPI JSON into a plain-text digest: the answer box when
    /// present, then organic result snippets.
    fn digest(body: &serde_json::Value) -> String {
        let mut parts = Vec::new();

        if let Some(answer) = body
            .get("answer_box")
            .and_then(|b| b.get("answer").or_else(|| b.get("snippet")))
            .and_then(|v| v.as_str())
        {
            parts.push(answer.to_string());
        }

        if let Some(results) = body.get("organic_results").and_then(|v| v.as_array()) {
            for result in results.iter().take(MAX_RESULTS) {
                if let Some(snippet) = result.get("snippet").and_then(|v| v.as_str()) {
                    let title = result
                        .get("title")
                        .and_then(|v| v.as_str())
                        .unwrap_or("(untitled)");
                    parts.push(format!("{}: {}", title, snippet));
                }
            }
        }

        parts.join("\n")
    }
}

#[async_trait]
impl WebSearchProvider for SerpApiSearch {
    async fn search(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("q", query), ("api_key", &self.config.api_key)])
            .send()
            .await
            .map_err(|e| Error::tool(format!("web search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::tool(format!(
                "web search failed: HTTP {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::tool(format!("failed to parse search response: {}", e)))?;

        let digest = Self::digest(&body);
        if digest.is_empty() {
            return Err(Error::tool("web search returned no usable results"));
        }

        Ok(digest)
    }

    fn name(&self) -> &str {
        "serpapi"
    }
}
