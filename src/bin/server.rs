use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tutor_rag::providers::{OpenAiClient, PgVectorStore, SerpApiSearch};
use tutor_rag::server::{self, AppState};
use tutor_rag::TutorConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TutorConfig::from_env().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let openai = Arc::new(OpenAiClient::new(&config.openai));
    let web_search = Arc::new(SerpApiSearch::new(&config.search));
    let store = Arc::new(
        PgVectorStore::connect(&config.database)
            .await
            .context("failed to connect to the vector store")?,
    );

    let state = AppState::new(config, openai.clone(), openai, web_search, store);
    server::serve(state).await
}
