//! Provider abstractions for embeddings, chat completion, web search, and
//! vector storage
//!
//! These trait seams are the boundary with the external collaborators;
//! everything behind them is assumed correct and swapped freely in tests.

pub mod chat;
pub mod embedding;
pub mod openai;
pub mod pgvector;
pub mod serpapi;
pub mod vector_store;
pub mod web_search;

pub use chat::ChatProvider;
pub use embedding::EmbeddingProvider;
pub use openai::OpenAiClient;
pub use pgvector::PgVectorStore;
pub use serpapi::SerpApiSearch;
pub use vector_store::VectorStoreProvider;
pub use web_search::WebSearchProvider;
