//! Retrieval-augmented tutoring assistant for course material
//!
//! The crate wires a pgvector-backed course corpus to an OpenAI-compatible
//! chat model behind a small axum API. A question goes through three
//! stages: reformulation into a standalone query, a mandatory similarity
//! search over the selected course, and answer composition grounded in the
//! retrieved passages. When the course has nothing to offer, the assistant
//! asks for permission before falling back to a web search.
//!
//! Besides the conversational endpoint the server generates multiple-choice
//! quizzes and downloadable revision sheets from the same corpus.

pub mod agent;
pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::TutorConfig;
pub use error::{Error, Result};
