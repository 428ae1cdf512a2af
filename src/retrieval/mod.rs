//! Filter-scoped retrieval over the course corpus

pub mod retriever;

pub use retriever::Retriever;
