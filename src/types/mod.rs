//! Core types for the tutoring service

pub mod chat;
pub mod chunk;
pub mod quiz;
pub mod selector;

pub use chat::{AskRequest, AskResponse, ChatTurn, Role};
pub use chunk::Chunk;
pub use quiz::{Quiz, QuizQuestion};
pub use selector::{DocumentSelector, SourceFilter};
