//! Prompt templates, model-output normalization, and the quiz and
//! revision-sheet pipelines

pub mod json;
pub mod prompt;
pub mod quiz;
pub mod sheet;

pub use json::{extract_json_object, normalize_llm_json};
pub use prompt::PromptBuilder;
pub use quiz::QuizGenerator;
pub use sheet::SheetGenerator;
