//! Multiple-choice quiz (QCM) shape and validation

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One quiz question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub choices: Vec<String>,
    /// Index of the correct choice
    pub correct: u32,
    pub explanation: String,
}

/// A generated quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Parse a quiz from normalized model output and validate its shape.
    ///
    /// Strict: any missing field, empty question list, fewer than two
    /// choices, or out-of-range correct index is a malformed-output error
    /// carrying the raw text for diagnosis. No repair is attempted here.
    pub fn from_model_output(normalized: &str, raw: &str) -> Result<Self> {
        let quiz: Quiz = serde_json::from_str(normalized)
            .map_err(|e| Error::malformed(format!("quiz JSON did not parse: {}", e), raw))?;
        quiz.validate(raw)?;
        Ok(quiz)
    }

    fn validate(&self, raw: &str) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::malformed("quiz has an empty title", raw));
        }
        if self.questions.is_empty() {
            return Err(Error::malformed("quiz has no questions", raw));
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.question.trim().is_empty() {
                return Err(Error::malformed(format!("question {} is empty", i + 1), raw));
            }
            if q.choices.len() < 2 {
                return Err(Error::malformed(
                    format!("question {} has fewer than two choices", i + 1),
                    raw,
                ));
            }
            if (q.correct as usize) >= q.choices.len() {
                return Err(Error::malformed(
                    format!("question {} has an out-of-range correct index", i + 1),
                    raw,
                ));
            }
        }
        Ok(())
    }
}
