//! Quiz generation endpoint

use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{DocumentSelector, Quiz};

#[derive(Debug, Deserialize)]
pub struct QuizForm {
    pub question: String,
    #[serde(default)]
    pub document: Option<String>,
}

/// Generate a multiple-choice quiz on the requested topic.
pub async fn generate_quiz(
    State(state): State<AppState>,
    Form(form): Form<QuizForm>,
) -> Result<Json<Quiz>> {
    let selector = DocumentSelector::parse_form(form.document.as_deref());
    tracing::info!(topic = %form.question, course = %selector.label(), "quiz requested");

    let quiz = state.quiz().generate(&form.question, &selector).await?;
    Ok(Json(quiz))
}
