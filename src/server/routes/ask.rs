//! Conversational question endpoint

use axum::extract::State;
use axum::Json;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse, DocumentSelector};

/// Answer shown when the request carries no course selection at all.
const SELECT_COURSE_ANSWER: &str =
    "Please select a course first so I know which material to search.";

/// Answer a question against the selected course material.
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let selector = DocumentSelector::parse(request.document);

    if selector == DocumentSelector::Unselected {
        return Ok(Json(AskResponse {
            answer: SELECT_COURSE_ANSWER.to_string(),
        }));
    }

    tracing::info!(course = %selector.label(), "question received");
    let outcome = state
        .router()
        .route(&request.question, &request.history, &selector)
        .await?;

    Ok(Json(AskResponse {
        answer: outcome.answer,
    }))
}
