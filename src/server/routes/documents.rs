//! Course catalogue endpoint

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::server::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub documents: Vec<String>,
}

/// List the source documents available in the vector store.
pub async fn list_documents(State(state): State<AppState>) -> Result<Json<DocumentsResponse>> {
    let documents = state.store().list_sources().await?;
    tracing::debug!(count = documents.len(), "listed documents");
    Ok(Json(DocumentsResponse { documents }))
}
