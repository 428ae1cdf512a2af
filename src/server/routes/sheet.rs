//! Revision-sheet download endpoint

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::Form;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::DocumentSelector;

#[derive(Debug, Deserialize)]
pub struct SheetForm {
    pub document: String,
}

/// A sheet needs a concrete course selection; a missing or blank field
/// must not fall through to a whole-corpus sheet.
fn require_selection(selector: DocumentSelector) -> Result<DocumentSelector> {
    if selector == DocumentSelector::Unselected {
        return Err(Error::InvalidRequest(
            "the 'document' form field is required".to_string(),
        ));
    }
    Ok(selector)
}

/// Generate and stream a revision sheet for the selected course.
pub async fn generate_sheet(
    State(state): State<AppState>,
    Form(form): Form<SheetForm>,
) -> Result<(HeaderMap, Vec<u8>)> {
    let selector = require_selection(DocumentSelector::parse_form(Some(&form.document)))?;
    let sheet = state.sheet().generate(&selector).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(sheet.content_type()),
    );
    let disposition = format!("attachment; filename=\"{}\"", sheet.filename);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| Error::tool(format!("invalid attachment filename: {e}")))?,
    );

    tracing::info!(filename = %sheet.filename, "revision sheet generated");
    Ok((headers, sheet.content.into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_document_field_is_rejected() {
        let selector = DocumentSelector::parse_form(Some(""));
        assert!(matches!(
            require_selection(selector),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_selected_document_passes_through() {
        let selector = DocumentSelector::parse_form(Some("Intro to Democracy"));
        assert_eq!(
            require_selection(selector).unwrap(),
            DocumentSelector::Single("Intro to Democracy".to_string())
        );
    }
}

