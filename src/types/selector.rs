//! Document selection and the metadata filter built from it
//!
//! The wire format for a selection is loose (`null`, `"GLOBAL"`, a single
//! name, or a list of names). It is decided into a tagged variant once at
//! the request boundary; nothing downstream re-inspects the raw shape.

use serde::Deserialize;

/// Sentinel selecting the whole corpus
pub const GLOBAL_SELECTOR: &str = "GLOBAL";

/// Raw selection as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSelector {
    One(String),
    Many(Vec<String>),
}

/// Decided document selection for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSelector {
    /// No selection was supplied; no question may be answered
    Unselected,
    /// Search the whole corpus
    Global,
    /// Exactly one document
    Single(String),
    /// A set of documents (may be empty, meaning no restriction)
    Many(Vec<String>),
}

impl DocumentSelector {
    /// Decide the selector from the optional wire value.
    pub fn parse(raw: Option<RawSelector>) -> Self {
        match raw {
            None => Self::Unselected,
            Some(RawSelector::One(name)) if name == GLOBAL_SELECTOR => Self::Global,
            Some(RawSelector::One(name)) => Self::Single(name),
            Some(RawSelector::Many(names)) => Self::Many(names),
        }
    }

    /// Decide the selector from a form field. The quiz and revision-sheet
    /// routes accept a comma-separated list in a single field.
    pub fn parse_form(field: Option<&str>) -> Self {
        match field.map(str::trim) {
            None | Some("") => Self::Unselected,
            Some(raw) if raw.contains(',') => Self::Many(
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            Some(raw) => Self::parse(Some(RawSelector::One(raw.to_string()))),
        }
    }

    /// Human-readable label for prompts ("course A, course B" or the
    /// whole-corpus wording).
    pub fn label(&self) -> String {
        match self {
            Self::Unselected => "(no course selected)".to_string(),
            Self::Global => "the whole course collection".to_string(),
            Self::Single(name) => name.clone(),
            Self::Many(names) if names.is_empty() => "the whole course collection".to_string(),
            Self::Many(names) => names.join(", "),
        }
    }
}

/// Predicate over a chunk's `source` field, applied by the vector store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFilter {
    /// No restriction
    None,
    /// Exact source match
    Equals(String),
    /// Membership in a set of sources
    In(Vec<String>),
}

impl SourceFilter {
    /// Build the filter from a decided selector. Pure and deterministic;
    /// the filter is never mutated after construction.
    pub fn from_selector(selector: &DocumentSelector) -> Self {
        match selector {
            DocumentSelector::Unselected | DocumentSelector::Global => Self::None,
            DocumentSelector::Single(name) => Self::Equals(name.clone()),
            DocumentSelector::Many(names) => match names.len() {
                0 => Self::None,
                1 => Self::Equals(names[0].clone()),
                _ => Self::In(names.clone()),
            },
        }
    }

    /// True when the filter restricts nothing
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Equals(name) => write!(f, "source = {:?}", name),
            Self::In(names) => write!(f, "source in {:?}", names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_shapes() {
        assert_eq!(DocumentSelector::parse(None), DocumentSelector::Unselected);
        assert_eq!(
            DocumentSelector::parse(Some(RawSelector::One("GLOBAL".into()))),
            DocumentSelector::Global
        );
        assert_eq!(
            DocumentSelector::parse(Some(RawSelector::One("Intro to Democracy".into()))),
            DocumentSelector::Single("Intro to Democracy".into())
        );
        assert_eq!(
            DocumentSelector::parse(Some(RawSelector::Many(vec!["A".into(), "B".into()]))),
            DocumentSelector::Many(vec!["A".into(), "B".into()])
        );
    }

    #[test]
    fn test_parse_form_comma_list() {
        assert_eq!(
            DocumentSelector::parse_form(Some("A, B ,C")),
            DocumentSelector::Many(vec!["A".into(), "B".into(), "C".into()])
        );
        assert_eq!(
            DocumentSelector::parse_form(Some("Only One")),
            DocumentSelector::Single("Only One".into())
        );
        assert_eq!(
            DocumentSelector::parse_form(Some("GLOBAL")),
            DocumentSelector::Global
        );
        assert_eq!(DocumentSelector::parse_form(None), DocumentSelector::Unselected);
        assert_eq!(DocumentSelector::parse_form(Some("")), DocumentSelector::Unselected);
        assert_eq!(DocumentSelector::parse_form(Some("   ")), DocumentSelector::Unselected);
    }

    #[test]
    fn test_filter_cases() {
        assert_eq!(
            SourceFilter::from_selector(&DocumentSelector::Unselected),
            SourceFilter::None
        );
        assert_eq!(
            SourceFilter::from_selector(&DocumentSelector::Global),
            SourceFilter::None
        );
        assert_eq!(
            SourceFilter::from_selector(&DocumentSelector::Many(vec![])),
            SourceFilter::None
        );
        assert_eq!(
            SourceFilter::from_selector(&DocumentSelector::Many(vec!["A".into()])),
            SourceFilter::Equals("A".into())
        );
        assert_eq!(
            SourceFilter::from_selector(&DocumentSelector::Many(vec!["A".into(), "B".into()])),
            SourceFilter::In(vec!["A".into(), "B".into()])
        );
        assert_eq!(
            SourceFilter::from_selector(&DocumentSelector::Single("A".into())),
            SourceFilter::Equals("A".into())
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let selector = DocumentSelector::Many(vec!["A".into(), "B".into()]);
        let first = SourceFilter::from_selector(&selector);
        let second = SourceFilter::from_selector(&selector);
        assert_eq!(first, second);
    }
}
