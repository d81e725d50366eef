//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CatalogError {
    /// Key does not resolve to any record of the catalog
    #[error("Topic not found: {0}")]
    NotFound(String),

    /// Two records of one catalog share a key
    #[error("Duplicate topic key: {0}")]
    DuplicateKey(String),

    /// Diagram edge references a node that does not exist
    #[error("Unknown diagram node: {0}")]
    UnknownNode(String),

    /// Tab index outside the record's tab range
    #[error("Invalid tab {tab} for topic {key}")]
    InvalidTab { key: String, tab: usize },

    /// Content override could not be parsed
    #[error("Content error: {0}")]
    Content(String),

    /// Audio player failure (launch, pause, missing file)
    #[error("Playback error: {0}")]
    Playback(String),
}

impl CatalogError {
    /// Whether it is expected behavior (user input, external asset, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidTab { .. } | Self::Content(_) | Self::Playback(_) => true,
            Self::NotFound(_) | Self::DuplicateKey(_) | Self::UnknownNode(_) => false,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Content(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_are_not_expected() {
        assert!(!CatalogError::NotFound("x".into()).is_expected());
        assert!(!CatalogError::DuplicateKey("x".into()).is_expected());
        assert!(CatalogError::Playback("no player".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CatalogError::NotFound("Feature Store".into())).unwrap();
        assert_eq!(json["code"], "NotFound");
        assert_eq!(json["details"], "Feature Store");
    }
}
