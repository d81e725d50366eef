//! Topic records: one named unit of descriptive content

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable identifier of a record, unique within its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicKey(String);

impl TopicKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TopicKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TopicKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TopicKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Tab labels of a [`DetailKind::ProsCons`] record, in tab order.
pub const PROS_CONS_TABS: [&str; 2] = ["Advantages", "Disadvantages"];

/// Shape of a record's long-form detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailKind {
    /// Plain descriptive text
    PlainText { text: String },
    /// Nested records, each addressable by its own key
    StageList { stages: Vec<TopicRecord> },
    /// Two lists shown behind the Advantages / Disadvantages tabs
    ProsCons {
        advantages: Vec<String>,
        disadvantages: Vec<String>,
    },
    /// Numbered steps
    Steps { steps: Vec<String> },
    /// Tabular detail
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl DetailKind {
    pub fn text(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// Number of tabs the overlay offers for this detail (0 = no tab bar).
    pub fn tab_count(&self) -> usize {
        match self {
            Self::ProsCons { .. } => PROS_CONS_TABS.len(),
            _ => 0,
        }
    }

    /// Items shown under the given tab of a pros/cons record.
    pub fn tab_items(&self, tab: usize) -> Option<&[String]> {
        match (self, tab) {
            (Self::ProsCons { advantages, .. }, 0) => Some(advantages),
            (Self::ProsCons { disadvantages, .. }, 1) => Some(disadvantages),
            _ => None,
        }
    }
}

/// One record of a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub key: TopicKey,
    /// Short text shown on the tile (may be empty)
    #[serde(default)]
    pub summary: String,
    /// Glyph shown on the tile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub detail: DetailKind,
}

impl TopicRecord {
    pub fn new(key: impl Into<TopicKey>, detail: DetailKind) -> Self {
        Self {
            key: key.into(),
            summary: String::new(),
            icon: None,
            detail,
        }
    }

    /// Plain-text record whose tile shows only its key.
    pub fn text(key: impl Into<TopicKey>, text: impl Into<String>) -> Self {
        Self::new(key, DetailKind::text(text))
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Nested stage records, empty for every other detail kind.
    pub fn stages(&self) -> &[TopicRecord] {
        match &self.detail {
            DetailKind::StageList { stages } => stages,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tab_items_follow_tab_order() {
        let detail = DetailKind::ProsCons {
            advantages: vec!["x".into()],
            disadvantages: vec!["y".into()],
        };
        assert_eq!(detail.tab_count(), 2);
        assert_eq!(detail.tab_items(0), Some(&["x".to_string()][..]));
        assert_eq!(detail.tab_items(1), Some(&["y".to_string()][..]));
        assert_eq!(detail.tab_items(2), None);
    }

    #[test]
    fn plain_text_has_no_tabs() {
        let detail = DetailKind::text("alpha");
        assert_eq!(detail.tab_count(), 0);
        assert!(detail.tab_items(0).is_none());
    }

    #[test]
    fn detail_is_tagged_by_kind() {
        let record = TopicRecord::text("A", "alpha").with_summary("first");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["key"], "A");
        assert_eq!(json["detail"]["kind"], "plain_text");
        assert_eq!(json["detail"]["text"], "alpha");
        assert!(json.get("icon").is_none());
    }

    #[test]
    fn summary_defaults_when_missing() {
        let record: TopicRecord = serde_json::from_str(
            r#"{"key":"B","detail":{"kind":"steps","steps":["one","two"]}}"#,
        )
        .unwrap();
        assert_eq!(record.key.as_str(), "B");
        assert!(record.summary.is_empty());
        assert_eq!(
            record.detail,
            DetailKind::Steps {
                steps: vec!["one".into(), "two".into()]
            }
        );
    }
}
