//! Detail overlay resolution
//!
//! Turns a [`SelectionState`] into the borrowed content the host draws. A
//! closed selection yields nothing to draw and no hit region.

use crate::selection::SelectionState;
use crate::types::{DetailKind, TopicCatalog, TopicRecord, PROS_CONS_TABS};

/// What the overlay shows for an open selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayContent<'a> {
    pub record: &'a TopicRecord,
    pub body: OverlayBody<'a>,
}

impl<'a> OverlayContent<'a> {
    pub fn title(&self) -> &'a str {
        self.record.key.as_str()
    }

    pub fn detail(&self) -> &'a DetailKind {
        &self.record.detail
    }
}

/// Body of the overlay, one arm per [`DetailKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayBody<'a> {
    Text(&'a str),
    Stages(&'a [TopicRecord]),
    Tabbed {
        labels: &'static [&'static str],
        active: usize,
        items: &'a [String],
    },
    Steps(&'a [String]),
    Table {
        columns: &'a [String],
        rows: &'a [Vec<String>],
    },
}

/// Resolve the overlay for `state` against `catalog`.
///
/// A key that no longer resolves renders nothing; it is logged rather than
/// surfaced, since keys only ever come from the catalog's own tiles.
pub fn resolve<'a>(state: &SelectionState, catalog: &'a TopicCatalog) -> Option<OverlayContent<'a>> {
    let key = state.open_key()?;
    let record = match catalog.get(key.as_str()) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("overlay lookup failed: {e}");
            return None;
        }
    };

    let body = match &record.detail {
        DetailKind::PlainText { text } => OverlayBody::Text(text),
        DetailKind::StageList { stages } => OverlayBody::Stages(stages),
        DetailKind::ProsCons { .. } => {
            let active = state.active_tab().min(PROS_CONS_TABS.len() - 1);
            OverlayBody::Tabbed {
                labels: &PROS_CONS_TABS,
                active,
                items: record.detail.tab_items(active).unwrap_or_default(),
            }
        }
        DetailKind::Steps { steps } => OverlayBody::Steps(steps),
        DetailKind::Table { columns, rows } => OverlayBody::Table { columns, rows },
    };

    Some(OverlayContent { record, body })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> TopicCatalog {
        TopicCatalog::from_records(vec![
            TopicRecord::text("A", "alpha"),
            TopicRecord::text("B", "beta"),
            TopicRecord::new(
                "Tools",
                DetailKind::ProsCons {
                    advantages: vec!["x".into()],
                    disadvantages: vec!["y".into()],
                },
            ),
        ])
        .unwrap()
    }

    fn body_text<'a>(content: &OverlayContent<'a>) -> &'a str {
        match content.body {
            OverlayBody::Text(text) => text,
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn closed_state_renders_nothing() {
        assert!(resolve(&SelectionState::new(), &catalog()).is_none());
    }

    #[test]
    fn shows_selected_then_retargeted_then_nothing() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        state.select(&catalog, "A").unwrap();
        let content = resolve(&state, &catalog).unwrap();
        assert_eq!(body_text(&content), "alpha");
        assert_eq!(content.detail(), &catalog.get("A").unwrap().detail);

        state.select(&catalog, "B").unwrap();
        assert_eq!(body_text(&resolve(&state, &catalog).unwrap()), "beta");

        state.dismiss();
        assert!(resolve(&state, &catalog).is_none());
    }

    #[test]
    fn tabbed_body_follows_active_tab() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "Tools").unwrap();

        let items = |state: &SelectionState| match resolve(state, &catalog).unwrap().body {
            OverlayBody::Tabbed { active, items, .. } => (active, items.to_vec()),
            other => panic!("unexpected body {other:?}"),
        };

        assert_eq!(items(&state), (0, vec!["x".to_string()]));
        state.select_tab(&catalog, 1).unwrap();
        assert_eq!(items(&state), (1, vec!["y".to_string()]));
        state.dismiss();
        state.select(&catalog, "Tools").unwrap();
        assert_eq!(items(&state), (0, vec!["x".to_string()]));
    }

    #[test]
    fn stale_key_renders_nothing() {
        let mut state = SelectionState::new();
        state.select(&catalog(), "A").unwrap();
        let other = TopicCatalog::from_records(vec![TopicRecord::text("Z", "zeta")]).unwrap();
        assert!(resolve(&state, &other).is_none());
    }
}
