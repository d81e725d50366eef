//! Selection state machine
//!
//! Connects tile activation to overlay visibility. Two states:
//!
//! ```text
//!   Closed ──select(k)──▶ Open(k) ──select(k2)──▶ Open(k2)
//!     ▲                      │
//!     └──────dismiss─────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CoreResult};
use crate::types::{TopicCatalog, TopicKey};

/// Which record (if any) the detail overlay shows.
///
/// `is_overlay_open` implies `selected_key` resolves in the catalog the state
/// was driven with; every transition that could break this is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_key: Option<TopicKey>,
    is_overlay_open: bool,
    active_tab: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on `key`, or retarget it if already open.
    ///
    /// The tab always resets to 0. Unknown keys leave the state untouched.
    pub fn select(&mut self, catalog: &TopicCatalog, key: &str) -> CoreResult<()> {
        let record = catalog.get(key)?;
        log::debug!(
            "select {} (was {:?})",
            record.key,
            self.selected_key.as_ref().map(TopicKey::as_str)
        );
        self.selected_key = Some(record.key.clone());
        self.is_overlay_open = true;
        self.active_tab = 0;
        Ok(())
    }

    /// Close the overlay. No-op while closed.
    pub fn dismiss(&mut self) {
        if !self.is_overlay_open {
            return;
        }
        log::debug!("dismiss overlay");
        *self = Self::default();
    }

    /// Switch the visible sub-view of a tabbed record.
    ///
    /// Returns `Ok(false)` when closed or when the record has no tabs, and
    /// `InvalidTab` when `tab` is past the record's last tab.
    pub fn select_tab(&mut self, catalog: &TopicCatalog, tab: usize) -> CoreResult<bool> {
        let Some(key) = self.open_key() else {
            return Ok(false);
        };
        let record = catalog.get(key.as_str())?;
        let count = record.detail.tab_count();
        if count == 0 {
            return Ok(false);
        }
        if tab >= count {
            return Err(CatalogError::InvalidTab {
                key: key.to_string(),
                tab,
            });
        }
        self.active_tab = tab;
        Ok(true)
    }

    pub fn is_open(&self) -> bool {
        self.is_overlay_open
    }

    pub fn selected_key(&self) -> Option<&TopicKey> {
        self.selected_key.as_ref()
    }

    /// Key of the record currently shown, `None` while closed.
    pub fn open_key(&self) -> Option<&TopicKey> {
        self.selected_key.as_ref().filter(|_| self.is_overlay_open)
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::{DetailKind, TopicRecord};

    fn catalog() -> TopicCatalog {
        TopicCatalog::from_records(vec![
            TopicRecord::text("A", "alpha"),
            TopicRecord::text("B", "beta"),
            TopicRecord::new(
                "T",
                DetailKind::ProsCons {
                    advantages: vec!["x".into()],
                    disadvantages: vec!["y".into()],
                },
            ),
        ])
        .unwrap()
    }

    #[test]
    fn starts_closed() {
        let state = SelectionState::new();
        assert!(!state.is_open());
        assert!(state.selected_key().is_none());
        assert_eq!(state.active_tab(), 0);
    }

    #[test]
    fn select_opens_on_key() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "A").unwrap();
        assert!(state.is_open());
        assert_eq!(state.open_key().map(TopicKey::as_str), Some("A"));
    }

    #[test]
    fn reselect_retargets_without_closing() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "A").unwrap();
        state.select(&catalog, "B").unwrap();
        assert!(state.is_open());
        assert_eq!(state.open_key().map(TopicKey::as_str), Some("B"));
    }

    #[test]
    fn dismiss_resets_everything() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "T").unwrap();
        state.select_tab(&catalog, 1).unwrap();
        state.dismiss();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn dismiss_while_closed_is_noop() {
        let mut state = SelectionState::new();
        state.dismiss();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn unknown_key_leaves_state_unchanged() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "A").unwrap();
        let before = state.clone();
        assert_eq!(
            state.select(&catalog, "missing"),
            Err(CatalogError::NotFound("missing".into()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn tab_switch_and_reset_on_reopen() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "T").unwrap();
        assert_eq!(state.active_tab(), 0);
        assert!(state.select_tab(&catalog, 1).unwrap());
        assert_eq!(state.active_tab(), 1);
        state.dismiss();
        state.select(&catalog, "T").unwrap();
        assert_eq!(state.active_tab(), 0);
    }

    #[test]
    fn retarget_resets_tab() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "T").unwrap();
        state.select_tab(&catalog, 1).unwrap();
        state.select(&catalog, "T").unwrap();
        assert_eq!(state.active_tab(), 0);
    }

    #[test]
    fn tab_out_of_range_is_rejected() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "T").unwrap();
        assert!(matches!(
            state.select_tab(&catalog, 2),
            Err(CatalogError::InvalidTab { tab: 2, .. })
        ));
        assert_eq!(state.active_tab(), 0);
    }

    #[test]
    fn tab_on_plain_record_or_closed_is_noop() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        assert!(!state.select_tab(&catalog, 1).unwrap());
        state.select(&catalog, "A").unwrap();
        assert!(!state.select_tab(&catalog, 1).unwrap());
        assert_eq!(state.active_tab(), 0);
    }

    #[test]
    fn state_serializes() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.select(&catalog, "B").unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selected_key"], "B");
        assert_eq!(json["is_overlay_open"], true);
        let back: SelectionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Select(usize),
        Dismiss,
        Tab(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4).prop_map(Op::Select),
            Just(Op::Dismiss),
            (0usize..3).prop_map(Op::Tab),
        ]
    }

    proptest! {
        #[test]
        fn open_selection_always_resolves(ops in prop::collection::vec(op(), 0..40)) {
            let catalog = catalog();
            let keys = ["A", "B", "T", "nope"];
            let mut state = SelectionState::new();

            for op in ops {
                match op {
                    Op::Select(i) => { let _ = state.select(&catalog, keys[i]); }
                    Op::Dismiss => state.dismiss(),
                    Op::Tab(t) => { let _ = state.select_tab(&catalog, t); }
                }
                if let Some(key) = state.open_key() {
                    let record = catalog.get(key.as_str()).unwrap();
                    prop_assert!(state.active_tab() <= record.detail.tab_count().max(1) - 1);
                } else {
                    prop_assert_eq!(&state, &SelectionState::default());
                }
            }
        }
    }
}
