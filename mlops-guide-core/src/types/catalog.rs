//! Ordered, read-only collection of topic records

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::topic::{DetailKind, TopicKey, TopicRecord};
use crate::error::{CatalogError, CoreResult};

/// Position of a record inside the catalog tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Top(usize),
    Stage { parent: usize, index: usize },
}

/// Ordered mapping from key to record, built once and never mutated.
///
/// Keys of nested stage records share the key space of the top-level records,
/// so every record reachable from [`TopicCatalog::tiles`] resolves through
/// [`TopicCatalog::get`].
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    records: Vec<TopicRecord>,
    index: HashMap<TopicKey, Slot>,
}

/// One activatable tile of a catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    /// Key of the parent record when the tile is a nested stage
    pub group: Option<&'a TopicKey>,
    pub record: &'a TopicRecord,
}

impl Tile<'_> {
    /// Key handed to the selection controller when the tile is activated.
    pub fn key(&self) -> &TopicKey {
        &self.record.key
    }
}

impl TopicCatalog {
    /// Build a catalog, rejecting duplicate keys and stage lists nested in stages.
    pub fn from_records(records: Vec<TopicRecord>) -> CoreResult<Self> {
        let mut index = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            if index.insert(record.key.clone(), Slot::Top(i)).is_some() {
                return Err(CatalogError::DuplicateKey(record.key.to_string()));
            }
            for (j, stage) in record.stages().iter().enumerate() {
                // Only one level of stages is indexed
                if matches!(stage.detail, DetailKind::StageList { .. }) {
                    return Err(CatalogError::Content(format!(
                        "stage {} of {} nests another stage list",
                        stage.key, record.key
                    )));
                }
                let slot = Slot::Stage { parent: i, index: j };
                if index.insert(stage.key.clone(), slot).is_some() {
                    return Err(CatalogError::DuplicateKey(stage.key.to_string()));
                }
            }
        }

        Ok(Self { records, index })
    }

    /// Resolve a key to its record.
    pub fn get(&self, key: &str) -> CoreResult<&TopicRecord> {
        let slot = self
            .index
            .get(key)
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))?;

        let record = match *slot {
            Slot::Top(i) => self.records.get(i),
            Slot::Stage { parent, index } => self
                .records
                .get(parent)
                .and_then(|record| record.stages().get(index)),
        };

        record.ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Top-level records in display order.
    pub fn list_all(&self) -> &[TopicRecord] {
        &self.records
    }

    /// Leaf records in display order; stage lists expand into their stages.
    pub fn tiles(&self) -> Vec<Tile<'_>> {
        let mut tiles = Vec::with_capacity(self.index.len());
        for record in &self.records {
            let stages = record.stages();
            if stages.is_empty() {
                tiles.push(Tile {
                    group: None,
                    record,
                });
            } else {
                tiles.extend(stages.iter().map(|stage| Tile {
                    group: Some(&record.key),
                    record: stage,
                }));
            }
        }
        tiles
    }

    /// Position of a key among [`TopicCatalog::tiles`].
    pub fn tile_position(&self, key: &str) -> Option<usize> {
        self.tiles().iter().position(|tile| tile.key().as_str() == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PartialEq for TopicCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for TopicCatalog {}

impl Serialize for TopicCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample() -> TopicCatalog {
        TopicCatalog::from_records(vec![
            TopicRecord::text("A", "alpha"),
            TopicRecord::text("B", "beta"),
        ])
        .unwrap()
    }

    fn nested() -> TopicCatalog {
        TopicCatalog::from_records(vec![
            TopicRecord::new(
                "Model",
                DetailKind::StageList {
                    stages: vec![
                        TopicRecord::text("Stage 0", "manual"),
                        TopicRecord::text("Stage 1", "automated"),
                    ],
                },
            ),
            TopicRecord::text("Loose", "standalone"),
        ])
        .unwrap()
    }

    #[test]
    fn get_returns_record_for_every_listed_key() {
        let catalog = sample();
        for record in catalog.list_all() {
            assert_eq!(catalog.get(record.key.as_str()).unwrap(), record);
        }
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        let catalog = sample();
        assert_eq!(
            catalog.get("C"),
            Err(CatalogError::NotFound("C".to_string()))
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = TopicCatalog::from_records(vec![
            TopicRecord::text("A", "alpha"),
            TopicRecord::text("A", "again"),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateKey("A".to_string())));
    }

    #[test]
    fn nested_stage_list_is_rejected() {
        let inner = TopicRecord::new(
            "Inner",
            DetailKind::StageList {
                stages: vec![TopicRecord::text("Deep", "unreachable")],
            },
        );
        let result = TopicCatalog::from_records(vec![TopicRecord::new(
            "Outer",
            DetailKind::StageList {
                stages: vec![inner],
            },
        )]);
        assert!(matches!(result, Err(CatalogError::Content(_))));
    }

    #[test]
    fn duplicate_stage_key_is_rejected() {
        let result = TopicCatalog::from_records(vec![
            TopicRecord::text("Stage 0", "top"),
            TopicRecord::new(
                "Model",
                DetailKind::StageList {
                    stages: vec![TopicRecord::text("Stage 0", "nested")],
                },
            ),
        ]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateKey("Stage 0".to_string()))
        );
    }

    #[test]
    fn stages_resolve_by_their_own_key() {
        let catalog = nested();
        let stage = catalog.get("Stage 1").unwrap();
        assert_eq!(stage.detail, DetailKind::text("automated"));
        assert!(catalog.get("Model").is_ok());
    }

    #[test]
    fn tiles_expand_stage_lists_in_order() {
        let catalog = nested();
        let tiles = catalog.tiles();
        let keys: Vec<&str> = tiles.iter().map(|t| t.key().as_str()).collect();
        assert_eq!(keys, ["Stage 0", "Stage 1", "Loose"]);
        assert_eq!(tiles[0].group.map(TopicKey::as_str), Some("Model"));
        assert!(tiles[2].group.is_none());
        assert_eq!(catalog.tile_position("Loose"), Some(2));
        assert_eq!(catalog.tile_position("Model"), None);
    }

    #[test]
    fn listing_is_deterministic() {
        let catalog = nested();
        assert_eq!(catalog.list_all(), catalog.list_all());
        assert_eq!(catalog.tiles(), catalog.tiles());
    }

    #[test]
    fn serializes_as_record_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json[0]["key"], "A");
        assert_eq!(json[1]["detail"]["text"], "beta");
    }

    proptest! {
        #[test]
        fn lookup_round_trips(keys in prop::collection::hash_set("[A-Za-z ]{1,12}", 1..16)) {
            let records: Vec<TopicRecord> = keys
                .iter()
                .map(|k| TopicRecord::text(k.as_str(), format!("detail of {k}")))
                .collect();
            let catalog = TopicCatalog::from_records(records.clone()).unwrap();

            prop_assert_eq!(catalog.list_all(), &records[..]);
            for record in &records {
                prop_assert_eq!(catalog.get(record.key.as_str()).unwrap(), record);
            }
        }
    }
}
