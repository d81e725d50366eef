//! Built-in content library
//!
//! Every page's records live here as literal data and are turned into
//! [`TopicCatalog`]s once at startup. A JSON override file may replace any of
//! the catalogs; see [`ContentOverrides`].

pub mod components;
pub mod home;
pub mod maturity;
pub mod podcast;
pub mod reference;
pub mod stack;
pub mod tools;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CoreResult};
use crate::types::{TopicCatalog, TopicRecord};
pub use stack::StackDiagram;

/// An image shown as a captioned reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub alt: &'static str,
    /// Path relative to the assets directory
    pub path: &'static str,
}

impl ImageRef {
    pub const fn new(alt: &'static str, path: &'static str) -> Self {
        Self { alt, path }
    }

    pub fn resolve(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.path)
    }
}

/// All catalogs the pages browse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLibrary {
    pub principles: TopicCatalog,
    pub components: TopicCatalog,
    pub maturity_models: TopicCatalog,
    pub tools: TopicCatalog,
    pub implementation_phases: TopicCatalog,
    pub stack: StackDiagram,
}

impl ContentLibrary {
    pub fn builtin() -> CoreResult<Self> {
        Ok(Self {
            principles: home::principles()?,
            components: components::components()?,
            maturity_models: maturity::maturity_models()?,
            tools: tools::tools()?,
            implementation_phases: reference::implementation_phases()?,
            stack: StackDiagram::builtin()?,
        })
    }

    /// Replace catalogs named by `overrides`.
    ///
    /// Every replacement is validated before any is applied, so an error
    /// leaves the library untouched. Returns how many catalogs were replaced.
    pub fn apply(&mut self, overrides: ContentOverrides) -> CoreResult<usize> {
        fn build(records: Option<Vec<TopicRecord>>) -> CoreResult<Option<TopicCatalog>> {
            records.map(TopicCatalog::from_records).transpose()
        }

        let principles = build(overrides.principles)?;
        let components = build(overrides.components)?;
        let maturity_models = build(overrides.maturity_models)?;
        let tools = build(overrides.tools)?;
        let implementation_phases = build(overrides.implementation_phases)?;

        let mut replaced = 0;
        for (slot, catalog) in [
            (&mut self.principles, principles),
            (&mut self.components, components),
            (&mut self.maturity_models, maturity_models),
            (&mut self.tools, tools),
            (&mut self.implementation_phases, implementation_phases),
        ] {
            if let Some(catalog) = catalog {
                *slot = catalog;
                replaced += 1;
            }
        }
        Ok(replaced)
    }
}

/// Content override file: each present field replaces one built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles: Option<Vec<TopicRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<TopicRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_models: Option<Vec<TopicRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<TopicRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_phases: Option<Vec<TopicRecord>>,
}

impl ContentOverrides {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Content(format!("{}: {e}", path.display())))?;
        log::info!("Loading content overrides from {}", path.display());
        Self::from_json(&json)
    }
}
