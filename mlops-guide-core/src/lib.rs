//! MLOps Guide Core Library
//!
//! Provides the content model and the topic-browser state shared by every page, including:
//! - Topic catalogs (ordered, read-only records addressed by key)
//! - Selection state machine (which record the detail overlay shows)
//! - Overlay resolution, diagram layout and audio playback traits
//! - The built-in content library and its JSON overrides
//!
//! This library has no terminal dependency; rendering, input and the audio
//! process live in the host binary.

pub mod audio;
pub mod content;
pub mod diagram;
pub mod error;
pub mod overlay;
pub mod selection;
pub mod types;
pub mod utils;

// Re-export common types
pub use content::{ContentLibrary, ContentOverrides};
pub use error::{CatalogError, CoreResult};
pub use overlay::{OverlayBody, OverlayContent};
pub use selection::SelectionState;
pub use types::{DetailKind, Tile, TopicCatalog, TopicKey, TopicRecord, PROS_CONS_TABS};
