//! 类型定义模块

mod catalog;
mod topic;

pub use catalog::{Tile, TopicCatalog};
pub use topic::{DetailKind, TopicKey, TopicRecord, PROS_CONS_TABS};
