//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod browser;
mod modal;
mod podcast;
mod reference;

pub use browser::{BrowserState, GridStep};
pub use modal::{Modal, ModalState};
pub use podcast::PodcastState;
pub use reference::ReferenceState;
