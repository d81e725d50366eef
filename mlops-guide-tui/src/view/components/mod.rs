//! 可复用组件

pub mod detail;
pub mod image;
pub mod modal;
pub mod navigation;
pub mod overlay;
pub mod statusbar;
pub mod tile_grid;
