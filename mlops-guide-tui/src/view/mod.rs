//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，把它画到终端上。
//! 唯一的“写”是 app.hit_map：渲染时顺手登记可点击区域和渲染尺寸，
//! 供下一轮的 Event / Update 层使用。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 可复用组件（导航栏、状态栏、磁贴网格、详情弹层、弹窗）
//!         mod layout;         // 主布局
//!         mod pages;          // 各页面
//!         pub mod theme;      // 主题和样式
//!
//!
//!     绘制顺序（后画的在上层）：
//!         标题栏 → 导航栏 → 页面内容 → 状态栏 → 详情弹层 → 帮助 / 错误弹窗
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染一帧
pub fn render(app: &App, frame: &mut Frame) {
    // 上一帧的点击区域作废
    app.hit_map.borrow_mut().reset();
    layout::render(app, frame);
}
