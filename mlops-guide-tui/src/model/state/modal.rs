//! 弹窗状态定义
//!
//! 详情弹层不在这里：它属于各浏览页自己的 `SelectionState`。
//! 这里只有帮助和错误两种全局弹窗。

use std::collections::VecDeque;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// 错误提示（启动时的配置 / 内容错误）
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    /// 排队等待显示的弹窗
    pending: VecDeque<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗；已有弹窗时排队
    pub fn show(&mut self, modal: Modal) {
        if self.active.is_some() {
            self.pending.push_back(modal);
        } else {
            self.active = Some(modal);
        }
    }

    /// 关闭弹窗，显示下一个排队的
    pub fn close(&mut self) {
        self.active = self.pending.pop_front();
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        if self.active != Some(Modal::Help) {
            self.show(Modal::Help);
        }
    }
}
