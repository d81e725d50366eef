//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回：关闭弹窗，或把焦点交还导航栏
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 主循环节拍（轮询播放器）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
