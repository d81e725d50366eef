//! 内容面板消息
//!
//! 磁贴光标、详情弹层、参考架构折叠面板和播放器共用这一组消息，
//! 由 update/content.rs 按当前页面解释。

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 光标 ==========
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认：打开磁贴 / 展开面板 / 播放
    Confirm,
    /// 鼠标点击了第 n 个磁贴
    ActivateTile(usize),

    // ========== 详情弹层 ==========
    CloseOverlay,
    /// 切到下一个磁贴（弹层不关闭）
    NextTopic,
    /// 切到上一个磁贴
    PrevTopic,
    SelectTab(usize),
    NextTab,
    PrevTab,

    // ========== 滚动 ==========
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ========== 参考架构专用 ==========
    /// 鼠标点击了第 n 个折叠面板
    ToggleSection(usize),

    // ========== 播客专用 ==========
    TogglePlayback,
}
