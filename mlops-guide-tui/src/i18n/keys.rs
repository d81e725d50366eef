//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//! 只覆盖界面外壳（导航、提示、状态、弹窗）；教学内容本身始终是英文，
//! 由 `mlops_guide_core::content` 提供。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：帮助和错误弹窗的内容都放在 modal / help 下
//! 3. **页面内容归 `pages.*`**：各页面的小标题
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 页面小标题
    pub pages: PageTexts,
    /// 详情弹层文本
    pub overlay: OverlayTexts,
    /// 播客页面文本
    pub podcast: PodcastTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    /// 图片说明前缀
    pub image: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows: &'static str,    // "←↑↓→"
    pub arrows_ud: &'static str, // "↑↓"
    pub next_prev: &'static str, // "n/p"
    pub help: &'static str,      // "?"
    pub quit: &'static str,      // "q"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub switch_panel: &'static str,
    pub open: &'static str,
    pub close: &'static str,
    pub next_prev: &'static str,
    pub switch_tab: &'static str,
    pub scroll: &'static str,
    pub expand: &'static str,
    pub play_pause: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub components: &'static str,
    pub maturity: &'static str,
    pub tools: &'static str,
    pub reference: &'static str,
    pub stack: &'static str,
    pub podcast: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 页面小标题
pub struct PageTexts {
    pub what_is_mlops: &'static str,
    pub history: &'static str,
    pub principles: &'static str,
    pub learn_more: &'static str,
    pub implementation: &'static str,
    pub key_components: &'static str,
    pub actors: &'static str,
    pub conclusion: &'static str,
    pub stack_hint: &'static str,
    pub legend_process: &'static str,
    pub legend_storage: &'static str,
}

/// 详情弹层文本
pub struct OverlayTexts {
    pub close_hint: &'static str,
    pub stage: &'static str,
}

/// 播客页面文本
pub struct PodcastTexts {
    pub play: &'static str,
    pub pause: &'static str,
    pub idle: &'static str,
    pub playing: &'static str,
    pub paused: &'static str,
    pub ended: &'static str,
    pub elapsed: &'static str,
    pub source: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub close_hint: &'static str,
    pub config_error: &'static str,
    pub content_error: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub playback_started: &'static str,
    pub playback_paused: &'static str,
    pub playback_ended: &'static str,
    pub playback_failed: &'static str,
    pub overrides_applied: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub browse_shortcuts: &'static str,
    pub overlay_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_cursor: &'static str,
    pub open: &'static str,
    pub back_close: &'static str,
    pub quit: &'static str,
    pub next_prev: &'static str,
    pub switch_tab: &'static str,
    pub scroll: &'static str,
    pub expand: &'static str,
    pub play_pause: &'static str,
    pub mouse: &'static str,
}
