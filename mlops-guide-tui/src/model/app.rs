//! 应用主状态结构

use std::cell::RefCell;
use std::path::PathBuf;

use mlops_guide_core::audio::AudioPlayer;
use mlops_guide_core::{ContentLibrary, TopicCatalog};

use super::{
    BrowserState, FocusPanel, HitMap, ModalState, NavigationState, Page, PodcastState,
    ReferenceState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 所有页面的内容（启动后不再改变）
    pub content: ContentLibrary,

    /// 图片和音频所在目录
    pub assets_dir: PathBuf,

    // === 各页面状态 ===
    /// 首页原则磁贴
    pub principles: BrowserState,
    /// 组件页面
    pub components: BrowserState,
    /// 成熟度模型页面
    pub maturity: BrowserState,
    /// 工具页面
    pub tools: BrowserState,
    /// 技术栈图
    pub stack: BrowserState,
    /// 参考架构页面
    pub reference: ReferenceState,
    /// 播客页面
    pub podcast: PodcastState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 上一帧登记的点击区域，渲染时写入
    pub hit_map: RefCell<HitMap>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(content: ContentLibrary, assets_dir: PathBuf, player: Box<dyn AudioPlayer>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            content,
            assets_dir,
            principles: BrowserState::new(),
            components: BrowserState::new(),
            maturity: BrowserState::new(),
            tools: BrowserState::new(),
            stack: BrowserState::new(),
            reference: ReferenceState::new(),
            podcast: PodcastState::new(player),
            modal: ModalState::new(),
            hit_map: RefCell::new(HitMap::default()),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前页面的浏览状态和它的目录（参考架构、播客页没有）
    pub fn browser(&self) -> Option<(&BrowserState, &TopicCatalog)> {
        match self.current_page {
            Page::Home => Some((&self.principles, &self.content.principles)),
            Page::Components => Some((&self.components, &self.content.components)),
            Page::MaturityModels => Some((&self.maturity, &self.content.maturity_models)),
            Page::Tools => Some((&self.tools, &self.content.tools)),
            Page::StackBuilder => Some((&self.stack, &self.content.stack.catalog)),
            Page::ReferenceArchitecture | Page::Podcast => None,
        }
    }

    /// 同上，可变版本
    pub fn browser_mut(&mut self) -> Option<(&mut BrowserState, &TopicCatalog)> {
        match self.current_page {
            Page::Home => Some((&mut self.principles, &self.content.principles)),
            Page::Components => Some((&mut self.components, &self.content.components)),
            Page::MaturityModels => Some((&mut self.maturity, &self.content.maturity_models)),
            Page::Tools => Some((&mut self.tools, &self.content.tools)),
            Page::StackBuilder => Some((&mut self.stack, &self.content.stack.catalog)),
            Page::ReferenceArchitecture | Page::Podcast => None,
        }
    }

    /// 当前页面是否有打开的详情弹层
    pub fn overlay_open(&self) -> bool {
        self.browser()
            .is_some_and(|(browser, _)| browser.is_overlay_open())
    }
}
