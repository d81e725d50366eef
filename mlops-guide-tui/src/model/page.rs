//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（含原则磁贴）
    #[default]
    Home,
    /// 技术组件
    Components,
    /// 成熟度模型
    MaturityModels,
    /// 工具类别
    Tools,
    /// 参考架构（折叠面板）
    ReferenceArchitecture,
    /// 技术栈图
    StackBuilder,
    /// 播客
    Podcast,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Page::Home => nav.home,
            Page::Components => nav.components,
            Page::MaturityModels => nav.maturity,
            Page::Tools => nav.tools,
            Page::ReferenceArchitecture => nav.reference,
            Page::StackBuilder => nav.stack,
            Page::Podcast => nav.podcast,
        }
    }

    /// 是否是磁贴浏览页（有详情弹层）
    pub fn has_overlay(self) -> bool {
        !matches!(self, Page::ReferenceArchitecture | Page::Podcast)
    }
}
