//! 导航状态定义

use super::Page;

/// 导航项
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

impl NavItem {
    /// 显示文本（随当前语言变化）
    pub fn label(&self) -> &'static str {
        self.page.title()
    }
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        let item = |page, icon| NavItem { page, icon };
        Self {
            items: vec![
                item(Page::Home, "⌂"),
                item(Page::Components, "◫"),
                item(Page::MaturityModels, "▲"),
                item(Page::Tools, "⚒"),
                item(Page::ReferenceArchitecture, "▦"),
                item(Page::StackBuilder, "◈"),
                item(Page::Podcast, "♪"),
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// 跳到指定项，越界时忽略
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// 获取当前选中项对应的页面
    pub fn current_page(&self) -> Option<Page> {
        self.items.get(self.selected).map(|item| item.page)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_one_entry() {
        let nav = NavigationState::new();
        for page in [
            Page::Home,
            Page::Components,
            Page::MaturityModels,
            Page::Tools,
            Page::ReferenceArchitecture,
            Page::StackBuilder,
            Page::Podcast,
        ] {
            assert_eq!(nav.items.iter().filter(|i| i.page == page).count(), 1);
        }
    }

    #[test]
    fn selection_stays_in_range() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.selected, 0);
        assert!(!nav.select(99));
        assert!(nav.select(6));
        nav.select_next();
        assert_eq!(nav.current_page(), Some(Page::Podcast));
    }
}
