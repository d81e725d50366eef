//! 参考架构页面状态
//!
//! 实施阶段以折叠面板展示，每个面板独立展开，整页可以滚动。

use std::collections::BTreeSet;

use super::browser::scroll_by;

#[derive(Debug, Default)]
pub struct ReferenceState {
    /// 光标所在的面板
    cursor: usize,
    /// 已展开的面板
    expanded: BTreeSet<usize>,
    /// 页面滚动行数
    scroll: u16,
}

impl ReferenceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// 移动面板光标
    pub fn move_cursor(&mut self, forward: bool, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    pub fn set_cursor(&mut self, index: usize, len: usize) {
        if index < len {
            self.cursor = index;
        }
    }

    /// 展开 / 收起；返回切换后是否展开
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.scroll = scroll_by(self.scroll, delta, max);
    }

    /// 让 `line` 行落在可视区域内
    pub fn reveal(&mut self, line: u16, viewport: u16) {
        if viewport == 0 {
            return;
        }
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + viewport {
            self.scroll = line + 1 - viewport;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_toggle_independently() {
        let mut state = ReferenceState::new();
        assert!(state.toggle(0));
        assert!(state.toggle(3));
        assert!(state.is_expanded(0) && state.is_expanded(3));
        assert!(!state.toggle(0));
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(3));
    }

    #[test]
    fn cursor_is_clamped() {
        let mut state = ReferenceState::new();
        state.move_cursor(false, 5);
        assert_eq!(state.cursor(), 0);
        for _ in 0..10 {
            state.move_cursor(true, 5);
        }
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn reveal_scrolls_both_ways() {
        let mut state = ReferenceState::new();
        state.reveal(30, 10);
        assert_eq!(state.scroll(), 21);
        state.reveal(25, 10);
        assert_eq!(state.scroll(), 21);
        state.reveal(4, 10);
        assert_eq!(state.scroll(), 4);
    }
}
