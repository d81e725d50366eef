//! 磁贴浏览页状态
//!
//! 首页原则、组件、成熟度、工具、技术栈图都是同一种页面：
//! 一组磁贴，一个光标，一个详情弹层。弹层的开关由 core 的
//! [`SelectionState`] 决定，这里只多记光标和弹层滚动位置。

use mlops_guide_core::{CoreResult, SelectionState, TopicCatalog};

/// 光标移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStep {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// 浏览页状态
#[derive(Debug, Default)]
pub struct BrowserState {
    /// 光标所在磁贴（tiles() 下标）
    cursor: usize,
    selection: SelectionState,
    overlay_scroll: u16,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn overlay_scroll(&self) -> u16 {
        self.overlay_scroll
    }

    pub fn is_overlay_open(&self) -> bool {
        self.selection.is_open()
    }

    /// 在 `columns` 列的网格里移动光标
    pub fn move_cursor(&mut self, step: GridStep, columns: usize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let columns = columns.max(1);
        let last = len - 1;
        let c = self.cursor.min(last);

        self.cursor = match step {
            GridStep::Left if c % columns > 0 => c - 1,
            GridStep::Right if c % columns + 1 < columns && c < last => c + 1,
            GridStep::Up if c >= columns => c - columns,
            GridStep::Down if c + columns <= last => c + columns,
            // 下一行不满时落到最后一个
            GridStep::Down if c / columns < last / columns => last,
            GridStep::First => 0,
            GridStep::Last => last,
            _ => c,
        };
    }

    /// 直接把光标放到某个磁贴（图中节点跳转用）
    pub fn set_cursor(&mut self, index: usize, len: usize) {
        if index < len {
            self.cursor = index;
        }
    }

    /// 打开光标所在磁贴
    pub fn activate(&mut self, catalog: &TopicCatalog) -> CoreResult<()> {
        let tiles = catalog.tiles();
        let Some(tile) = tiles.get(self.cursor) else {
            return Ok(());
        };
        self.selection.select(catalog, tile.key().as_str())?;
        self.overlay_scroll = 0;
        log::debug!("Opened overlay for {}", tile.key());
        Ok(())
    }

    /// 鼠标点击：先移光标再打开
    pub fn activate_at(&mut self, index: usize, catalog: &TopicCatalog) -> CoreResult<()> {
        self.set_cursor(index, catalog.tiles().len());
        if self.cursor == index {
            self.activate(catalog)
        } else {
            Ok(())
        }
    }

    /// 弹层打开时切到相邻磁贴，不经过关闭状态
    pub fn retarget(&mut self, forward: bool, catalog: &TopicCatalog) -> CoreResult<()> {
        if !self.selection.is_open() {
            return Ok(());
        }
        let len = catalog.tiles().len();
        if len == 0 {
            return Ok(());
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
        self.activate(catalog)
    }

    /// 关闭弹层
    pub fn dismiss(&mut self) {
        if self.selection.is_open() {
            log::debug!("Dismissed overlay");
        }
        self.selection.dismiss();
        self.overlay_scroll = 0;
    }

    /// 切换标签页；返回是否真的切换了
    pub fn select_tab(&mut self, tab: usize, catalog: &TopicCatalog) -> CoreResult<bool> {
        let changed = self.selection.select_tab(catalog, tab)?;
        if changed {
            self.overlay_scroll = 0;
        }
        Ok(changed)
    }

    /// 循环切换标签页，`forward` 为 false 时向前
    pub fn cycle_tab(&mut self, forward: bool, catalog: &TopicCatalog) -> CoreResult<bool> {
        let Some(key) = self.selection.open_key() else {
            return Ok(false);
        };
        let count = catalog.get(key.as_str())?.detail.tab_count();
        if count == 0 {
            return Ok(false);
        }
        let active = self.selection.active_tab();
        let next = if forward {
            (active + 1) % count
        } else {
            (active + count - 1) % count
        };
        self.select_tab(next, catalog)
    }

    /// 滚动弹层，`max` 来自上一帧渲染
    pub fn scroll_overlay(&mut self, delta: i32, max: u16) {
        self.overlay_scroll = scroll_by(self.overlay_scroll, delta, max);
    }
}

/// 在 `[0, max]` 内按 `delta` 滚动
pub fn scroll_by(current: u16, delta: i32, max: u16) -> u16 {
    let next = i32::from(current.min(max)) + delta;
    u16::try_from(next.clamp(0, i32::from(max))).unwrap_or(max)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mlops_guide_core::{DetailKind, TopicRecord};

    use super::*;

    fn catalog() -> TopicCatalog {
        TopicCatalog::from_records(vec![
            TopicRecord::text("A", "alpha"),
            TopicRecord::text("B", "beta"),
            TopicRecord::new(
                "Tools",
                DetailKind::ProsCons {
                    advantages: vec!["x".into()],
                    disadvantages: vec!["y".into()],
                },
            ),
            TopicRecord::text("D", "delta"),
            TopicRecord::text("E", "epsilon"),
        ])
        .unwrap()
    }

    #[test]
    fn grid_moves_stay_in_bounds() {
        let mut state = BrowserState::new();
        // 3 列：
        // 0 1 2
        // 3 4
        state.move_cursor(GridStep::Left, 3, 5);
        assert_eq!(state.cursor(), 0);
        state.move_cursor(GridStep::Down, 3, 5);
        assert_eq!(state.cursor(), 3);
        state.move_cursor(GridStep::Right, 3, 5);
        state.move_cursor(GridStep::Right, 3, 5);
        assert_eq!(state.cursor(), 4);
        state.move_cursor(GridStep::Up, 3, 5);
        assert_eq!(state.cursor(), 1);
        state.move_cursor(GridStep::Right, 3, 5);
        state.move_cursor(GridStep::Down, 3, 5);
        // 2 下方没有磁贴，落到最后一个
        assert_eq!(state.cursor(), 4);
        state.move_cursor(GridStep::First, 3, 5);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn activate_opens_cursor_tile() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.move_cursor(GridStep::Right, 5, 5);
        state.activate(&catalog).unwrap();
        assert_eq!(state.selection().open_key().unwrap().as_str(), "B");
    }

    #[test]
    fn retarget_moves_without_closing() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.activate_at(4, &catalog).unwrap();
        state.scroll_overlay(3, 10);

        state.retarget(true, &catalog).unwrap();
        assert!(state.is_overlay_open());
        assert_eq!(state.selection().open_key().unwrap().as_str(), "A");
        assert_eq!(state.overlay_scroll(), 0);

        state.retarget(false, &catalog).unwrap();
        assert_eq!(state.selection().open_key().unwrap().as_str(), "E");
    }

    #[test]
    fn retarget_when_closed_is_noop() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.retarget(true, &catalog).unwrap();
        assert!(!state.is_overlay_open());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn tabs_cycle_and_reset_on_retarget() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.activate_at(2, &catalog).unwrap();
        assert!(state.cycle_tab(true, &catalog).unwrap());
        assert_eq!(state.selection().active_tab(), 1);
        assert!(state.cycle_tab(true, &catalog).unwrap());
        assert_eq!(state.selection().active_tab(), 0);
        assert!(state.cycle_tab(false, &catalog).unwrap());
        assert_eq!(state.selection().active_tab(), 1);

        state.retarget(true, &catalog).unwrap();
        state.retarget(false, &catalog).unwrap();
        assert_eq!(state.selection().active_tab(), 0);
    }

    #[test]
    fn plain_text_has_no_tabs() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.activate(&catalog).unwrap();
        assert!(!state.cycle_tab(true, &catalog).unwrap());
    }

    #[test]
    fn click_out_of_range_does_nothing() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.activate_at(42, &catalog).unwrap();
        assert!(!state.is_overlay_open());
    }

    #[test]
    fn dismiss_resets_scroll() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.activate(&catalog).unwrap();
        state.scroll_overlay(5, 3);
        assert_eq!(state.overlay_scroll(), 3);
        state.dismiss();
        assert!(!state.is_overlay_open());
        assert_eq!(state.overlay_scroll(), 0);
    }

    #[test]
    fn scroll_clamps() {
        assert_eq!(scroll_by(0, -1, 10), 0);
        assert_eq!(scroll_by(9, 5, 10), 10);
        assert_eq!(scroll_by(20, -1, 10), 9);
    }
}
