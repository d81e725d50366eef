//! 上一帧的可点击区域
//!
//! View 层在渲染时登记每个可点击矩形，Event 层用它把鼠标坐标翻译成消息。
//! 同时记下渲染时才知道的尺寸（网格列数、可滚动行数），供 Update 层使用。

use ratatui::layout::{Position, Rect};

/// 可点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// 导航项
    NavItem(usize),
    /// 磁贴 / 图中节点（按 tiles() 顺序）
    Tile(usize),
    /// 详情弹层中的标签页
    Tab(usize),
    /// 参考架构的折叠面板标题
    Section(usize),
    /// 播客播放按钮
    PlayButton,
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
    overlay: Option<Rect>,
    /// 当前磁贴网格的列数
    pub grid_columns: usize,
    /// 详情弹层最大滚动行数
    pub overlay_max_scroll: u16,
    /// 可滚动页面的最大滚动行数
    pub page_max_scroll: u16,
    /// 可滚动页面的可视高度
    pub viewport_height: u16,
    /// 折叠面板标题在页面中的行号
    pub section_lines: Vec<u16>,
}

impl HitMap {
    /// 每帧开始时清空
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn set_overlay(&mut self, area: Rect) {
        self.overlay = Some(area);
    }

    /// 坐标是否落在详情弹层内
    pub fn in_overlay(&self, column: u16, row: u16) -> bool {
        self.overlay
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// 坐标下的目标，后登记的（画在上层的）优先
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_regions_win() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::Tile(0));
        hits.push(Rect::new(2, 2, 3, 1), HitTarget::Tab(1));
        assert_eq!(hits.target_at(3, 2), Some(HitTarget::Tab(1)));
        assert_eq!(hits.target_at(0, 9), Some(HitTarget::Tile(0)));
        assert_eq!(hits.target_at(10, 0), None);
    }

    #[test]
    fn empty_regions_are_skipped() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 0, 5), HitTarget::PlayButton);
        assert_eq!(hits.target_at(0, 0), None);
    }

    #[test]
    fn reset_forgets_overlay() {
        let mut hits = HitMap::default();
        hits.set_overlay(Rect::new(5, 5, 10, 10));
        assert!(hits.in_overlay(6, 6));
        assert!(!hits.in_overlay(1, 1));
        hits.reset();
        assert!(!hits.in_overlay(6, 6));
    }
}
