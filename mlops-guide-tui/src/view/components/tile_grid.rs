//! 磁贴网格组件
//!
//! 列数随可用宽度变化，光标所在行总在可视区域内。
//! 渲染时登记每块磁贴的点击区域，并把列数写进 HitMap 供方向键使用。

use mlops_guide_core::{DetailKind, Tile};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, HitTarget};
use crate::util::text::truncate;
use crate::view::theme::Styles;

/// 一块磁贴显示的内容
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    pub title: &'a str,
    pub icon: Option<&'a str>,
    pub summary: &'a str,
    pub footer: Option<&'a str>,
}

impl<'a> TileView<'a> {
    /// 摘要为空时退回到正文开头
    pub fn from_tile(tile: &Tile<'a>) -> Self {
        let record = tile.record;
        let summary = match (&record.detail, record.summary.is_empty()) {
            (DetailKind::PlainText { text }, true) => text.as_str(),
            _ => record.summary.as_str(),
        };
        Self {
            title: record.key.as_str(),
            icon: record.icon.as_deref(),
            summary,
            footer: None,
        }
    }

    #[must_use]
    pub fn with_footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }
}

/// 网格尺寸参数
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// 每列最小宽度
    pub min_width: u16,
    /// 最多列数
    pub max_columns: usize,
    /// 每块磁贴的高度（含边框）
    pub tile_height: u16,
}

/// 按可用宽度计算列数
pub fn columns_for(width: u16, spec: GridSpec) -> usize {
    usize::from(width / spec.min_width.max(1)).clamp(1, spec.max_columns.max(1))
}

/// 渲染磁贴网格
pub fn render(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    tiles: &[TileView<'_>],
    cursor: usize,
    spec: GridSpec,
) {
    let columns = columns_for(area.width, spec);
    let tile_height = spec.tile_height.max(3);
    let visible_rows = usize::from((area.height / tile_height).max(1));

    // 光标所在行超出可视区域时整体上移
    let cursor_row = cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let focused = app.focus.is_content();
    let mut hits = app.hit_map.borrow_mut();
    hits.grid_columns = columns;

    let Ok(columns_u16) = u16::try_from(columns) else {
        return;
    };
    let tile_width = area.width / columns_u16;

    for (index, tile) in tiles.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let (Ok(row), Ok(column)) = (u16::try_from(row), u16::try_from(index % columns)) else {
            break;
        };

        let rect = Rect::new(
            area.x + column * tile_width,
            area.y + row * tile_height,
            tile_width,
            tile_height,
        )
        .intersection(area);

        render_tile(frame, rect, tile, focused && index == cursor);
        hits.push(rect, HitTarget::Tile(index));
    }
}

/// 渲染单块磁贴
pub fn render_tile(frame: &mut Frame, area: Rect, tile: &TileView<'_>, selected: bool) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    let label_width = usize::from(area.width.saturating_sub(4));
    let title = match tile.icon {
        Some(icon) => format!("{icon} {}", tile.title),
        None => tile.title.to_string(),
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", truncate(&title, label_width)),
            if selected {
                Styles::selected()
            } else {
                Styles::title()
            },
        ))
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Styles::border(selected));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // 底部一行留给页脚
    let (body, footer) = match tile.footer {
        Some(footer) if inner.height > 1 => (
            Rect::new(inner.x, inner.y, inner.width, inner.height - 1),
            Some((footer, Rect::new(inner.x, inner.bottom() - 1, inner.width, 1))),
        ),
        _ => (inner, None),
    };

    let summary = Paragraph::new(tile.summary)
        .style(Styles::muted())
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, body);

    if let Some((text, rect)) = footer {
        let line = Line::styled(text, Styles::heading().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Right);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: GridSpec = GridSpec {
        min_width: 24,
        max_columns: 3,
        tile_height: 5,
    };

    #[test]
    fn columns_follow_width() {
        assert_eq!(columns_for(10, SPEC), 1);
        assert_eq!(columns_for(50, SPEC), 2);
        assert_eq!(columns_for(200, SPEC), 3);
    }
}
