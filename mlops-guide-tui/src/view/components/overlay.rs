//! 详情弹层组件
//!
//! 只在选中状态为 Open 时绘制。弹层所占矩形写进 HitMap，
//! 点击落在矩形外即关闭。

use mlops_guide_core::{overlay, OverlayBody, TopicCatalog};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::detail;
use crate::i18n::t;
use crate::model::{App, BrowserState, HitTarget};
use crate::view::theme::{colors, Styles};

/// 弹层最大宽度
const MAX_WIDTH: u16 = 90;

/// 渲染详情弹层（如果当前页面有打开的弹层）
pub fn render(
    app: &App,
    browser: &BrowserState,
    catalog: &TopicCatalog,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(content) = overlay::resolve(browser.selection(), catalog) else {
        return;
    };
    let c = colors();
    let rect = overlay_rect(area);

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", content.title()), Styles::title()))
        .title_bottom(Line::styled(format!(" {} ", t().overlay.close_hint), Styles::muted()).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut hits = app.hit_map.borrow_mut();
    hits.set_overlay(rect);

    // 左右各留一列
    let mut body = Rect::new(
        inner.x.saturating_add(1),
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    if let OverlayBody::Tabbed { labels, active, .. } = content.body {
        if body.height > 2 {
            let tab_bar = Rect::new(body.x, body.y, body.width, 1);
            render_tabs(frame, tab_bar, labels, active, |rect, tab| {
                hits.push(rect, HitTarget::Tab(tab));
            });
            body = Rect::new(body.x, body.y + 2, body.width, body.height - 2);
        }
    }

    let lines = detail::body_lines(&content.body, usize::from(body.width));
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(body.height);
    hits.overlay_max_scroll = max_scroll;

    let paragraph = Paragraph::new(lines).scroll((browser.overlay_scroll().min(max_scroll), 0));
    frame.render_widget(paragraph, body);
}

/// 弹层占页面的 4/5，宽度不超过 MAX_WIDTH，居中
fn overlay_rect(area: Rect) -> Rect {
    // 先放大到 u32 再乘，避免超宽终端溢出
    let four_fifths = |v: u16| u16::try_from(u32::from(v) * 4 / 5).unwrap_or(u16::MAX);

    let width = four_fifths(area.width).clamp(area.width.min(30), MAX_WIDTH);
    let height = four_fifths(area.height).max(area.height.min(10));
    Rect::new(
        area.x.saturating_add(area.width.saturating_sub(width) / 2),
        area.y.saturating_add(area.height.saturating_sub(height) / 2),
        width,
        height,
    )
    .intersection(area)
}

/// 标签栏，每个标签登记一个点击区域
fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    active: usize,
    mut on_tab: impl FnMut(Rect, usize),
) {
    let mut spans = Vec::new();
    let mut x = area.x;

    for (i, label) in labels.iter().enumerate() {
        let text = format!(" {} {label} ", i + 1);
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let style = if i == active {
            Styles::selected()
        } else {
            Styles::muted()
        };
        on_tab(Rect::new(x, area.y, width, 1).intersection(area), i);
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_centered_and_capped() {
        let rect = overlay_rect(Rect::new(20, 1, 200, 40));
        assert_eq!(rect, Rect::new(75, 5, MAX_WIDTH, 32));
        assert_eq!(overlay_rect(Rect::new(0, 0, 100, 40)).width, 80);
    }

    #[test]
    fn huge_area_does_not_overflow() {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        let rect = overlay_rect(area);
        assert!(rect.width <= MAX_WIDTH);
        assert!(!rect.is_empty());
        assert_eq!(area.intersection(rect), rect);
    }

    #[test]
    fn tiny_area_is_filled() {
        let area = Rect::new(0, 0, 20, 8);
        assert_eq!(overlay_rect(area), area);
    }
}
