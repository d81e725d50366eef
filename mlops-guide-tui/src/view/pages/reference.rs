//! 参考架构页面
//!
//! 整页是一段可滚动的文本。实施阶段是折叠面板，
//! 面板标题所在的行号和点击区域写进 HitMap。

use mlops_guide_core::content::reference::{
    ACTORS, ACTOR_COLUMNS, CONCLUSION, DIAGRAM_IMAGE, KEY_COMPONENTS, KEY_COMPONENT_COLUMNS, NOTE,
    OVERVIEW, TITLE,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HitTarget};
use crate::view::components::{detail, image};
use crate::view::theme::{colors, Styles};

/// 渲染参考架构页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().pages;
    let width = usize::from(area.width.saturating_sub(1));
    let focused = app.focus.is_content();
    let reference = &app.reference;

    let mut lines: Vec<Line<'static>> = vec![Line::styled(TITLE, Styles::title()), Line::from("")];
    for paragraph in OVERVIEW {
        lines.extend(detail::text_lines(paragraph, width));
        lines.push(Line::from(""));
    }
    lines.push(image::caption(&DIAGRAM_IMAGE, &app.assets_dir));
    lines.push(Line::from(""));
    lines.extend(
        detail::text_lines(NOTE, width)
            .into_iter()
            .map(|line| line.style(Style::default().fg(colors().warning))),
    );
    lines.push(Line::from(""));

    // 实施阶段（折叠面板）
    lines.push(Line::styled(texts.implementation, Styles::heading()));
    let mut section_lines = Vec::new();
    for (index, tile) in app.content.implementation_phases.tiles().iter().enumerate() {
        let expanded = reference.is_expanded(index);
        section_lines.push(u16::try_from(lines.len()).unwrap_or(u16::MAX));

        let marker = if expanded { "▾" } else { "▸" };
        let style = if focused && index == reference.cursor() {
            Styles::selected()
        } else {
            Styles::title()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", tile.key()),
            style,
        )));

        if expanded {
            lines.extend(detail::indent(
                detail::detail_lines(&tile.record.detail, width.saturating_sub(2)),
                2,
            ));
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::styled(texts.key_components, Styles::heading()));
    lines.extend(detail::table_lines(&KEY_COMPONENT_COLUMNS, KEY_COMPONENTS, width));
    lines.push(Line::from(""));

    lines.push(Line::styled(texts.actors, Styles::heading()));
    lines.extend(detail::table_lines(&ACTOR_COLUMNS, ACTORS, width));
    lines.push(Line::from(""));

    lines.push(Line::styled(texts.conclusion, Styles::heading()));
    lines.extend(detail::text_lines(CONCLUSION, width));

    // 滚动范围只有渲染后才知道
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(area.height);
    let scroll = reference.scroll().min(max_scroll);

    let mut hits = app.hit_map.borrow_mut();
    for (index, line) in section_lines.iter().enumerate() {
        if *line >= scroll && *line - scroll < area.height {
            hits.push(
                Rect::new(area.x, area.y + (*line - scroll), area.width, 1),
                HitTarget::Section(index),
            );
        }
    }
    hits.page_max_scroll = max_scroll;
    hits.viewport_height = area.height;
    hits.section_lines = section_lines;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
