//! 详情正文的行构造
//!
//! 详情弹层和参考架构的折叠面板共用。所有函数都按给定宽度预先换行，
//! 这样调用方能拿到准确的行数来计算滚动范围。

use mlops_guide_core::{DetailKind, OverlayBody, TopicRecord, PROS_CONS_TABS};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::util::text::{wrap, wrap_with_marker};
use crate::view::theme::Styles;

/// 表格非末列的最大宽度占比（1/4）
const COLUMN_SHARE: usize = 4;

/// 表格列间距
const GAP: &str = "  ";

pub fn text_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::styled(line, Styles::body()))
        .collect()
}

pub fn bullet_lines(items: &[String], width: usize) -> Vec<Line<'static>> {
    items
        .iter()
        .flat_map(|item| wrap_with_marker(item, width, "• "))
        .map(|line| Line::styled(line, Styles::body()))
        .collect()
}

pub fn step_lines(steps: &[String], width: usize) -> Vec<Line<'static>> {
    steps
        .iter()
        .enumerate()
        .flat_map(|(i, step)| wrap_with_marker(step, width, &format!("{}. ", i + 1)))
        .map(|line| Line::styled(line, Styles::body()))
        .collect()
}

fn stage_lines(stages: &[TopicRecord], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, stage) in stages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(
            format!("{} {}: {}", t().overlay.stage, i + 1, stage.key),
            Styles::heading(),
        ));
        if let DetailKind::PlainText { text } = &stage.detail {
            lines.extend(text_lines(text, width));
        } else {
            lines.extend(text_lines(&stage.summary, width));
        }
    }
    lines
}

/// 把表格排成等宽文本行
///
/// 前几列取内容宽度（不超过总宽的 1/4），最后一列占满剩余宽度并换行。
pub fn table_lines<H, C, R>(columns: &[H], rows: &[R], width: usize) -> Vec<Line<'static>>
where
    H: AsRef<str>,
    C: AsRef<str>,
    R: AsRef<[C]>,
{
    let count = columns.len();
    if count == 0 {
        return Vec::new();
    }
    let cap = (width / COLUMN_SHARE).max(4);
    let mut widths: Vec<usize> = (0..count - 1)
        .map(|col| {
            let header = columns[col].as_ref().width();
            rows.iter()
                .filter_map(|row| row.as_ref().get(col))
                .map(|cell| cell.as_ref().width())
                .fold(header, usize::max)
                .min(cap)
        })
        .collect();
    let used: usize = widths.iter().sum::<usize>() + GAP.len() * (count - 1);
    widths.push(width.saturating_sub(used).max(8));

    let layout_row = |cells: Vec<&str>| -> Vec<String> {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| wrap(cell, *w))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(0);
        (0..height)
            .map(|line| {
                let parts: Vec<String> = wrapped
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| {
                        let text = cell.get(line).map_or("", String::as_str);
                        format!("{text}{}", " ".repeat(w.saturating_sub(text.width())))
                    })
                    .collect();
                parts.join(GAP).trim_end().to_string()
            })
            .collect()
    };

    let mut lines: Vec<Line<'static>> = layout_row(columns.iter().map(|h| h.as_ref()).collect())
        .into_iter()
        .map(|line| Line::styled(line, Styles::heading()))
        .collect();
    let rule = "─".repeat(width.min(widths.iter().sum::<usize>() + GAP.len() * (count - 1)));
    lines.push(Line::styled(rule, Styles::muted()));

    for row in rows {
        let cells: Vec<&str> = (0..count)
            .map(|col| row.as_ref().get(col).map_or("", |c| c.as_ref()))
            .collect();
        lines.extend(
            layout_row(cells)
                .into_iter()
                .map(|line| Line::styled(line, Styles::body())),
        );
    }
    lines
}

/// 不带标签页状态的完整正文（参考架构折叠面板用）
pub fn detail_lines(detail: &DetailKind, width: usize) -> Vec<Line<'static>> {
    match detail {
        DetailKind::PlainText { text } => text_lines(text, width),
        DetailKind::StageList { stages } => stage_lines(stages, width),
        DetailKind::ProsCons {
            advantages,
            disadvantages,
        } => {
            let mut lines = Vec::new();
            for (label, items) in PROS_CONS_TABS.iter().zip([advantages, disadvantages]) {
                lines.push(Line::styled(*label, Styles::heading()));
                lines.extend(bullet_lines(items, width));
            }
            lines
        }
        DetailKind::Steps { steps } => step_lines(steps, width),
        DetailKind::Table { columns, rows } => table_lines(columns, rows, width),
    }
}

/// 详情弹层的正文（标签页只显示当前一页）
pub fn body_lines(body: &OverlayBody<'_>, width: usize) -> Vec<Line<'static>> {
    match body {
        OverlayBody::Text(text) => text_lines(text, width),
        OverlayBody::Stages(stages) => stage_lines(stages, width),
        OverlayBody::Tabbed { items, .. } => bullet_lines(items, width),
        OverlayBody::Steps(steps) => step_lines(steps, width),
        OverlayBody::Table { columns, rows } => table_lines(columns, rows, width),
    }
}

/// 带缩进的行（折叠面板展开后的正文）
pub fn indent(lines: Vec<Line<'static>>, by: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(by);
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.extend(line.spans);
            Line::from(spans).style(line.style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn steps_are_numbered_and_aligned() {
        let steps = vec!["define the goal".to_string(), "collect data".to_string()];
        let lines = plain(&step_lines(&steps, 10));
        assert_eq!(lines, vec!["1. define", "   the", "   goal", "2. collect", "   data"]);
    }

    #[test]
    fn table_wraps_last_column() {
        let rows = vec![vec!["MO1", "Git", "source code versioning for every project"]];
        let lines = plain(&table_lines(&["Activity", "Component", "Description"], &rows, 40));

        assert!(lines[0].starts_with("Activity"));
        assert!(lines[1].starts_with('─'));
        assert!(lines[2].starts_with("MO1"));
        // 描述列换到下一行，前两列留空
        assert!(lines.len() > 3);
        assert!(lines[3].starts_with(' '));
        assert!(lines.iter().all(|l| l.width() <= 40));
    }

    #[test]
    fn pros_and_cons_both_show_in_full_detail() {
        let detail = DetailKind::ProsCons {
            advantages: vec!["fast".into()],
            disadvantages: vec!["costly".into()],
        };
        let lines = plain(&detail_lines(&detail, 30));
        assert_eq!(lines, vec!["Advantages", "• fast", "Disadvantages", "• costly"]);
    }
}
