//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message, Styles::body()),
        Line::from(""),
        Line::styled(t().modal.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let help = &t().help;
    let actions = &help.actions;

    let area = centered_rect(60, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc, Styles::body()),
        ])
    };

    let lines = vec![
        Line::styled(help.global_shortcuts, Styles::heading()),
        row("Tab", actions.switch_panel),
        row("Esc", actions.back_close),
        row("? / Alt+h", t().hints.actions.help),
        row("q", actions.quit),
        Line::from(""),
        Line::styled(help.browse_shortcuts, Styles::heading()),
        row("←↑↓→ hjkl", actions.move_cursor),
        row("Enter", actions.open),
        row("Space", actions.play_pause),
        row("Enter", actions.expand),
        row("Mouse", actions.mouse),
        Line::from(""),
        Line::styled(help.overlay_shortcuts, Styles::heading()),
        row("n / p", actions.next_prev),
        row("Tab ←→ 1 2", actions.switch_tab),
        row("↑↓ PgUp PgDn", actions.scroll),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
