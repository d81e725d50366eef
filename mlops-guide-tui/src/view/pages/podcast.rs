//! 播客页面

use mlops_guide_core::audio::{format_elapsed, wave_scales, PlaybackState, WAVE_BARS};
use mlops_guide_core::content::podcast::{
    CREDIT_NAME, CREDIT_PREFIX, CREDIT_URL, EPISODE_FILE, EPISODE_TITLE, TITLE,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HitTarget};
use crate::view::theme::{colors, Styles};

/// 波形高度（行）
const WAVE_HEIGHT: u16 = 8;

/// 从低到高的八分之一方块
const EIGHTHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// 渲染播客页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().podcast;
    let state = app.podcast.state();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),           // 标题和来源
            Constraint::Length(3),           // 播放按钮
            Constraint::Length(1),           // 状态
            Constraint::Length(1),           // 间隔
            Constraint::Length(WAVE_HEIGHT), // 波形
            Constraint::Min(0),
        ])
        .split(area);

    let audio_path = app.assets_dir.join(EPISODE_FILE);
    let info = vec![
        Line::styled(TITLE, Styles::heading()),
        Line::from(""),
        Line::styled(EPISODE_TITLE, Styles::title()),
        Line::from(vec![
            Span::styled(format!("{CREDIT_PREFIX} "), Styles::muted()),
            Span::styled(CREDIT_NAME, Styles::body().add_modifier(Modifier::UNDERLINED)),
            Span::styled(format!(" ({CREDIT_URL})"), Styles::muted()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.source), Styles::muted()),
            Span::styled(audio_path.display().to_string(), Styles::body()),
        ]),
    ];
    frame.render_widget(Paragraph::new(info), layout[0]);

    // 播放按钮
    let label = if state.is_playing() {
        texts.pause
    } else {
        texts.play
    };
    let button_area = Rect {
        width: layout[1].width.min(16),
        ..layout[1]
    };
    let focused = app.focus.is_content();
    let button = Paragraph::new(Line::styled(
        label,
        if focused {
            Styles::selected()
        } else {
            Styles::title()
        },
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border(focused)),
    );
    frame.render_widget(button, button_area);
    app.hit_map
        .borrow_mut()
        .push(button_area, HitTarget::PlayButton);

    // 状态 + 已播放时长
    let state_text = match state {
        PlaybackState::Idle => texts.idle,
        PlaybackState::Playing => texts.playing,
        PlaybackState::Paused => texts.paused,
        PlaybackState::Ended => texts.ended,
    };
    let status = Line::from(vec![
        Span::styled(state_text, Styles::heading()),
        Span::styled(
            format!("   {}: {}", texts.elapsed, format_elapsed(app.podcast.elapsed())),
            Styles::muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), layout[2]);

    if state.is_playing() {
        let scales = wave_scales(app.podcast.elapsed());
        frame.render_widget(Paragraph::new(wave_lines(&scales)), layout[4]);
    }
}

/// 每根柱子两列宽，柱间空一列
fn wave_lines(scales: &[f64; WAVE_BARS]) -> Vec<Line<'static>> {
    let style = Style::default().fg(colors().success);
    let total = u32::from(WAVE_HEIGHT) * 8;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled: Vec<u32> = scales
        .iter()
        .map(|scale| (scale.clamp(0.0, 1.0) * f64::from(total)).round() as u32)
        .collect();

    (0..WAVE_HEIGHT)
        .map(|row| {
            // 从底部数第几行
            let level = u32::from(WAVE_HEIGHT - 1 - row) * 8;
            let text: String = filled
                .iter()
                .map(|eighths| {
                    let cell = eighths.saturating_sub(level).min(8);
                    let glyph = match cell {
                        0 => ' ',
                        n => EIGHTHS[n as usize - 1],
                    };
                    format!("{glyph}{glyph} ")
                })
                .collect();
            Line::styled(text, style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_bar_fills_every_row() {
        let lines = wave_lines(&[1.0; WAVE_BARS]);
        assert_eq!(lines.len(), usize::from(WAVE_HEIGHT));
        assert!(lines.iter().all(|l| l.to_string().starts_with("██ ")));
    }

    #[test]
    fn half_bar_fills_bottom_half() {
        let lines = wave_lines(&[0.5; WAVE_BARS]);
        assert!(lines[0].to_string().starts_with("   "));
        assert!(lines[3].to_string().starts_with("   "));
        assert!(lines[4].to_string().starts_with("██ "));
    }
}
