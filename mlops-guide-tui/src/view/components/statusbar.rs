//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    // 弹窗只能关闭
    if app.modal.is_open() {
        hints.push((keys.esc, actions.close));
        return hints;
    }

    // 详情弹层
    if app.overlay_open() {
        hints.push((keys.esc, actions.close));
        hints.push((keys.next_prev, actions.next_prev));
        if app.current_page == Page::Tools {
            hints.push((keys.tab, actions.switch_tab));
        }
        hints.push((keys.arrows_ud, actions.scroll));
        return hints;
    }

    hints.push((keys.tab, actions.switch_panel));

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::ReferenceArchitecture => {
                hints.push((keys.arrows_ud, actions.navigate));
                hints.push((keys.enter, actions.expand));
            }
            Page::Podcast => {
                hints.push((keys.space, actions.play_pause));
            }
            _ => {
                hints.push((keys.arrows, actions.navigate));
                hints.push((keys.enter, actions.open));
            }
        },
    }

    hints.push((keys.help, actions.help));
    hints.push((keys.quit, t().common.quit));

    hints
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn open_overlay_offers_close() {
        let mut app = test_support::app();
        app.current_page = Page::Tools;
        app.tools.activate(&app.content.tools).unwrap();

        let hints = get_hints(&app);
        let texts = &t().hints;
        assert_eq!(hints[0], (texts.keys.esc, texts.actions.close));
        assert!(hints.contains(&(texts.keys.tab, texts.actions.switch_tab)));
    }

    #[test]
    fn modal_only_offers_close() {
        let mut app = test_support::app();
        app.modal.show_help();
        assert_eq!(get_hints(&app), vec![(t().hints.keys.esc, t().hints.actions.close)]);
    }
}
