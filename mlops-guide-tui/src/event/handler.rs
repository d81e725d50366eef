//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, HitTarget, Page};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),          // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),  // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop,                            // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 详情弹层打开时，按键只作用于弹层
    if app.overlay_open() {
        return handle_overlay_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理帮助 / 错误弹窗的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

/// 处理详情弹层的按键
fn handle_overlay_keys(key: KeyEvent) -> AppMessage {
    let content = |message| AppMessage::Content(message);

    if DefaultKeymap::NEXT_TOPIC.matches(&key) {
        return content(ContentMessage::NextTopic);
    }
    if DefaultKeymap::PREV_TOPIC.matches(&key) {
        return content(ContentMessage::PrevTopic);
    }
    if DefaultKeymap::NEXT_TAB.matches(&key) {
        return content(ContentMessage::NextTab);
    }
    if DefaultKeymap::PREV_TAB.matches(&key) {
        return content(ContentMessage::PrevTab);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => content(ContentMessage::CloseOverlay),

        // ← →: 切换标签页
        KeyCode::Right | KeyCode::Char('l') => content(ContentMessage::NextTab),
        KeyCode::Left | KeyCode::Char('h') => content(ContentMessage::PrevTab),

        // 数字键直接选标签页
        KeyCode::Char(c @ '1'..='9') => content(ContentMessage::SelectTab(digit_index(c))),

        // ↑↓: 滚动正文
        KeyCode::Up | KeyCode::Char('k') => content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => content(ContentMessage::ScrollDown),
        KeyCode::PageUp => content(ContentMessage::PageUp),
        KeyCode::PageDown => content(ContentMessage::PageDown),

        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        // 1-9: 直接打开对应页面
        KeyCode::Char(c @ '1'..='9') => {
            AppMessage::Navigation(NavigationMessage::Jump(digit_index(c)))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 根据当前页面处理特定按键
    match app.current_page {
        Page::ReferenceArchitecture => handle_reference_keys(key),
        Page::Podcast => handle_podcast_keys(key),
        _ => handle_grid_keys(key),
    }
}

/// 处理磁贴类页面的按键（通用）
fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    let content = |message| AppMessage::Content(message);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => content(ContentMessage::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => content(ContentMessage::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => content(ContentMessage::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => content(ContentMessage::MoveRight),

        // Home / End: 第一块 / 最后一块
        KeyCode::Home => content(ContentMessage::SelectFirst),
        KeyCode::End => content(ContentMessage::SelectLast),

        KeyCode::PageUp => content(ContentMessage::PageUp),
        KeyCode::PageDown => content(ContentMessage::PageDown),

        // Enter / Space: 打开详情
        KeyCode::Enter | KeyCode::Char(' ') => content(ContentMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理参考架构页面的按键
fn handle_reference_keys(key: KeyEvent) -> AppMessage {
    let content = |message| AppMessage::Content(message);
    match key.code {
        // ↑↓: 在折叠面板之间移动
        KeyCode::Up | KeyCode::Char('k') => content(ContentMessage::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => content(ContentMessage::MoveDown),

        // Enter / Space: 展开或收起
        KeyCode::Enter | KeyCode::Char(' ') => content(ContentMessage::Confirm),

        // PgUp / PgDn: 滚动整页
        KeyCode::PageUp => content(ContentMessage::PageUp),
        KeyCode::PageDown => content(ContentMessage::PageDown),

        _ => AppMessage::Noop,
    }
}

/// 处理播客页面的按键
fn handle_podcast_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PLAY_PAUSE.matches(&key) || key.code == KeyCode::Enter {
        return AppMessage::Content(ContentMessage::TogglePlayback);
    }
    AppMessage::Noop
}

/// 处理鼠标事件
///
/// 点击区域来自上一帧的 HitMap，所以点到的总是用户看到的那个目标。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    let hits = app.hit_map.borrow();
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp if !app.modal.is_open() => {
            AppMessage::Content(ContentMessage::ScrollUp)
        }
        MouseEventKind::ScrollDown if !app.modal.is_open() => {
            AppMessage::Content(ContentMessage::ScrollDown)
        }

        MouseEventKind::Down(MouseButton::Left) => {
            // 弹窗打开时，点击任意位置关闭
            if app.modal.is_open() {
                return AppMessage::Modal(ModalMessage::Close);
            }

            if app.overlay_open() {
                if !hits.in_overlay(column, row) {
                    return AppMessage::Content(ContentMessage::CloseOverlay);
                }
                return match hits.target_at(column, row) {
                    Some(HitTarget::Tab(tab)) => AppMessage::Content(ContentMessage::SelectTab(tab)),
                    _ => AppMessage::Noop,
                };
            }

            match hits.target_at(column, row) {
                Some(HitTarget::NavItem(index)) => {
                    AppMessage::Navigation(NavigationMessage::Jump(index))
                }
                Some(HitTarget::Tile(index)) => {
                    AppMessage::Content(ContentMessage::ActivateTile(index))
                }
                Some(HitTarget::Section(index)) => {
                    AppMessage::Content(ContentMessage::ToggleSection(index))
                }
                Some(HitTarget::PlayButton) => AppMessage::Content(ContentMessage::TogglePlayback),
                Some(HitTarget::Tab(_)) | None => AppMessage::Noop,
            }
        }

        _ => AppMessage::Noop,
    }
}

/// '1' → 0，'2' → 1 ...
fn digit_index(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize).saturating_sub(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_support;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn release_events_are_ignored() {
        let app = test_support::app();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(event, &app), AppMessage::Noop);
    }

    #[test]
    fn global_keys() {
        let app = test_support::app();
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
        assert_eq!(handle_event(press(KeyCode::Char('?')), &app), AppMessage::ShowHelp);
        assert_eq!(handle_event(press(KeyCode::Tab), &app), AppMessage::ToggleFocus);
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack);
        assert_eq!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                &app
            ),
            AppMessage::Quit
        );
    }

    #[test]
    fn digits_jump_from_navigation() {
        let app = test_support::app();
        assert_eq!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Navigation(NavigationMessage::Jump(2))
        );
    }

    #[test]
    fn content_keys_depend_on_page() {
        let mut app = test_support::app();
        app.focus = FocusPanel::Content;
        assert_eq!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Content(ContentMessage::MoveRight)
        );

        app.current_page = Page::Podcast;
        assert_eq!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Content(ContentMessage::TogglePlayback)
        );
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::Noop);

        app.current_page = Page::ReferenceArchitecture;
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        );
    }

    #[test]
    fn overlay_captures_keys() {
        let mut app = test_support::app();
        app.focus = FocusPanel::Content;
        app.current_page = Page::Tools;
        app.tools.activate(&app.content.tools).unwrap();

        assert_eq!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Content(ContentMessage::CloseOverlay)
        );
        assert_eq!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Content(ContentMessage::NextTab)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('2')), &app),
            AppMessage::Content(ContentMessage::SelectTab(1))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::Content(ContentMessage::NextTopic)
        );
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = test_support::app();
        app.modal.show_help();
        assert_eq!(handle_event(press(KeyCode::Tab), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(handle_event(click(0, 0), &app), AppMessage::Modal(ModalMessage::Close));
    }

    #[test]
    fn clicks_resolve_through_hit_map() {
        let app = test_support::app();
        {
            let mut hits = app.hit_map.borrow_mut();
            hits.push(Rect::new(0, 2, 20, 1), HitTarget::NavItem(4));
            hits.push(Rect::new(30, 5, 20, 6), HitTarget::Tile(7));
        }
        assert_eq!(
            handle_event(click(3, 2), &app),
            AppMessage::Navigation(NavigationMessage::Jump(4))
        );
        assert_eq!(
            handle_event(click(35, 8), &app),
            AppMessage::Content(ContentMessage::ActivateTile(7))
        );
        assert_eq!(handle_event(click(79, 23), &app), AppMessage::Noop);
    }

    #[test]
    fn click_outside_overlay_closes_it() {
        let mut app = test_support::app();
        app.principles.activate(&app.content.principles).unwrap();
        {
            let mut hits = app.hit_map.borrow_mut();
            hits.push(Rect::new(30, 5, 20, 6), HitTarget::Tile(0));
            hits.set_overlay(Rect::new(10, 3, 60, 18));
            hits.push(Rect::new(12, 4, 8, 1), HitTarget::Tab(1));
        }
        assert_eq!(
            handle_event(click(0, 0), &app),
            AppMessage::Content(ContentMessage::CloseOverlay)
        );
        // 弹层盖住的磁贴不可点
        assert_eq!(handle_event(click(35, 8), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(click(13, 4), &app),
            AppMessage::Content(ContentMessage::SelectTab(1))
        );
    }
}
