//! 内容面板更新逻辑

use mlops_guide_core::diagram::Anchor;
use mlops_guide_core::{CatalogError, CoreResult};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, FocusPanel, GridStep, Page};

/// PgUp / PgDn 一次滚动的行数
const PAGE_LINES: i32 = 10;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    // 鼠标点到内容区时焦点跟过去
    if matches!(
        msg,
        ContentMessage::ActivateTile(_)
            | ContentMessage::ToggleSection(_)
            | ContentMessage::TogglePlayback
    ) {
        app.focus = FocusPanel::Content;
    }

    let result = match app.current_page {
        Page::ReferenceArchitecture => {
            update_reference(app, msg);
            Ok(())
        }
        Page::Podcast => {
            update_podcast(app, msg);
            Ok(())
        }
        _ => update_browser(app, msg),
    };

    if let Err(e) = result {
        if e.is_expected() {
            log::warn!("{e}");
        } else {
            log::error!("{e}");
        }
        app.set_status(e.to_string());
    }
}

/// 磁贴页：光标、详情弹层、标签页
fn update_browser(app: &mut App, msg: ContentMessage) -> CoreResult<()> {
    if app.current_page == Page::StackBuilder && !app.stack.is_overlay_open() {
        if let Some(anchor) = diagram_direction(msg) {
            move_on_diagram(app, anchor);
            return Ok(());
        }
    }

    // 这两个值只有渲染后才知道
    let (columns, overlay_max) = {
        let hits = app.hit_map.borrow();
        (hits.grid_columns.max(1), hits.overlay_max_scroll)
    };

    let Some((browser, catalog)) = app.browser_mut() else {
        return Ok(());
    };
    let len = catalog.tiles().len();
    let overlay_open = browser.is_overlay_open();

    match msg {
        ContentMessage::ScrollUp if overlay_open => browser.scroll_overlay(-1, overlay_max),
        ContentMessage::ScrollDown if overlay_open => browser.scroll_overlay(1, overlay_max),
        ContentMessage::PageUp if overlay_open => browser.scroll_overlay(-PAGE_LINES, overlay_max),
        ContentMessage::PageDown if overlay_open => browser.scroll_overlay(PAGE_LINES, overlay_max),

        ContentMessage::MoveUp | ContentMessage::ScrollUp => {
            browser.move_cursor(GridStep::Up, columns, len);
        }
        ContentMessage::MoveDown | ContentMessage::ScrollDown => {
            browser.move_cursor(GridStep::Down, columns, len);
        }
        ContentMessage::MoveLeft => browser.move_cursor(GridStep::Left, columns, len),
        ContentMessage::MoveRight => browser.move_cursor(GridStep::Right, columns, len),
        ContentMessage::SelectFirst | ContentMessage::PageUp => {
            browser.move_cursor(GridStep::First, columns, len);
        }
        ContentMessage::SelectLast | ContentMessage::PageDown => {
            browser.move_cursor(GridStep::Last, columns, len);
        }

        ContentMessage::Confirm => browser.activate(catalog)?,
        ContentMessage::ActivateTile(index) => browser.activate_at(index, catalog)?,
        ContentMessage::CloseOverlay => browser.dismiss(),
        ContentMessage::NextTopic => browser.retarget(true, catalog)?,
        ContentMessage::PrevTopic => browser.retarget(false, catalog)?,

        ContentMessage::SelectTab(tab) => match browser.select_tab(tab, catalog) {
            // 没有这个标签页：保持原状
            Err(CatalogError::InvalidTab { key, tab }) => {
                log::debug!("Ignoring tab {tab} for {key}");
            }
            other => {
                other?;
            }
        },
        ContentMessage::NextTab => {
            browser.cycle_tab(true, catalog)?;
        }
        ContentMessage::PrevTab => {
            browser.cycle_tab(false, catalog)?;
        }

        ContentMessage::ToggleSection(_) | ContentMessage::TogglePlayback => {}
    }
    Ok(())
}

/// 技术栈图上的方向键：跳到该方向最近的节点
fn diagram_direction(msg: ContentMessage) -> Option<Anchor> {
    match msg {
        ContentMessage::MoveUp | ContentMessage::ScrollUp => Some(Anchor::Top),
        ContentMessage::MoveDown | ContentMessage::ScrollDown => Some(Anchor::Bottom),
        ContentMessage::MoveLeft => Some(Anchor::Left),
        ContentMessage::MoveRight => Some(Anchor::Right),
        _ => None,
    }
}

fn move_on_diagram(app: &mut App, toward: Anchor) {
    let stack = &app.content.stack;
    if let Some(next) = stack.diagram.neighbor(app.stack.cursor(), toward) {
        app.stack.set_cursor(next, stack.catalog.tiles().len());
    }
}

/// 参考架构：折叠面板和整页滚动
fn update_reference(app: &mut App, msg: ContentMessage) {
    let (max_scroll, viewport, section_lines) = {
        let hits = app.hit_map.borrow();
        (hits.page_max_scroll, hits.viewport_height, hits.section_lines.clone())
    };
    let len = app.content.implementation_phases.tiles().len();
    let reference = &mut app.reference;

    match msg {
        ContentMessage::MoveUp | ContentMessage::MoveDown => {
            reference.move_cursor(msg == ContentMessage::MoveDown, len);
            if let Some(&line) = section_lines.get(reference.cursor()) {
                reference.reveal(line, viewport);
            }
        }
        ContentMessage::Confirm => {
            let index = reference.cursor();
            let expanded = reference.toggle(index);
            log::debug!("Section {index} expanded: {expanded}");
        }
        ContentMessage::ToggleSection(index) => {
            reference.set_cursor(index, len);
            if reference.cursor() == index {
                let expanded = reference.toggle(index);
                log::debug!("Section {index} expanded: {expanded}");
            }
        }
        ContentMessage::ScrollUp => reference.scroll_by(-1, max_scroll),
        ContentMessage::ScrollDown => reference.scroll_by(1, max_scroll),
        ContentMessage::PageUp => reference.scroll_by(-PAGE_LINES, max_scroll),
        ContentMessage::PageDown => reference.scroll_by(PAGE_LINES, max_scroll),
        _ => {}
    }
}

/// 播客：播放 / 暂停
fn update_podcast(app: &mut App, msg: ContentMessage) {
    if !matches!(msg, ContentMessage::Confirm | ContentMessage::TogglePlayback) {
        return;
    }
    if let Err(e) = app.podcast.toggle() {
        log::error!("Podcast playback failed: {e}");
        app.set_status(format!("{}: {e}", t().status_bar.playback_failed));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{self, FakePlayer};
    use mlops_guide_core::audio::PlaybackState;
    use mlops_guide_core::{overlay, OverlayBody};

    fn on_page(page: Page) -> App {
        let mut app = test_support::app();
        app.current_page = page;
        app
    }

    #[test]
    fn grid_moves_use_rendered_columns() {
        let mut app = on_page(Page::Components);
        app.hit_map.borrow_mut().grid_columns = 3;
        update(&mut app, ContentMessage::MoveDown);
        assert_eq!(app.components.cursor(), 3);
        update(&mut app, ContentMessage::MoveRight);
        assert_eq!(app.components.cursor(), 4);
        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.components.cursor(), 9);
    }

    #[test]
    fn confirm_opens_tile_under_cursor() {
        let mut app = on_page(Page::Components);
        app.hit_map.borrow_mut().grid_columns = 2;
        update(&mut app, ContentMessage::MoveRight);
        update(&mut app, ContentMessage::Confirm);

        let tiles = app.content.components.tiles();
        assert_eq!(app.components.selection().open_key(), Some(tiles[1].key()));
        // 其他页面不受影响
        assert!(!app.principles.is_overlay_open());
    }

    #[test]
    fn click_opens_and_close_dismisses() {
        let mut app = on_page(Page::Home);
        update(&mut app, ContentMessage::ActivateTile(4));
        assert_eq!(app.principles.cursor(), 4);
        assert!(app.principles.is_overlay_open());
        assert!(app.focus.is_content());

        update(&mut app, ContentMessage::CloseOverlay);
        assert!(!app.principles.is_overlay_open());
        assert!(overlay::resolve(app.principles.selection(), &app.content.principles).is_none());
    }

    #[test]
    fn next_topic_wraps_without_closing() {
        let mut app = on_page(Page::Tools);
        update(&mut app, ContentMessage::SelectLast);
        update(&mut app, ContentMessage::Confirm);
        update(&mut app, ContentMessage::NextTopic);

        assert_eq!(app.tools.cursor(), 0);
        let tiles = app.content.tools.tiles();
        assert_eq!(app.tools.selection().open_key(), Some(tiles[0].key()));
    }

    #[test]
    fn tabs_switch_and_invalid_tab_is_ignored() {
        let mut app = on_page(Page::Tools);
        update(&mut app, ContentMessage::Confirm);
        update(&mut app, ContentMessage::SelectTab(1));
        assert_eq!(app.tools.selection().active_tab(), 1);

        update(&mut app, ContentMessage::SelectTab(5));
        assert_eq!(app.tools.selection().active_tab(), 1);
        assert_eq!(app.status_message, None);

        update(&mut app, ContentMessage::NextTab);
        assert_eq!(app.tools.selection().active_tab(), 0);

        let content = overlay::resolve(app.tools.selection(), &app.content.tools).unwrap();
        assert!(matches!(content.body, OverlayBody::Tabbed { active: 0, .. }));
    }

    #[test]
    fn scroll_moves_overlay_within_rendered_range() {
        let mut app = on_page(Page::Home);
        update(&mut app, ContentMessage::Confirm);
        app.hit_map.borrow_mut().overlay_max_scroll = 3;
        update(&mut app, ContentMessage::PageDown);
        assert_eq!(app.principles.overlay_scroll(), 3);
        update(&mut app, ContentMessage::ScrollUp);
        assert_eq!(app.principles.overlay_scroll(), 2);
        assert_eq!(app.principles.cursor(), 0);
    }

    #[test]
    fn arrows_follow_the_stack_diagram() {
        let mut app = on_page(Page::StackBuilder);
        update(&mut app, ContentMessage::MoveRight);
        assert_eq!(app.stack.cursor(), 1);
        update(&mut app, ContentMessage::MoveDown);
        assert_eq!(app.stack.cursor(), 3);
        update(&mut app, ContentMessage::MoveLeft);
        assert_eq!(app.stack.cursor(), 2);

        update(&mut app, ContentMessage::Confirm);
        let content = overlay::resolve(app.stack.selection(), &app.content.stack.catalog).unwrap();
        assert_eq!(content.record.key.as_str(), "Feature Store");
    }

    #[test]
    fn reference_sections_toggle() {
        let mut app = on_page(Page::ReferenceArchitecture);
        update(&mut app, ContentMessage::MoveDown);
        update(&mut app, ContentMessage::Confirm);
        assert!(app.reference.is_expanded(1));

        update(&mut app, ContentMessage::ToggleSection(3));
        assert_eq!(app.reference.cursor(), 3);
        assert!(app.reference.is_expanded(3));
        assert!(app.reference.is_expanded(1));

        update(&mut app, ContentMessage::ToggleSection(1));
        assert!(!app.reference.is_expanded(1));
    }

    #[test]
    fn reference_scroll_is_clamped() {
        let mut app = on_page(Page::ReferenceArchitecture);
        app.hit_map.borrow_mut().page_max_scroll = 4;
        update(&mut app, ContentMessage::PageDown);
        assert_eq!(app.reference.scroll(), 4);
        update(&mut app, ContentMessage::PageUp);
        assert_eq!(app.reference.scroll(), 0);
    }

    #[test]
    fn reference_cursor_is_revealed() {
        let mut app = on_page(Page::ReferenceArchitecture);
        {
            let mut hits = app.hit_map.borrow_mut();
            hits.viewport_height = 5;
            hits.page_max_scroll = 40;
            hits.section_lines = vec![2, 10, 20, 30, 40];
        }
        update(&mut app, ContentMessage::MoveDown);
        assert_eq!(app.reference.scroll(), 6);
    }

    #[test]
    fn playback_failure_reaches_status_bar() {
        let mut app = test_support::app_with(FakePlayer::failing());
        app.current_page = Page::Podcast;
        update(&mut app, ContentMessage::TogglePlayback);

        let status = app.status_message.clone().unwrap();
        assert!(status.starts_with(t().status_bar.playback_failed));
        assert!(status.contains("no such file"));
        assert_eq!(app.podcast.state(), PlaybackState::Idle);
    }
}
