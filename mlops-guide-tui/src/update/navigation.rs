//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            open_selected(app);
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select(0);
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.select(len - 1);
            }
        }

        NavigationMessage::Jump(index) => {
            if app.navigation.select(index) {
                open_selected(app);
            }
        }
    }
}

/// 打开选中项对应的页面，焦点移到内容面板
fn open_selected(app: &mut App) {
    if let Some(page) = app.navigation.current_page() {
        if page != app.current_page {
            log::info!("Switching to page {page:?}");
        }
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app.clear_status(); // 切换页面时清除状态消息
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::test_support;

    #[test]
    fn confirm_opens_page_and_focuses_content() {
        let mut app = test_support::app();
        app.set_status("stale");
        update(&mut app, NavigationMessage::SelectNext);
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.current_page, Page::Home);

        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::MaturityModels);
        assert_eq!(app.focus, FocusPanel::Content);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn jump_ignores_unknown_items() {
        let mut app = test_support::app();
        update(&mut app, NavigationMessage::Jump(6));
        assert_eq!(app.current_page, Page::Podcast);

        app.focus = FocusPanel::Navigation;
        update(&mut app, NavigationMessage::Jump(42));
        assert_eq!(app.current_page, Page::Podcast);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn select_last_stays_in_range() {
        let mut app = test_support::app();
        update(&mut app, NavigationMessage::SelectLast);
        assert_eq!(app.navigation.selected, app.navigation.items.len() - 1);
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.selected, app.navigation.items.len() - 1);
    }
}
