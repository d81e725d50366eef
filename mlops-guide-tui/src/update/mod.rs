//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   mlops-guide-    │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!         复杂的子消息委托给子模块处理（navigation、content、modal）。
//!         通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 内容更新（content.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     按当前页面分发：
//!         - 磁贴页（首页原则、组件、成熟度、工具、技术栈图）
//!             光标移动、打开 / 关闭详情弹层、切换标签页、滚动弹层
//!             网格列数和最大滚动行数取自上一帧的 HitMap
//!         - 参考架构
//!             折叠面板的光标、展开收起、整页滚动
//!         - 播客
//!             调用 PodcastState::toggle() 播放或暂停
//!
//!     core 返回的错误写进状态栏并记日志，不会中断程序。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 节拍（Tick）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环每一轮都会发送 AppMessage::Tick：
//!         podcast.tick() 轮询播放进程，取出这段时间的状态变化，
//!         再把最后一次变化写进状态栏。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//! 




mod content;
mod modal;
mod navigation;

use mlops_guide_core::audio::PlaybackState;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};




/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 由内向外：弹窗 → 详情弹层 → 焦点回到导航栏
            if app.modal.is_open() {
                app.modal.close();
            } else if let Some((browser, _)) = app.browser_mut().filter(|(b, _)| b.is_overlay_open()) {
                browser.dismiss();
            } else {
                app.focus = FocusPanel::Navigation;
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            // 显示帮助弹窗
            app.modal.show_help();
        }

        AppMessage::Tick => {
            handle_tick(app);
        }

        AppMessage::Noop => {}
    }
}

/// 轮询播放器，把最新的状态变化写进状态栏
fn handle_tick(app: &mut App) {
    let Some(last) = app.podcast.tick().pop() else {
        return;
    };
    log::debug!("Playback state changed to {last}");

    let texts = &t().status_bar;
    match last {
        PlaybackState::Playing => app.set_status(texts.playback_started),
        PlaybackState::Paused => app.set_status(texts.playback_paused),
        PlaybackState::Ended => app.set_status(texts.playback_ended),
        PlaybackState::Idle => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::ContentMessage;
    use crate::model::Page;
    use crate::test_support;

    #[test]
    fn toggle_focus_is_blocked_by_modal() {
        let mut app = test_support::app();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn go_back_unwinds_one_layer_at_a_time() {
        let mut app = test_support::app();
        app.focus = FocusPanel::Content;
        app.current_page = Page::Components;
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        update(&mut app, AppMessage::ShowHelp);

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert!(app.overlay_open());

        update(&mut app, AppMessage::GoBack);
        assert!(!app.overlay_open());
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn tick_reports_playback_changes() {
        let mut app = test_support::app();
        app.current_page = Page::Podcast;
        update(&mut app, AppMessage::Content(ContentMessage::TogglePlayback));
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.podcast.state(), PlaybackState::Playing);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.playback_started));

        update(&mut app, AppMessage::Content(ContentMessage::TogglePlayback));
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.podcast.state(), PlaybackState::Paused);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.playback_paused));
    }

    #[test]
    fn quiet_tick_keeps_status() {
        let mut app = test_support::app();
        app.set_status("hello");
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.status_message.as_deref(), Some("hello"));
    }
}
