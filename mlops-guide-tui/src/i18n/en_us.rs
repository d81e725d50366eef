//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames, ModalTexts,
    NavTexts, OverlayTexts, PageTexts, PodcastTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "MLOps Guide",
        quit: "Quit",
        image: "Image",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows: "←↑↓→",
            arrows_ud: "↑↓",
            next_prev: "n/p",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            switch_panel: "Switch panel",
            open: "Open",
            close: "Close",
            next_prev: "Next/Prev",
            switch_tab: "Switch tab",
            scroll: "Scroll",
            expand: "Expand",
            play_pause: "Play/Pause",
            help: "Help",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        components: "Components",
        maturity: "Maturity Models",
        tools: "Tools",
        reference: "Reference Architecture",
        stack: "Stack Builder",
        podcast: "Podcast",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    pages: PageTexts {
        what_is_mlops: "What is MLOps?",
        history: "Historical Development",
        principles: "MLOps Principles",
        learn_more: "Enter: Learn more",
        implementation: "Implementation Strategy",
        key_components: "Key Components",
        actors: "Actors",
        conclusion: "Conclusion",
        stack_hint: "Select a component to see its description",
        legend_process: "Process",
        legend_storage: "Storage",
    },

    overlay: OverlayTexts {
        close_hint: "Esc/Enter/q close",
        stage: "Stage",
    },

    podcast: PodcastTexts {
        play: "▶ Play",
        pause: "❚❚ Pause",
        idle: "Ready",
        playing: "Playing",
        paused: "Paused",
        ended: "Finished",
        elapsed: "Elapsed",
        source: "Audio file",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        close_hint: "Press Esc or Enter to close",
        config_error: "Configuration Error",
        content_error: "Content Error",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        playback_started: "Playing podcast",
        playback_paused: "Podcast paused",
        playback_ended: "Podcast finished",
        playback_failed: "Playback failed",
        overrides_applied: "Content overrides applied",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        browse_shortcuts: "Browsing",
        overlay_shortcuts: "Detail overlay",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_cursor: "Move cursor",
            open: "Open / Expand",
            back_close: "Back/Close",
            quit: "Quit",
            next_prev: "Next/Previous topic",
            switch_tab: "Switch tab",
            scroll: "Scroll",
            expand: "Toggle section",
            play_pause: "Play/Pause podcast",
            mouse: "Click tiles, click outside to close",
        },
    },
};
