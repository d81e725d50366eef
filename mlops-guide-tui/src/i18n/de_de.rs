//! 德文翻译 (de-DE)

use super::keys::{
    ActionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames, ModalTexts,
    NavTexts, OverlayTexts, PageTexts, PodcastTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "MLOps-Leitfaden",
        quit: "Beenden",
        image: "Bild",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Leertaste",
            arrows: "←↑↓→",
            arrows_ud: "↑↓",
            next_prev: "n/p",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            navigate: "Navigieren",
            switch_panel: "Bereich wechseln",
            open: "Öffnen",
            close: "Schließen",
            next_prev: "Weiter/Zurück",
            switch_tab: "Reiter wechseln",
            scroll: "Blättern",
            expand: "Aufklappen",
            play_pause: "Abspielen/Pause",
            help: "Hilfe",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menü",
        home: "Startseite",
        components: "Komponenten",
        maturity: "Reifegradmodelle",
        tools: "Werkzeuge",
        reference: "Referenzarchitektur",
        stack: "Stack-Baukasten",
        podcast: "Podcast",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    pages: PageTexts {
        what_is_mlops: "Was ist MLOps?",
        history: "Historische Entwicklung",
        principles: "MLOps-Prinzipien",
        learn_more: "Enter: Mehr erfahren",
        implementation: "Umsetzungsstrategie",
        key_components: "Schlüsselkomponenten",
        actors: "Akteure",
        conclusion: "Fazit",
        stack_hint: "Komponente wählen, um ihre Beschreibung zu sehen",
        legend_process: "Prozess",
        legend_storage: "Speicher",
    },

    overlay: OverlayTexts {
        close_hint: "Esc/Enter/q schließen",
        stage: "Stufe",
    },

    podcast: PodcastTexts {
        play: "▶ Abspielen",
        pause: "❚❚ Pause",
        idle: "Bereit",
        playing: "Läuft",
        paused: "Pausiert",
        ended: "Beendet",
        elapsed: "Verstrichen",
        source: "Audiodatei",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        close_hint: "Esc oder Enter zum Schließen",
        config_error: "Konfigurationsfehler",
        content_error: "Inhaltsfehler",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        playback_started: "Podcast läuft",
        playback_paused: "Podcast pausiert",
        playback_ended: "Podcast beendet",
        playback_failed: "Wiedergabe fehlgeschlagen",
        overrides_applied: "Inhaltsanpassungen übernommen",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Hilfe",
        global_shortcuts: "Globale Tasten",
        browse_shortcuts: "Blättern",
        overlay_shortcuts: "Detailansicht",
        close_hint: "Esc schließt die Hilfe",
        actions: HelpActionTexts {
            switch_panel: "Bereich wechseln",
            move_cursor: "Cursor bewegen",
            open: "Öffnen / Aufklappen",
            back_close: "Zurück/Schließen",
            quit: "Beenden",
            next_prev: "Nächstes/Vorheriges Thema",
            switch_tab: "Reiter wechseln",
            scroll: "Blättern",
            expand: "Abschnitt umschalten",
            play_pause: "Podcast abspielen/pausieren",
            mouse: "Kacheln anklicken, außerhalb klicken schließt",
        },
    },
};
