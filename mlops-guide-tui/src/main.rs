//! MLOps Guide TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置和播放器 (`backend/`)
//!
//!
//! main.rs
//! MLOps Guide TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_or_default()       // 读取配置，失败时用默认值，错误留到启动后展示
//!     init_logging()          // 日志写进配置目录下的文件
//!     set_theme / set_language
//!     ContentLibrary          // 内置内容 + 可选的覆盖文件
//!     model::App::new()       // 创建 APP 实例
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal(mouse)`    // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen)?
//!             - 切换到 备用屏幕
//!         · execute!(io::stdout , EnableMouseCapture)?
//!             - 配置里 mouse 为 true 时开启鼠标
//!         · 返回 Terminal 对象
//!
//!
//!     配置错误和内容覆盖错误都不会阻止启动：
//!         程序带着默认值运行，错误以弹窗形式排队显示。
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use mlops_guide_core::content::podcast::EPISODE_FILE;
use mlops_guide_core::{ContentLibrary, ContentOverrides};

use backend::{config_dir, load_or_default, CommandPlayer, LocalConfigService};
use i18n::{set_language, t, Language};
use util::{init_logging, init_terminal, log_file_path, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let dir = config_dir();
    let config_service = LocalConfigService::in_dir(&dir);
    let (config, config_error) = load_or_default(&config_service);

    // 2. 初始化日志（失败时静默继续）
    init_logging(&log_file_path(&dir), &config.log_level);
    log::debug!("Config file: {}", config_service.path().display());
    if let Some(ref e) = config_error {
        log::error!("Failed to load config: {e:#}");
    }

    // 3. 主题和语言
    set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(lang) => set_language(lang),
        None => log::warn!(
            "Unsupported language {:?}, using {}",
            config.language,
            i18n::current_language().code()
        ),
    }

    // 4. 内容
    let mut content = ContentLibrary::builtin().context("built-in content is invalid")?;
    let mut content_error = None;
    let mut overrides_applied = false;
    if let Some(ref path) = config.content_file {
        match ContentOverrides::load(path).and_then(|overrides| content.apply(overrides)) {
            Ok(replaced) => {
                log::info!("Replaced {replaced} catalogs from {}", path.display());
                overrides_applied = true;
            }
            Err(e) => {
                log::error!("Failed to apply content overrides: {e}");
                content_error = Some(e);
            }
        }
    }

    // 5. 播放器
    let player = CommandPlayer::new(
        config.player_command.clone(),
        config.assets_dir.join(EPISODE_FILE),
    );

    // 6. 创建应用实例
    let mut app = model::App::new(content, config.assets_dir.clone(), Box::new(player));
    if let Some(e) = config_error {
        app.modal
            .show_error(t().modal.config_error, &format!("{e:#}"));
    }
    if let Some(e) = content_error {
        app.modal.show_error(t().modal.content_error, &e.to_string());
    }
    if overrides_applied {
        app.set_status(t().status_bar.overrides_applied);
    }

    // 7. 初始化终端
    let mut terminal = init_terminal(config.mouse)?;
    log::info!("MLOps Guide started");

    // 8. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 9. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 10. 返回结果
    result
}
