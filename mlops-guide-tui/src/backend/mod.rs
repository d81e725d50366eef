//!
//! src/backend/mod.rs
//! Backend 层：外部资源
//!
//! Backend 层与 UI 完全解耦，只和文件系统、子进程打交道。
//! 教学内容本身由 mlops-guide-core 提供，不经过这一层。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod audio_service;      // 播放器子进程（实现 core 的 AudioPlayer）
//!         mod config_service;     // 配置文件读取（JSON）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     main.rs 启动时：
//!
//!         LocalConfigService::in_dir(&config_dir())
//!             ↓
//!         load_or_default(&service)   // 文件缺失 → 默认值
//!             ↓                       // 文件损坏 → 默认值 + 错误弹窗
//!         (AppConfig, Option<Error>)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、播放器（CommandPlayer）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在播客页按 Space
//!         ↓
//!     update 层调用 player.toggle()
//!         ↓
//!     CommandPlayer 启动 / 结束子进程，触发 on_state_change 监听器
//!         ↓
//!     监听器把新状态发进 mpsc 通道，主循环每个 Tick 取出并更新 PodcastState
//!

mod audio_service;
mod config_service;

pub use audio_service::CommandPlayer;
pub use config_service::{config_dir, load_or_default, LocalConfigService};
