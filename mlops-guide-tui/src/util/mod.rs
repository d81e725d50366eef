//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户输入 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复、日志文件、以及按显示宽度处理文本。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志写入文件（stdout 归 TUI 所有）
//!         mod terminal;       // 终端初始化和恢复（含鼠标捕获）
//!         pub mod text;       // 按显示宽度换行 / 截断
//!
//!
//! 终端的生命周期：
//!
//!     main.rs
//!         init_logging(...)           // 打开日志文件，失败则静默跳过
//!         init_terminal(mouse)        // raw mode + 备用屏幕 (+ 鼠标捕获)
//!         app::run(...)               // 主循环
//!         restore_terminal(...)       // 无论主循环成功与否都会执行
//!

mod logging;
mod terminal;
pub mod text;

pub use logging::{init_logging, log_file_path};
pub use terminal::{init_terminal, restore_terminal, Term};
