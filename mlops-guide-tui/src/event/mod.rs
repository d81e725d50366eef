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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//! 
//! 
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event}; 
//! 
//! 
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 100ms
//! 
//!         · handle_event    事件分发
//! 
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件，借助上一帧的 HitMap 定位目标
//!             Event::Resize(Width , height)       // 终端窗口大小发生变化，下一帧自动重排
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 - 有帮助 / 错误弹窗时，只处理关闭
//!                 - Ctrl+C 任何时候都退出
//!                 - 当前页详情弹层打开时，调用 handle_overlay_keys 处理
//!                 - 全局快捷键（? q Esc Tab），就地处理
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 详情弹层
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Esc / Enter / q     → ContentMessage::CloseOverlay
//!         n / p               → NextTopic / PrevTopic（不关闭直接换内容）
//!         Tab / → / ←         → NextTab / PrevTab（工具页的优缺点）
//!         1 / 2               → SelectTab(0) / SelectTab(1)
//!         ↑↓ / 滚轮 / PgUp PgDn → 滚动
//!         点击弹层外          → CloseOverlay
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 鼠标
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     View 层渲染时把每个可点击矩形登记进 app.hit_map，
//!     handle_mouse_event 按坐标查出目标：
//!         HitTarget::NavItem(i)   → NavigationMessage::Jump(i)
//!         HitTarget::Tile(i)      → ContentMessage::ActivateTile(i)
//!         HitTarget::Tab(i)       → ContentMessage::SelectTab(i)
//!         HitTarget::Section(i)   → ContentMessage::ToggleSection(i)
//!         HitTarget::PlayButton   → ContentMessage::TogglePlayback
//! 

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
