//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含状态结构和对自身的小操作，不渲染、不读事件。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod hit_map;        // 上一帧的鼠标点击区域
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 page.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - Page 是一个简单的枚举，表示当前应用处于哪个“页面”，相当于房间的门牌号；
//!         - State 是各个页面的数据容器，存储着光标、弹层选中项、滚动位置等，
//!             相当于储存了房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub content: ContentLibrary,        // 所有页面的目录（core 提供）
//!
//!             // 以及各页面状态：
//!             pub principles / components / maturity / tools / stack: BrowserState,
//!             pub reference: ReferenceState,      // 折叠面板 + 滚动
//!             pub podcast: PodcastState,          // 播放器
//!
//!             pub modal: ModalState,              // 帮助 / 错误弹窗
//!             pub hit_map: RefCell<HitMap>,       // 渲染时登记的点击区域
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、浏览状态（BrowserState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个磁贴页各有一份，互不影响：
//!
//!         BrowserState {
//!             cursor: usize,                  // 光标所在磁贴
//!             selection: SelectionState,      // core 的状态机：Closed / Open(key)
//!             overlay_scroll: u16,            // 弹层滚动，每次 select 归零
//!         }
//!
//!     数据流：
//!         用户按 Enter 或点击磁贴
//!             ↓
//!         update/content.rs 调用 browser.activate(catalog)
//!             ↓
//!         SelectionState: Closed → Open(key)
//!             ↓
//!         view/components/overlay.rs 用 overlay::resolve 找到记录并绘制
//!
//!         用户按 Esc 或点击弹层外
//!             ↓
//!         browser.dismiss() → Closed，弹层不再绘制，也不再有点击区域
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、点击区域（HitMap）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     View 层只能读 App，但鼠标坐标要对应到渲染出来的磁贴，
//!     所以 App 里放了一个 RefCell<HitMap>：
//!         - view::render 开头 reset()，绘制时 push(rect, target)
//!         - event/handler.rs 用 target_at(x, y) 把点击翻译成消息
//!         - update 层读取 grid_columns / overlay_max_scroll 等渲染尺寸
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举只有 Help 和 Error { title, message } 两种。
//!     启动时可能同时有配置错误和内容错误，后到的排队，关闭一个显示下一个。
//!

mod app;
mod focus;
mod hit_map;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use hit_map::{HitMap, HitTarget};
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{BrowserState, GridStep, Modal, ModalState, PodcastState, ReferenceState};
