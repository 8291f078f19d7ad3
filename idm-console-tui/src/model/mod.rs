//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod hit_area;       // 表格的鼠标命中区域
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod domain;     // 领域模型（主机、规则、ID 视图）
//!         pub mod state;      // 页面数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、实体表格（EntityTableState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     四个实体页面共用同一个泛型状态：
//!
//!         EntityTableState<T> {
//!             table: TableController<T>,  // core：行、分页、选择、过滤、重置信号
//!             cursor: usize,              // 键盘光标（当前页内）
//!             error: Option<String>,      // 最近一次加载失败
//!         }
//!
//!     实体类型通过 `TableEntity` trait 绑定到 App 中的字段和 CoreService 中的服务，
//!     Update/View 层用 `dispatch!` 宏按 EntityKind 选择具体类型。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、Shift 状态
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App 持有唯一的 `ShiftTracker`；每个表格在创建时拿到一个只读的
//!     `ShiftHandle`。Event 层在每个键盘/鼠标事件上更新它，
//!     表格在切换行时读取它决定是否做区间选择。
//!

mod app;
mod focus;
mod hit_area;
mod navigation;
mod page;
pub mod state;

pub mod domain;

pub use app::App;
pub use focus::FocusPanel;
pub use hit_area::TableHitArea;
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{EntityTableState, ModalState, SettingsState};
