//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event --> Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 内容面板子消息（光标、行选择、分页、批量操作）
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     例如，用户在 HBAC 规则页按住 Shift 点击第 3 行：
//!         Event::Mouse(Down(Left), row = ..)
//!             ↓ event/handler.rs（同时更新 ShiftTracker）
//!         AppMessage::Content(ContentMessage::ClickRow(3))
//!             ↓ update/content.rs
//!         EntityTableState::click(3) → TableController 做区间选择
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
