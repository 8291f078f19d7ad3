//! 可复用的 UI 组件

pub mod modal;
pub mod navigation;
pub mod statusbar;
