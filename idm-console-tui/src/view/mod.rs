//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model 渲染界面，唯一的例外是表格的鼠标命中区域：
//! 渲染时通过 `TableHitArea`（内部为 `Cell`）记录数据行所在位置，
//! 供 Event 层把鼠标坐标换算成行索引。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         pub mod theme;          // 主题颜色
//!         mod components;         // 导航、状态栏、弹窗
//!         mod pages;              // 首页、实体表格、设置
//!
//!     实体表格页面是泛型的：
//!         dispatch!(kind, render_entities(app, frame, area))
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
