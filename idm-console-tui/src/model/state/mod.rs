//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod entity_table;
mod modal;
mod settings;

pub use entity_table::{next_page_size, prev_page_size, EntityTableState, StatusTab, PAGE_SIZES};
pub use modal::{Modal, ModalState};
pub use settings::{SettingItem, SettingsState, Theme};
