//! 设置页面状态

use serde::{Deserialize, Serialize};

use super::entity_table::{next_page_size, prev_page_size};
use idm_console_core::types::DEFAULT_PAGE_SIZE;

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 获取下一个主题
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 获取上一个主题
    pub fn prev(self) -> Theme {
        self.next() // 只有两个选项，prev 和 next 相同
    }
}

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    PageSize,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::PageSize]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::PageSize => "Default page size",
        }
    }
}

/// 设置页面状态
#[derive(Debug)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 表格默认每页条数
    pub page_size: u32,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            theme: Theme::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SettingsState {
    /// 创建新的设置状态
    pub fn new(theme: Theme, page_size: u32) -> Self {
        Self {
            theme,
            page_size,
            ..Self::default()
        }
    }

    /// 获取设置项数量
    pub fn item_count(&self) -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// 选择下一个设置项
    pub fn select_next(&mut self) {
        if self.selected_index < self.item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// 切换当前设置项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::PageSize) => self.page_size = next_page_size(self.page_size),
            None => {}
        }
    }

    /// 切换当前设置项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.prev(),
            Some(SettingItem::PageSize) => self.page_size = prev_page_size(self.page_size),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_around() {
        let mut s = SettingsState::default();
        s.select_previous();
        assert_eq!(s.current_item(), Some(SettingItem::PageSize));
        s.select_next();
        assert_eq!(s.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn page_size_steps_through_options() {
        let mut s = SettingsState::new(Theme::Light, 10);
        s.selected_index = 1;
        s.toggle_next();
        assert_eq!(s.page_size, 20);
        s.toggle_prev();
        s.toggle_prev();
        assert_eq!(s.page_size, 10);
    }
}
