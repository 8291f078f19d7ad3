//! 导航状态定义

use super::domain::EntityKind;
use super::Page;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        self.page.title()
    }
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    page: Page::Home,
                    icon: "⌂",
                },
                NavItem {
                    page: Page::Entities(EntityKind::Hosts),
                    icon: "▣",
                },
                NavItem {
                    page: Page::Entities(EntityKind::HbacRules),
                    icon: "⚿",
                },
                NavItem {
                    page: Page::Entities(EntityKind::SudoRules),
                    icon: "#",
                },
                NavItem {
                    page: Page::Entities(EntityKind::IdViews),
                    icon: "◎",
                },
                NavItem {
                    page: Page::Settings,
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中项对应的页面
    pub fn current_page(&self) -> Option<Page> {
        self.current_item().map(|item| item.page)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
