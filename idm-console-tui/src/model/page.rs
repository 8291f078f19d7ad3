//! 页面状态定义

use super::domain::EntityKind;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 实体列表（主机、规则、ID 视图）
    Entities(EntityKind),
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Entities(kind) => kind.title(),
            Page::Settings => "Settings",
        }
    }

    /// 当前页面对应的实体类型
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            Page::Entities(kind) => Some(kind),
            _ => None,
        }
    }
}
