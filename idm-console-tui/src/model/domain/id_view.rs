//! ID 视图数据模型

use idm_console_core::{EntityService, Row, SliceMode};

use super::{Column, EntityKind, TableEntity};
use crate::backend::CoreService;
use crate::model::state::EntityTableState;
use crate::model::App;

/// ID 视图（为一组主机覆盖用户/组属性）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdView {
    pub cn: String,
    pub description: String,
    /// 应用到的主机数
    pub applied_hosts: u32,
    /// 覆盖条目数
    pub overrides: u32,
}

impl IdView {
    pub fn new(cn: &str, description: &str, applied_hosts: u32, overrides: u32) -> Self {
        Self {
            cn: cn.to_string(),
            description: description.to_string(),
            applied_hosts,
            overrides,
        }
    }

    /// 内置的 `Default Trust View` 不允许删除
    pub fn is_builtin(&self) -> bool {
        self.cn == "Default Trust View"
    }
}

impl Row for IdView {
    fn key(&self) -> &str {
        &self.cn
    }

    fn is_selectable(&self) -> bool {
        !self.cn.is_empty() && !self.is_builtin()
    }
}

impl TableEntity for IdView {
    const KIND: EntityKind = EntityKind::IdViews;
    const MODE: SliceMode = SliceMode::ClientSide;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID view name", 24),
            Column::new("Hosts", 6),
            Column::new("Overrides", 9),
            Column::new("Description", 30),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.cn.clone(),
            self.applied_hosts.to_string(),
            self.overrides.to_string(),
            self.description.clone(),
        ]
    }

    fn table(app: &App) -> &EntityTableState<Self> {
        &app.id_views
    }

    fn table_mut(app: &mut App) -> &mut EntityTableState<Self> {
        &mut app.id_views
    }

    fn service(backend: &CoreService) -> EntityService<Self> {
        backend.id_views()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_view_is_not_selectable() {
        let view = IdView::new("Default Trust View", "", 0, 0);
        assert!(!view.is_selectable());
        assert!(IdView::new("linux_hosts", "", 3, 12).is_selectable());
    }
}
