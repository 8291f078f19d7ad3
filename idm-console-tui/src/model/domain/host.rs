//! 主机数据模型

use idm_console_core::{EntityService, Row, SliceMode};

use super::{Column, EntityKind, TableEntity};
use crate::backend::CoreService;
use crate::model::state::EntityTableState;
use crate::model::App;

/// 已注册主机
///
/// `fqdn` 为空的条目是目录返回的占位行（例如权限不足时被隐藏的主机），
/// 永远不可选中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub fqdn: String,
    pub description: String,
    pub os: Option<String>,
    /// 是否已注册 keytab
    pub enrolled: bool,
}

impl Host {
    pub fn new(fqdn: &str, description: &str, os: Option<&str>, enrolled: bool) -> Self {
        Self {
            fqdn: fqdn.to_string(),
            description: description.to_string(),
            os: os.map(str::to_string),
            enrolled,
        }
    }
}

impl Row for Host {
    fn key(&self) -> &str {
        &self.fqdn
    }

    fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.fqdn.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

impl TableEntity for Host {
    const KIND: EntityKind = EntityKind::Hosts;
    const MODE: SliceMode = SliceMode::ServerSide;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("Host name", 32),
            Column::new("Description", 24),
            Column::new("OS", 14),
            Column::new("Enrolled", 8),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        let fqdn = if self.fqdn.is_empty() {
            "(hidden)".to_string()
        } else {
            self.fqdn.clone()
        };
        vec![
            fqdn,
            self.description.clone(),
            self.os.clone().unwrap_or_default(),
            if self.enrolled { "yes" } else { "no" }.to_string(),
        ]
    }

    fn table(app: &App) -> &EntityTableState<Self> {
        &app.hosts
    }

    fn table_mut(app: &mut App) -> &mut EntityTableState<Self> {
        &mut app.hosts
    }

    fn service(backend: &CoreService) -> EntityService<Self> {
        backend.hosts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_host_is_not_selectable() {
        let host = Host::new("", "", None, false);
        assert!(!host.is_selectable());
        assert_eq!(host.cells()[0], "(hidden)");
    }

    #[test]
    fn search_matches_description() {
        let host = Host::new("db01.ipa.test", "Primary database", None, true);
        assert!(host.matches("DATABASE"));
        assert!(host.matches("db01"));
        assert!(!host.matches("web"));
    }
}
