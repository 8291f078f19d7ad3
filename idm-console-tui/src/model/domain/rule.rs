//! HBAC / sudo 规则数据模型

use idm_console_core::{EntityService, Row, SliceMode};

use super::{Column, EntityKind, TableEntity};
use crate::backend::CoreService;
use crate::model::state::EntityTableState;
use crate::model::App;

/// 规则作用范围：`all` 类别或具体成员数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Members(u32),
}

impl Category {
    pub fn display(self) -> String {
        match self {
            Category::All => "all".to_string(),
            Category::Members(n) => n.to_string(),
        }
    }
}

/// 基于主机的访问控制规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HbacRule {
    pub cn: String,
    pub description: String,
    pub enabled: bool,
    pub users: Category,
    pub hosts: Category,
    pub services: Category,
}

impl HbacRule {
    pub fn new(cn: &str, description: &str, enabled: bool) -> Self {
        Self {
            cn: cn.to_string(),
            description: description.to_string(),
            enabled,
            users: Category::Members(0),
            hosts: Category::Members(0),
            services: Category::Members(0),
        }
    }

    pub fn with_categories(mut self, users: Category, hosts: Category, services: Category) -> Self {
        self.users = users;
        self.hosts = hosts;
        self.services = services;
        self
    }
}

impl Row for HbacRule {
    fn key(&self) -> &str {
        &self.cn
    }

    fn status(&self) -> Option<bool> {
        Some(self.enabled)
    }

    fn set_status(&mut self, enabled: bool) -> bool {
        self.enabled = enabled;
        true
    }
}

impl TableEntity for HbacRule {
    const KIND: EntityKind = EntityKind::HbacRules;
    const MODE: SliceMode = SliceMode::ClientSide;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("Rule name", 24),
            Column::new("Status", 9),
            Column::new("Users", 6),
            Column::new("Hosts", 6),
            Column::new("Services", 8),
            Column::new("Description", 24),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.cn.clone(),
            status_text(self.enabled).to_string(),
            self.users.display(),
            self.hosts.display(),
            self.services.display(),
            self.description.clone(),
        ]
    }

    fn table(app: &App) -> &EntityTableState<Self> {
        &app.hbac_rules
    }

    fn table_mut(app: &mut App) -> &mut EntityTableState<Self> {
        &mut app.hbac_rules
    }

    fn service(backend: &CoreService) -> EntityService<Self> {
        backend.hbac_rules()
    }
}

/// sudo 规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudoRule {
    pub cn: String,
    pub description: String,
    pub enabled: bool,
    /// `sudoOrder`
    pub order: Option<u32>,
    pub commands: Category,
    pub run_as: Option<String>,
}

impl SudoRule {
    pub fn new(cn: &str, description: &str, enabled: bool) -> Self {
        Self {
            cn: cn.to_string(),
            description: description.to_string(),
            enabled,
            order: None,
            commands: Category::Members(0),
            run_as: None,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_commands(mut self, commands: Category, run_as: Option<&str>) -> Self {
        self.commands = commands;
        self.run_as = run_as.map(str::to_string);
        self
    }
}

impl Row for SudoRule {
    fn key(&self) -> &str {
        &self.cn
    }

    fn status(&self) -> Option<bool> {
        Some(self.enabled)
    }

    fn set_status(&mut self, enabled: bool) -> bool {
        self.enabled = enabled;
        true
    }
}

impl TableEntity for SudoRule {
    const KIND: EntityKind = EntityKind::SudoRules;
    const MODE: SliceMode = SliceMode::ClientSide;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("Rule name", 24),
            Column::new("Status", 9),
            Column::new("Order", 6),
            Column::new("Commands", 9),
            Column::new("Run as", 10),
            Column::new("Description", 24),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.cn.clone(),
            status_text(self.enabled).to_string(),
            self.order.map(|o| o.to_string()).unwrap_or_default(),
            self.commands.display(),
            self.run_as.clone().unwrap_or_default(),
            self.description.clone(),
        ]
    }

    fn table(app: &App) -> &EntityTableState<Self> {
        &app.sudo_rules
    }

    fn table_mut(app: &mut App) -> &mut EntityTableState<Self> {
        &mut app.sudo_rules
    }

    fn service(backend: &CoreService) -> EntityService<Self> {
        backend.sudo_rules()
    }
}

fn status_text(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_report_and_update_status() {
        let mut rule = HbacRule::new("allow_ssh", "", true);
        assert_eq!(rule.status(), Some(true));
        assert!(rule.set_status(false));
        assert_eq!(rule.cells()[1], "Disabled");
    }

    #[test]
    fn sudo_cells_follow_columns() {
        let rule = SudoRule::new("admins_all", "", true)
            .with_order(10)
            .with_commands(Category::All, Some("root"));
        let cells = rule.cells();
        assert_eq!(cells.len(), SudoRule::columns().len());
        assert_eq!(cells[2], "10");
        assert_eq!(cells[3], "all");
        assert_eq!(cells[4], "root");
    }
}
