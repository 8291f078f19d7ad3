//! 演示目录数据
//!
//! 没有连接真实的 IdM 服务器时，内存数据源以这些条目启动。

use crate::model::domain::{HbacRule, Host, IdView, SudoRule};
use crate::model::domain::Category::{All, Members};

const DOMAIN: &str = "ipa.example.test";

/// 主机：按角色批量生成，另含两条不可选的占位行
pub fn hosts() -> Vec<Host> {
    const ROLES: &[(&str, &str, &str)] = &[
        ("web", "Frontend web server", "RHEL 9.4"),
        ("db", "PostgreSQL node", "RHEL 9.4"),
        ("app", "Application server", "Fedora 40"),
        ("ldap", "Replica", "RHEL 9.4"),
        ("mail", "Mail relay", "Debian 12"),
        ("build", "CI runner", "Fedora 40"),
    ];

    let mut hosts = vec![Host::new(
        &format!("ipa01.{DOMAIN}"),
        "Primary IdM server",
        Some("RHEL 9.4"),
        true,
    )];
    for (role, description, os) in ROLES {
        for i in 1..=9 {
            hosts.push(Host::new(
                &format!("{role}{i:02}.{DOMAIN}"),
                description,
                Some(*os),
                i % 4 != 0,
            ));
        }
    }
    // 权限不足时目录返回的隐藏条目
    hosts.insert(7, Host::new("", "", None, false));
    hosts.insert(31, Host::new("", "", None, false));
    hosts
}

pub fn hbac_rules() -> Vec<HbacRule> {
    vec![
        HbacRule::new("allow_all", "Allow all users to access any host from any host", false)
            .with_categories(All, All, All),
        HbacRule::new("allow_systemd-user", "Allow pam_systemd to run user@.service", true)
            .with_categories(All, All, Members(1)),
        HbacRule::new("admins_ssh", "Administrators may log in everywhere", true)
            .with_categories(Members(1), All, Members(2)),
        HbacRule::new("web_deploy", "Deploy account on web servers", true)
            .with_categories(Members(2), Members(9), Members(1)),
        HbacRule::new("db_operators", "DBA shell access", true)
            .with_categories(Members(3), Members(9), Members(2)),
        HbacRule::new("ldap_replica_admin", "Replica maintenance", true)
            .with_categories(Members(2), Members(9), Members(1)),
        HbacRule::new("build_agents", "CI service accounts", false)
            .with_categories(Members(1), Members(9), Members(1)),
        HbacRule::new("mail_support", "Support staff on mail relays", true)
            .with_categories(Members(4), Members(9), Members(1)),
        HbacRule::new("contractors_ftp", "Legacy contractor FTP access", false)
            .with_categories(Members(6), Members(2), Members(1)),
        HbacRule::new("helpdesk_console", "Helpdesk console login", true)
            .with_categories(Members(8), Members(3), Members(1)),
        HbacRule::new("audit_readonly", "Auditors with read-only sessions", true)
            .with_categories(Members(2), All, Members(1)),
        HbacRule::new("lab_open", "Lab machines, anyone", false)
            .with_categories(All, Members(5), All),
    ]
}

pub fn sudo_rules() -> Vec<SudoRule> {
    vec![
        SudoRule::new("admins_all", "Full sudo for administrators", true)
            .with_order(1)
            .with_commands(All, Some("root")),
        SudoRule::new("web_restart", "Restart httpd/nginx", true)
            .with_order(10)
            .with_commands(Members(4), Some("root")),
        SudoRule::new("db_backup", "Run backup scripts as postgres", true)
            .with_order(20)
            .with_commands(Members(2), Some("postgres")),
        SudoRule::new("helpdesk_passwd", "Reset local passwords", false)
            .with_commands(Members(1), Some("root")),
        SudoRule::new("build_podman", "Podman for CI", true)
            .with_order(30)
            .with_commands(Members(3), None),
        SudoRule::new("mail_queue", "Inspect mail queue", true)
            .with_commands(Members(2), Some("postfix")),
        SudoRule::new("legacy_ops", "Old operations rule", false)
            .with_order(99)
            .with_commands(All, None),
        SudoRule::new("audit_journal", "Read the journal", true)
            .with_commands(Members(1), None),
    ]
}

pub fn id_views() -> Vec<IdView> {
    vec![
        IdView::new("Default Trust View", "Default Trust View for AD users", 0, 0),
        IdView::new("linux_legacy", "Old UID ranges for NFS", 9, 42),
        IdView::new("build_farm", "Home directories on local disk", 9, 6),
        IdView::new("mail_relays", "Shell override for service users", 9, 3),
        IdView::new("lab", "", 0, 0),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use idm_console_core::Row;

    #[test]
    fn seed_keys_are_unique() {
        let hosts = hosts();
        let keys: HashSet<&str> = hosts
            .iter()
            .filter(|h| h.is_selectable())
            .map(Row::key)
            .collect();
        assert_eq!(keys.len(), hosts.iter().filter(|h| h.is_selectable()).count());
        assert_eq!(hosts.iter().filter(|h| !h.is_selectable()).count(), 2);
    }
}
