//! 测试辅助：内存配置 + 小规模目录数据

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::backend::{AppConfig, ConfigService, CoreService};
use crate::model::domain::{HbacRule, Host, IdView, SudoRule};
use crate::model::App;

/// 保存在内存里的配置，测试可读取保存结果
#[derive(Clone, Default)]
pub struct MemoryConfig(Arc<Mutex<AppConfig>>);

impl MemoryConfig {
    pub fn saved(&self) -> AppConfig {
        self.0.lock().unwrap().clone()
    }
}

impl ConfigService for MemoryConfig {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.saved())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        *self.0.lock().unwrap() = config.clone();
        Ok(())
    }
}

/// 25 台主机（第 4 台隐藏）、5 条 HBAC 规则、4 条 sudo 规则、2 个 ID 视图
pub fn backend() -> CoreService {
    let hosts = (0..25)
        .map(|i| {
            if i == 3 {
                Host::new("", "", None, false)
            } else {
                Host::new(&format!("host{i:02}.ipa.test"), "", Some("RHEL 9"), true)
            }
        })
        .collect();
    let hbac = (0..5)
        .map(|i| HbacRule::new(&format!("hbac{i}"), "", i % 2 == 0))
        .collect();
    let sudo = vec![
        SudoRule::new("sudo-a", "", true),
        SudoRule::new("sudo-b", "", true),
        SudoRule::new("sudo-c", "", false),
        SudoRule::new("sudo-d", "", false),
    ];
    let views = vec![
        IdView::new("Default Trust View", "", 0, 0),
        IdView::new("ad-users", "", 3, 12),
    ];
    CoreService::with_data(hosts, hbac, sudo, views).unwrap()
}

pub fn test_app_with(config: MemoryConfig) -> App {
    App::new(backend(), Box::new(config))
}

pub fn test_app() -> App {
    test_app_with(MemoryConfig::default())
}
