//! 配置服务
//!
//! 配置保存在 `<config_dir>/idm-console/config.json`。
//! 文件不存在时使用默认值；文件损坏时记录警告并使用默认值。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use idm_console_core::types::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

use crate::model::state::{Theme, PAGE_SIZES};

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("idm-console")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    /// 表格默认每页条数
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// 把不在可选范围内的每页条数改回默认值
    fn sanitized(mut self) -> Self {
        if !PAGE_SIZES.contains(&self.page_size) {
            log::warn!(
                "unsupported page size {} in config, using {DEFAULT_PAGE_SIZE}",
                self.page_size
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config.sanitized()),
            Err(e) => {
                log::warn!("ignoring malformed config {}: {e}", self.path.display());
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::debug!("config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            page_size: 50,
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let service = LocalConfigService::with_path(path);
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn unknown_page_size_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme":"light","pageSize":7}"#).unwrap();
        let config = LocalConfigService::with_path(path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
