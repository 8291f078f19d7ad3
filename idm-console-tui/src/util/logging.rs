//! 日志初始化
//!
//! TUI 占用了标准输出，日志只能写文件：`<config_dir>/idm-console.log`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。core 里的 `log` 宏经 tracing-log 桥接进来。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::backend::config_dir;

const LOG_FILE: &str = "idm-console.log";

/// 默认日志文件路径
pub fn log_path() -> PathBuf {
    config_dir().join(LOG_FILE)
}

/// 初始化文件日志
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}
