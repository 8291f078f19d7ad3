//! IdM Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! IdM Console TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志（终端被 TUI 占用）
//!     CoreService::new()      // 目录数据源 + tokio runtime
//!     model::App::new()       // 创建 APP 实例，读取配置
//!     update::init()          // 应用主题，加载所有表格
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen , EnableMouseCapture , ..)?
//!             - 切换到 备用屏幕，开启鼠标事件
//!         · 终端支持时推入 keyboard enhancement，以便收到 Shift 的按下/释放
//!         · 返回 Terminal 对象
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::Result;

use backend::{CoreService, LocalConfigService};
use util::{init_logging, init_terminal, log_path, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（失败不影响运行）
    if let Err(e) = init_logging(&log_path()) {
        eprintln!("logging disabled: {e:#}");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "idm-console starting");

    // 2. 创建应用实例
    let backend = CoreService::new()?;
    let mut app = model::App::new(backend, Box::new(LocalConfigService::new()));
    update::init(&mut app);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(()) => tracing::info!("idm-console exited"),
        Err(e) => tracing::error!("exited with error: {e:#}"),
    }
    result
}
