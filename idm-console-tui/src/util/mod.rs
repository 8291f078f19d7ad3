//! Util 层：终端与日志
//!
//!     mod logging;     // 文件日志
//!     mod terminal;    // 终端初始化与恢复
//!
//!
//! logging.rs
//!     init_logging(&log_path())
//!         · 日志写到 <config_dir>/idm-console.log，终端归 TUI 使用
//!         · RUST_LOG 控制级别，默认 info
//!         · core 的 log 宏经 tracing-subscriber 桥接
//!
//!
//! terminal.rs
//!     init_terminal() -> Result<Term>
//!         · enable_raw_mode()
//!         · EnterAlternateScreen / EnableMouseCapture / EnableFocusChange
//!             - 鼠标点击切换行，失去焦点时释放 Shift
//!         · 终端支持时 PushKeyboardEnhancementFlags
//!             - REPORT_EVENT_TYPES：单独收到 Shift 的按下/释放
//!             - REPORT_ALTERNATE_KEYS：`?`、`+` 按字符本身上报
//!
//!     restore_terminal(&mut terminal)
//!         · 推入过增强标志时先 PopKeyboardEnhancementFlags
//!         · disable_raw_mode()
//!         · DisableFocusChange / DisableMouseCapture / LeaveAlternateScreen
//!         · show_cursor()
//!
//!     main.rs 在 app::run 返回后立即调用 restore_terminal，
//!     run 出错时也先恢复终端再返回错误。

mod logging;
mod terminal;

pub use logging::{init_logging, log_path};
pub use terminal::{init_terminal, restore_terminal, Term};
