//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责数据访问和配置持久化。
//! 通过 idm-console-core 库完成列表查询和批量操作。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 核心服务入口（运行时 + 各实体服务）
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod seed;               // 演示目录数据
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有一个 tokio 运行时和四个 `EntityService`：
//!         - hosts()          主机（服务端分页）
//!         - hbac_rules()     HBAC 规则（整表拉取，客户端切片）
//!         - sudo_rules()     sudo 规则（整表拉取，客户端切片）
//!         - id_views()       ID 视图（整表拉取，客户端切片）
//!
//!     UI 主循环是同步的，Update 层通过 `runtime().block_on(...)` 调用服务。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在确认删除弹窗中选择"删除"
//!         ↓
//!     Update 层处理 ModalMessage::Confirm
//!         ↓
//!     EntityService::delete_many(选中快照)（并发执行）
//!         ↓
//!     TableController::mark_deleted()  → 选择被清空
//!         ↓
//!     EntityService::load(table)       → 重新拉取，必要时修正页码
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;
mod seed;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
