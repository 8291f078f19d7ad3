//! 核心服务
//!
//! 封装 idm-console-core 的实体服务，
//! 提供给 TUI 层使用的统一接口

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use idm_console_core::{EntityService, InMemoryEntitySource};
use tokio::runtime::{Builder, Runtime};

use super::seed;
use crate::model::domain::{HbacRule, Host, IdView, SudoRule};

/// TUI 核心服务
///
/// 持有异步运行时和四种实体的服务实例。UI 主循环是同步的，
/// 所有服务调用都经由 `block_on` 在运行时上完成。
pub struct CoreService {
    runtime: Arc<Runtime>,
    hosts: EntityService<Host>,
    hbac_rules: EntityService<HbacRule>,
    sudo_rules: EntityService<SudoRule>,
    id_views: EntityService<IdView>,
}

impl CoreService {
    /// 创建核心服务实例（使用内置的演示目录数据）
    pub fn new() -> Result<Self> {
        Self::with_data(
            seed::hosts(),
            seed::hbac_rules(),
            seed::sudo_rules(),
            seed::id_views(),
        )
    }

    /// 以给定数据创建内存数据源
    pub fn with_data(
        hosts: Vec<Host>,
        hbac_rules: Vec<HbacRule>,
        sudo_rules: Vec<SudoRule>,
        id_views: Vec<IdView>,
    ) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        log::info!(
            "directory loaded: {} hosts, {} HBAC rules, {} sudo rules, {} ID views",
            hosts.len(),
            hbac_rules.len(),
            sudo_rules.len(),
            id_views.len()
        );

        Ok(Self {
            runtime: Arc::new(runtime),
            hosts: EntityService::new(Arc::new(InMemoryEntitySource::new("host", hosts))),
            hbac_rules: EntityService::new(Arc::new(InMemoryEntitySource::new(
                "hbacrule", hbac_rules,
            ))),
            sudo_rules: EntityService::new(Arc::new(InMemoryEntitySource::new(
                "sudorule", sudo_rules,
            ))),
            id_views: EntityService::new(Arc::new(InMemoryEntitySource::new(
                "idview", id_views,
            ))),
        })
    }

    /// 运行时句柄（调用方可在持有 `&mut App` 时使用）
    pub fn runtime(&self) -> Arc<Runtime> {
        Arc::clone(&self.runtime)
    }

    /// 在运行时上阻塞执行
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    // ========== 实体服务 ==========

    pub fn hosts(&self) -> EntityService<Host> {
        self.hosts.clone()
    }

    pub fn hbac_rules(&self) -> EntityService<HbacRule> {
        self.hbac_rules.clone()
    }

    pub fn sudo_rules(&self) -> EntityService<SudoRule> {
        self.sudo_rules.clone()
    }

    pub fn id_views(&self) -> EntityService<IdView> {
        self.id_views.clone()
    }
}
