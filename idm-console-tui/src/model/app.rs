//! 应用主状态结构

use idm_console_core::ShiftTracker;

use super::domain::{EntityKind, HbacRule, Host, IdView, SudoRule, TableEntity};
use super::{
    EntityTableState, FocusPanel, ModalState, NavigationState, Page, SettingsState, TableHitArea,
};
use crate::backend::{AppConfig, ConfigService, CoreService};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// Shift 键状态，由 Event 层更新，所有表格只读共享
    pub shift: ShiftTracker,

    /// 业务服务
    pub backend: CoreService,

    /// 配置持久化
    pub config: Box<dyn ConfigService>,

    // === 各页面状态 ===
    pub hosts: EntityTableState<Host>,
    pub hbac_rules: EntityTableState<HbacRule>,
    pub sudo_rules: EntityTableState<SudoRule>,
    pub id_views: EntityTableState<IdView>,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 表格鼠标命中区域（View 写入，Event 读取）
    pub hit_area: TableHitArea,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 读取配置失败时使用默认配置；数据由 `update::init` 加载。
    pub fn new(backend: CoreService, config: Box<dyn ConfigService>) -> Self {
        let loaded = config.load().unwrap_or_else(|e| {
            log::warn!("failed to load config, using defaults: {e:#}");
            AppConfig::default()
        });

        let shift = ShiftTracker::new();
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            hosts: table_state(&shift, loaded.page_size),
            hbac_rules: table_state(&shift, loaded.page_size),
            sudo_rules: table_state(&shift, loaded.page_size),
            id_views: table_state(&shift, loaded.page_size),
            shift,
            backend,
            config,
            settings: SettingsState::new(loaded.theme, loaded.page_size),
            modal: ModalState::new(),
            hit_area: TableHitArea::default(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前页面的实体类型
    pub fn current_kind(&self) -> Option<EntityKind> {
        self.current_page.entity_kind()
    }

    /// 切换页面
    pub fn go_to(&mut self, page: Page) {
        if page != self.current_page {
            self.current_page = page;
            self.hit_area.reset();
        }
        self.clear_status();
    }

    /// 保存当前设置
    pub fn save_config(&mut self) {
        let config = AppConfig {
            theme: self.settings.theme,
            page_size: self.settings.page_size,
        };
        if let Err(e) = self.config.save(&config) {
            log::error!("failed to save config: {e:#}");
            self.set_status(format!("Failed to save settings: {e}"));
        }
    }
}

fn table_state<T: TableEntity>(shift: &ShiftTracker, page_size: u32) -> EntityTableState<T> {
    EntityTableState::new(T::MODE, page_size, shift.handle())
}
