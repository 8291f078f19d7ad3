//! 业务领域模型
//!
//! 目录实体（主机、HBAC 规则、sudo 规则、ID 视图）。
//! 每种实体实现 core 的 `Row`，并通过 `TableEntity` 声明表格列和分页方式。

mod host;
mod id_view;
mod rule;

use idm_console_core::{EntityService, Row, SliceMode};

use crate::backend::CoreService;
use crate::model::state::EntityTableState;
use crate::model::App;

pub use host::Host;
pub use id_view::IdView;
pub use rule::{Category, HbacRule, SudoRule};

/// 实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hosts,
    HbacRules,
    SudoRules,
    IdViews,
}

impl EntityKind {
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Hosts,
            EntityKind::HbacRules,
            EntityKind::SudoRules,
            EntityKind::IdViews,
        ]
    }

    /// 列表标题
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Hosts => "Hosts",
            EntityKind::HbacRules => "HBAC Rules",
            EntityKind::SudoRules => "Sudo Rules",
            EntityKind::IdViews => "ID Views",
        }
    }

    /// 单条实体的名称（用于提示文本）
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Hosts => "host",
            EntityKind::HbacRules => "HBAC rule",
            EntityKind::SudoRules => "sudo rule",
            EntityKind::IdViews => "ID view",
        }
    }

    /// 是否有启用/禁用状态（决定是否显示状态标签页）
    pub fn has_status(self) -> bool {
        matches!(self, EntityKind::HbacRules | EntityKind::SudoRules)
    }
}

/// 表格列
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    /// 最小宽度（字符）
    pub width: u16,
}

impl Column {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

/// 可在表格页面中展示的实体
///
/// 把实体类型与它在 `App` 中的表格状态、在 `CoreService` 中的服务绑定起来，
/// 使 update/view 层可以对四种实体共用同一套泛型逻辑。
pub trait TableEntity: Row + Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    /// 主机由服务端分页，其余列表整体拉取后在客户端切片
    const MODE: SliceMode;

    fn columns() -> &'static [Column];

    /// 每列的显示文本（与 `columns()` 一一对应）
    fn cells(&self) -> Vec<String>;

    fn table(app: &App) -> &EntityTableState<Self>;

    fn table_mut(app: &mut App) -> &mut EntityTableState<Self>;

    fn service(backend: &CoreService) -> EntityService<Self>;
}

/// 按实体类型分发到泛型函数
///
/// `dispatch!(kind, f(args))` 展开为对应实体类型的 `f::<T>(args)`。
macro_rules! dispatch {
    ($kind:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $kind {
            $crate::model::domain::EntityKind::Hosts => {
                $func::<$crate::model::domain::Host>($($arg),*)
            }
            $crate::model::domain::EntityKind::HbacRules => {
                $func::<$crate::model::domain::HbacRule>($($arg),*)
            }
            $crate::model::domain::EntityKind::SudoRules => {
                $func::<$crate::model::domain::SudoRule>($($arg),*)
            }
            $crate::model::domain::EntityKind::IdViews => {
                $func::<$crate::model::domain::IdView>($($arg),*)
            }
        }
    };
}

pub(crate) use dispatch;
