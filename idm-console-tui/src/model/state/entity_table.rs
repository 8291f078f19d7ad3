//! 实体表格页面状态
//!
//! 选择、分页、过滤全部由 core 的 `TableController` 管理；
//! 这里只额外维护键盘光标（当前页内的行索引）。

use idm_console_core::{Row, ShiftHandle, SliceMode, TableController};

/// 可选的每页条数
pub const PAGE_SIZES: &[u32] = &[10, 20, 50, 100];

/// 下一个更大的每页条数（已是最大则不变）
pub fn next_page_size(current: u32) -> u32 {
    PAGE_SIZES
        .iter()
        .copied()
        .find(|&size| size > current)
        .unwrap_or(current)
}

/// 下一个更小的每页条数（已是最小则不变）
pub fn prev_page_size(current: u32) -> u32 {
    PAGE_SIZES
        .iter()
        .rev()
        .copied()
        .find(|&size| size < current)
        .unwrap_or(current)
}

/// 状态标签页（仅规则页面）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Enabled,
    Disabled,
}

impl StatusTab {
    pub fn all() -> &'static [StatusTab] {
        &[StatusTab::All, StatusTab::Enabled, StatusTab::Disabled]
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::Enabled => "Enabled",
            StatusTab::Disabled => "Disabled",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusTab::All => StatusTab::Enabled,
            StatusTab::Enabled => StatusTab::Disabled,
            StatusTab::Disabled => StatusTab::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StatusTab::All => StatusTab::Disabled,
            StatusTab::Enabled => StatusTab::All,
            StatusTab::Disabled => StatusTab::Enabled,
        }
    }

    /// 对应的列表过滤条件
    pub fn filter(self) -> Option<bool> {
        match self {
            StatusTab::All => None,
            StatusTab::Enabled => Some(true),
            StatusTab::Disabled => Some(false),
        }
    }

    pub fn from_filter(filter: Option<bool>) -> Self {
        match filter {
            None => StatusTab::All,
            Some(true) => StatusTab::Enabled,
            Some(false) => StatusTab::Disabled,
        }
    }
}

/// 实体表格页面状态
#[derive(Debug)]
pub struct EntityTableState<T> {
    pub table: TableController<T>,
    /// 光标所在行（当前页内索引）
    pub cursor: usize,
    /// 最近一次加载失败的错误信息
    pub error: Option<String>,
}

impl<T: Row> EntityTableState<T> {
    pub fn new(mode: SliceMode, per_page: u32, shift: ShiftHandle) -> Self {
        Self {
            table: TableController::new(mode, per_page, shift),
            cursor: 0,
            error: None,
        }
    }

    /// 当前页显示的行数
    pub fn visible_len(&self) -> usize {
        self.table.visible_rows().len()
    }

    /// 当前标签页
    pub fn tab(&self) -> StatusTab {
        StatusTab::from_filter(self.table.status_filter())
    }

    // ========== 光标 ==========

    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.visible_len() {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    /// 行数变化后把光标拉回范围内
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }

    /// 光标所在行
    pub fn cursor_row(&self) -> Option<&T> {
        self.table.visible_rows().get(self.cursor)
    }

    // ========== 选择 ==========

    /// 切换光标行（按住 Shift 时从锚点扩展为区间）
    pub fn toggle_cursor(&mut self) {
        self.table.toggle_visible_auto(self.cursor);
    }

    /// 鼠标点击第 `index` 行：移动光标并切换该行
    pub fn click(&mut self, index: usize) {
        if index >= self.visible_len() {
            return;
        }
        self.cursor = index;
        self.table.toggle_visible_auto(index);
    }
}
