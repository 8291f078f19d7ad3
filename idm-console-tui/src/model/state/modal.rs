//! 弹窗/对话框状态

use crate::model::domain::EntityKind;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 确认批量删除
    ConfirmDelete {
        kind: EntityKind,
        /// 打开弹窗时的选中快照，确认后删除的就是这些键
        keys: Vec<String>,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 搜索过滤
    Search {
        kind: EntityKind,
        /// 输入的关键字
        input: String,
    },
    /// 批量操作结果（部分失败时显示）
    BatchReport {
        title: String,
        summary: String,
        /// 每个失败条目一行
        failures: Vec<String>,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗
    pub fn show_confirm_delete(&mut self, kind: EntityKind, keys: Vec<String>) {
        self.active = Some(Modal::ConfirmDelete {
            kind,
            keys,
            focus: 0,
        });
    }

    /// 显示搜索弹窗，预填当前关键字
    pub fn show_search(&mut self, kind: EntityKind, current: Option<&str>) {
        self.active = Some(Modal::Search {
            kind,
            input: current.unwrap_or_default().to_string(),
        });
    }

    /// 显示批量操作结果
    pub fn show_batch_report(&mut self, title: &str, summary: String, failures: Vec<String>) {
        self.active = Some(Modal::BatchReport {
            title: title.to_string(),
            summary,
            failures,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
