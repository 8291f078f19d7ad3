//! 内容面板消息
//!
//! 处理内容面板中的操作，如光标移动、行选择、分页、批量操作等

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 光标 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 行选择 ==========
    /// 切换光标行（按住 Shift 时为区间）
    ToggleRow,
    /// 鼠标点击当前页第 n 行
    ClickRow(usize),
    /// 选中当前页所有可选行
    SelectPage,
    /// 取消全部选择
    DeselectAll,

    // ========== 分页 ==========
    NextPage,
    PrevPage,
    /// 增大每页条数
    GrowPageSize,
    /// 减小每页条数
    ShrinkPageSize,

    // ========== 批量操作 ==========
    /// 删除选中项（先弹出确认）
    Delete,
    /// 启用选中项
    Enable,
    /// 禁用选中项
    Disable,

    // ========== 过滤 ==========
    /// 打开搜索弹窗
    Search,
    /// 下一个状态标签页
    NextTab,
    /// 上一个状态标签页
    PrevTab,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
