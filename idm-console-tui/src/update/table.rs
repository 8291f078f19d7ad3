//! 实体表格的泛型更新逻辑
//!
//! 四种实体共用这里的函数，由 `dispatch!` 按 `EntityKind` 选择类型参数。

use idm_console_core::types::{BatchActionResult, BulkAction};
use idm_console_core::{FetchOutcome, PageSelection, Row};

use crate::message::ContentMessage;
use crate::model::domain::TableEntity;
use crate::model::state::{next_page_size, prev_page_size};
use crate::model::App;

/// 按当前查询重新拉取数据
///
/// 服务端分页的页码被收缩时 `EntityService::load` 会再拉一次。
pub fn reload<T: TableEntity>(app: &mut App) {
    let service = T::service(&app.backend);
    let runtime = app.backend.runtime();
    let state = T::table_mut(app);

    match runtime.block_on(service.load(&mut state.table)) {
        Ok(outcome) => {
            if outcome == FetchOutcome::Stale {
                log::debug!("{} reload superseded", T::KIND.noun());
            }
            state.error = None;
        }
        Err(e) => {
            state.error = Some(e.to_string());
        }
    }
    state.clamp_cursor();
}

/// 显式刷新：先清空选择再拉取
pub fn refresh<T: TableEntity>(app: &mut App) {
    T::table_mut(app).table.request_refresh();
    reload::<T>(app);
}

/// 处理表格页面的内容消息
pub fn update<T: TableEntity>(app: &mut App, msg: ContentMessage) {
    let shift_held = app.shift.is_held();
    let state = T::table_mut(app);
    match msg {
        ContentMessage::SelectPrevious => state.select_previous(),
        ContentMessage::SelectNext => state.select_next(),
        ContentMessage::SelectFirst => state.select_first(),
        ContentMessage::SelectLast => state.select_last(),

        ContentMessage::ToggleRow => {
            // Shift+Space 可以以不可选行为区间终点
            if !shift_held && state.cursor_row().is_some_and(|row| !row.is_selectable()) {
                app.set_status(format!("This {} cannot be selected", T::KIND.noun()));
            } else {
                state.toggle_cursor();
            }
        }
        ContentMessage::ClickRow(index) => state.click(index),
        ContentMessage::SelectPage => {
            // 整页已选中时再按一次取消本页
            let selecting = state.table.page_selection() != PageSelection::All;
            state.table.select_page(selecting);
        }
        ContentMessage::DeselectAll => state.table.select_all(false),

        ContentMessage::NextPage => {
            if state.table.next_page() {
                reload::<T>(app);
            }
        }
        ContentMessage::PrevPage => {
            if state.table.prev_page() {
                reload::<T>(app);
            }
        }
        ContentMessage::GrowPageSize | ContentMessage::ShrinkPageSize => {
            let current = state.table.pagination().per_page();
            let size = if msg == ContentMessage::GrowPageSize {
                next_page_size(current)
            } else {
                prev_page_size(current)
            };
            change_page_size::<T>(app, size);
        }

        ContentMessage::Delete => request_delete::<T>(app),
        ContentMessage::Enable => set_enabled::<T>(app, true),
        ContentMessage::Disable => set_enabled::<T>(app, false),

        ContentMessage::Search => {
            let keyword = state.table.keyword().map(str::to_string);
            app.modal.show_search(T::KIND, keyword.as_deref());
        }
        ContentMessage::NextTab | ContentMessage::PrevTab => {
            if !T::KIND.has_status() {
                return;
            }
            let tab = if msg == ContentMessage::NextTab {
                state.tab().next()
            } else {
                state.tab().prev()
            };
            if state.table.set_tab(tab.filter()) {
                reload::<T>(app);
                app.set_status(format!("{}: {}", T::KIND.title(), tab.label()));
            }
        }

        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

/// 修改每页条数，回到第一页
pub fn change_page_size<T: TableEntity>(app: &mut App, size: u32) {
    let state = T::table_mut(app);
    if state.table.on_per_page_change(size, 1) {
        reload::<T>(app);
    } else {
        state.clamp_cursor();
    }
}

/// 应用搜索关键字
pub fn apply_search<T: TableEntity>(app: &mut App, keyword: &str) {
    let keyword = Some(keyword.trim().to_string());
    if T::table_mut(app).table.set_filter(keyword) {
        reload::<T>(app);
    }
}

/// 删除前先拍下选中快照，确认弹窗里显示并删除的就是这些键
fn request_delete<T: TableEntity>(app: &mut App) {
    let table = &T::table(app).table;
    if !table.bulk_state().is_allowed(BulkAction::Delete) {
        app.set_status("Nothing selected");
        return;
    }
    let keys = table.selection_snapshot();
    app.modal.show_confirm_delete(T::KIND, keys);
}

/// 确认删除
pub fn confirm_delete<T: TableEntity>(app: &mut App, keys: &[String]) {
    let service = T::service(&app.backend);
    match app.backend.block_on(service.delete_many(keys)) {
        Ok(result) => {
            // 全部或部分成功都视为删除完成
            if result.success_count > 0 {
                T::table_mut(app).table.mark_deleted();
            }
            reload::<T>(app);
            report::<T>(app, &result);
        }
        Err(e) => {
            log::error!("delete {} failed: {e}", T::KIND.noun());
            app.modal.show_error("Delete failed", &e.to_string());
        }
    }
}

/// 批量启用/禁用
fn set_enabled<T: TableEntity>(app: &mut App, enabled: bool) {
    let action = if enabled {
        BulkAction::Enable
    } else {
        BulkAction::Disable
    };
    let table = &T::table(app).table;
    if !table.bulk_state().is_allowed(action) {
        app.set_status(format!("Cannot {} the current selection", action.as_str()));
        return;
    }
    let keys = table.selection_snapshot();

    let service = T::service(&app.backend);
    match app.backend.block_on(service.set_enabled_many(&keys, enabled)) {
        Ok(result) => {
            reload::<T>(app);
            report::<T>(app, &result);
        }
        Err(e) => {
            log::error!("{} {} failed: {e}", action.as_str(), T::KIND.noun());
            app.modal.show_error("Bulk action failed", &e.to_string());
        }
    }
}

/// 全部成功写状态栏，有失败时弹出结果
fn report<T: TableEntity>(app: &mut App, result: &BatchActionResult) {
    let verb = match result.action {
        BulkAction::Delete => "Deleted",
        BulkAction::Enable => "Enabled",
        BulkAction::Disable => "Disabled",
    };
    let summary = format!("{verb} {}", count_label(result.success_count, T::KIND.noun()));

    if result.is_complete_success() {
        app.set_status(summary);
        return;
    }

    let failures = result
        .failures
        .iter()
        .map(|f| format!("{}: {}", f.key, f.reason))
        .collect();
    app.modal.show_batch_report(
        &format!("{} {}", verb, T::KIND.title()),
        format!("{summary}, {} failed", result.failed_count),
        failures,
    );
}

/// "1 host" / "3 hosts"
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
