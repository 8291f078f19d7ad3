//! 内容面板更新逻辑
//!
//! 实体页面交给 `table::update` 的泛型实现，设置页面在这里处理

use super::table::{change_page_size, update as table_update};
use crate::message::ContentMessage;
use crate::model::domain::{dispatch, EntityKind};
use crate::model::state::SettingItem;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::set_theme;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Entities(kind) => {
            // ClickRow 来自鼠标，焦点随之移到内容面板
            if matches!(msg, ContentMessage::ClickRow(_)) {
                app.focus = FocusPanel::Content;
            }
            dispatch!(kind, table_update(app, msg));
        }
        Page::Settings => update_settings(app, &msg),
        Page::Home => {}
    }
}

// ========== 设置页面处理 ==========

fn update_settings(app: &mut App, msg: &ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {
            if *msg == ContentMessage::TogglePrev {
                app.settings.toggle_prev();
            } else {
                app.settings.toggle_next();
            }
            apply_setting(app);
        }
        _ => {}
    }
}

/// 让刚修改的设置项生效并保存
fn apply_setting(app: &mut App) {
    match app.settings.current_item() {
        Some(SettingItem::Theme) => set_theme(app.settings.theme),
        Some(SettingItem::PageSize) => {
            let size = app.settings.page_size;
            for &kind in EntityKind::all() {
                dispatch!(kind, change_page_size(app, size));
            }
        }
        None => return,
    }
    app.save_config();
}
