//! 导航更新逻辑

use super::table::refresh;
use crate::message::NavigationMessage;
use crate::model::domain::dispatch;
use crate::model::{App, FocusPanel, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(page) = app.navigation.current_page() {
                open_page(app, page);
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}

/// 进入页面并把焦点移到内容面板
///
/// 进入实体页面时重新拉取，选择从空开始。
fn open_page(app: &mut App, page: Page) {
    app.go_to(page);
    if page != Page::Home {
        app.focus = FocusPanel::Content;
    }
    if let Page::Entities(kind) = page {
        dispatch!(kind, refresh(app));
    }
}
