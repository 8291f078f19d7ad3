//! 弹窗更新逻辑

use super::table::{apply_search, confirm_delete};
use crate::message::ModalMessage;
use crate::model::domain::dispatch;
use crate::model::state::Modal;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Search { .. } => handle_search(app, msg),
        Modal::BatchReport { .. } | Modal::Error { .. } | Modal::Help => {
            handle_simple_modal(app, msg);
        }
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete { ref mut focus, .. }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleDeleteFocus => {
            *focus = 1 - *focus;
        }

        ModalMessage::Confirm => {
            // 关闭弹窗并取出打开时的快照
            let Some(Modal::ConfirmDelete { kind, keys, focus }) = app.modal.active.take() else {
                return;
            };
            if focus == 1 {
                dispatch!(kind, confirm_delete(app, &keys));
            }
        }

        _ => {}
    }
}

/// 处理搜索弹窗
fn handle_search(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Search { ref mut input, .. }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::Input(ch) => {
            input.push(ch);
        }

        ModalMessage::Backspace => {
            input.pop();
        }

        ModalMessage::ClearInput => {
            input.clear();
        }

        ModalMessage::Confirm => {
            let Some(Modal::Search { kind, input }) = app.modal.active.take() else {
                return;
            };
            dispatch!(kind, apply_search(app, &input));
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 只能关闭的弹窗
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
