//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ idm-console-core  │           │
//！│                                           │  TableController  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（设置页 + 分发到 table）
//!         mod modal;              // 弹窗子消息处理
//!         mod table;              // 实体表格的泛型逻辑
//!
//!         pub fn init(app: &mut App) {...}
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 实体表格（table.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     四种实体共用一套泛型函数：
//!
//!         pub fn update<T: TableEntity>(app: &mut App, msg: ContentMessage)
//!         pub fn reload<T: TableEntity>(app: &mut App)
//!
//!     调用处通过 dispatch! 宏按 EntityKind 选择 T：
//!
//!         dispatch!(kind, reload(app));
//!             ↓ 展开为
//!         match kind {
//!             EntityKind::Hosts => reload::<Host>(app),
//!             EntityKind::HbacRules => reload::<HbacRule>(app),
//!             ...
//!         }
//!
//!     数据拉取在 CoreService 的 current-thread runtime 上 block_on 完成，
//!     TableController 用 fetch ticket 丢弃过期响应。
//!
//!     返回 true 的分页操作（服务端分页）需要重新拉取：
//!
//!         if state.table.next_page() {
//!             reload::<T>(app);
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗更新（modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         - handle_confirm_delete()   确认删除：Confirm 时删除弹窗里的快照键
//!         - handle_search()           搜索：Confirm 时 set_filter 并重新拉取
//!         - handle_simple_modal()     帮助、错误、批量结果
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;
mod table;

use table::{refresh, reload};

use crate::message::AppMessage;
use crate::model::domain::{dispatch, EntityKind};
use crate::model::{App, FocusPanel};
use crate::view::theme::set_theme;

/// 启动时应用主题并加载所有表格
pub fn init(app: &mut App) {
    set_theme(app.settings.theme);
    for &kind in EntityKind::all() {
        dispatch!(kind, reload(app));
    }
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗；否则回到导航面板
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.focus = FocusPanel::Navigation;
            }
            app.clear_status();
        }

        AppMessage::Refresh => {
            if let Some(kind) = app.current_kind() {
                dispatch!(kind, refresh(app));
                app.set_status(format!("{} refreshed", kind.title()));
            } else {
                for &kind in EntityKind::all() {
                    dispatch!(kind, reload(app));
                }
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, ModalMessage};
    use crate::model::domain::{HbacRule, Host, IdView, SudoRule, TableEntity};
    use crate::model::state::Modal;
    use crate::model::Page;
    use crate::test_support::{test_app, test_app_with, MemoryConfig};
    use idm_console_core::PageSelection;

    fn open(kind: EntityKind) -> App {
        let mut app = test_app();
        init(&mut app);
        app.go_to(Page::Entities(kind));
        app.focus = FocusPanel::Content;
        app
    }

    fn send(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn keys<T: TableEntity>(app: &App) -> Vec<String> {
        T::table(app).table.selection_snapshot()
    }

    fn confirm_delete(app: &mut App) {
        update(app, AppMessage::Modal(ModalMessage::ToggleDeleteFocus));
        update(app, AppMessage::Modal(ModalMessage::Confirm));
    }

    #[test]
    fn init_loads_every_table() {
        let mut app = test_app();
        init(&mut app);
        assert_eq!(app.hosts.visible_len(), 10);
        assert_eq!(app.hosts.table.pagination().item_count(), 25);
        assert_eq!(app.hbac_rules.table.rows().len(), 5);
        assert_eq!(app.sudo_rules.table.rows().len(), 4);
        assert_eq!(app.id_views.table.rows().len(), 2);
    }

    #[test]
    fn shift_click_then_delete_removes_range() {
        let mut app = open(EntityKind::HbacRules);
        send(&mut app, ContentMessage::ClickRow(0));
        app.shift.press();
        send(&mut app, ContentMessage::ClickRow(2));
        app.shift.release();
        assert_eq!(keys::<HbacRule>(&app), ["hbac0", "hbac1", "hbac2"]);

        send(&mut app, ContentMessage::Delete);
        let Some(Modal::ConfirmDelete { keys: snapshot, .. }) = &app.modal.active else {
            panic!("expected delete confirmation");
        };
        assert_eq!(snapshot.len(), 3);

        confirm_delete(&mut app);
        assert!(!app.modal.is_open());
        assert_eq!(app.hbac_rules.table.rows().len(), 2);
        assert!(app.hbac_rules.table.selection().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Deleted 3 HBAC rules"));
    }

    #[test]
    fn cancelled_delete_keeps_rows_and_selection() {
        let mut app = open(EntityKind::SudoRules);
        send(&mut app, ContentMessage::ToggleRow);
        send(&mut app, ContentMessage::Delete);
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(!app.modal.is_open());
        assert_eq!(app.sudo_rules.table.rows().len(), 4);
        assert_eq!(keys::<SudoRule>(&app), ["sudo-a"]);
    }

    #[test]
    fn delete_without_selection_shows_hint() {
        let mut app = open(EntityKind::HbacRules);
        send(&mut app, ContentMessage::Delete);
        assert!(!app.modal.is_open());
        assert_eq!(app.status_message.as_deref(), Some("Nothing selected"));
    }

    #[test]
    fn server_page_change_clears_selection() {
        let mut app = open(EntityKind::Hosts);
        send(&mut app, ContentMessage::ToggleRow);
        assert_eq!(keys::<Host>(&app).len(), 1);

        send(&mut app, ContentMessage::NextPage);
        assert_eq!(app.hosts.table.pagination().page(), 2);
        assert!(app.hosts.table.selection().is_empty());
        assert_eq!(
            app.hosts.cursor_row().map(|h| h.fqdn.as_str()),
            Some("host10.ipa.test")
        );
    }

    #[test]
    fn hidden_host_is_never_selected() {
        let mut app = open(EntityKind::Hosts);
        send(&mut app, ContentMessage::ClickRow(3));
        assert!(app.hosts.table.selection().is_empty());

        send(&mut app, ContentMessage::SelectPage);
        assert_eq!(keys::<Host>(&app).len(), 9);
        assert_eq!(app.hosts.table.page_selection(), PageSelection::All);

        // 再按一次取消本页
        send(&mut app, ContentMessage::SelectPage);
        assert!(app.hosts.table.selection().is_empty());
    }

    #[test]
    fn emptied_last_page_falls_back() {
        let mut app = open(EntityKind::Hosts);
        send(&mut app, ContentMessage::NextPage);
        send(&mut app, ContentMessage::NextPage);
        assert_eq!(app.hosts.visible_len(), 5);

        send(&mut app, ContentMessage::SelectPage);
        send(&mut app, ContentMessage::Delete);
        confirm_delete(&mut app);

        assert_eq!(app.hosts.table.pagination().page(), 2);
        assert_eq!(app.hosts.visible_len(), 10);
        assert_eq!(app.hosts.table.pagination().item_count(), 20);
    }

    #[test]
    fn tab_switch_filters_and_resets_selection() {
        let mut app = open(EntityKind::SudoRules);
        send(&mut app, ContentMessage::ToggleRow);
        send(&mut app, ContentMessage::NextTab);

        assert!(app.sudo_rules.table.selection().is_empty());
        let names: Vec<&str> = app
            .sudo_rules
            .table
            .visible_rows()
            .iter()
            .map(|r| r.cn.as_str())
            .collect();
        assert_eq!(names, ["sudo-a", "sudo-b"]);

        send(&mut app, ContentMessage::PrevTab);
        assert_eq!(app.sudo_rules.visible_len(), 4);
    }

    #[test]
    fn mixed_selection_blocks_status_actions() {
        let mut app = open(EntityKind::SudoRules);
        send(&mut app, ContentMessage::ClickRow(0));
        send(&mut app, ContentMessage::ClickRow(2));
        send(&mut app, ContentMessage::Disable);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Cannot disable the current selection")
        );
        assert!(app.sudo_rules.table.rows()[0].enabled);
    }

    #[test]
    fn disable_homogeneous_selection() {
        let mut app = open(EntityKind::SudoRules);
        send(&mut app, ContentMessage::ClickRow(0));
        send(&mut app, ContentMessage::ClickRow(1));
        send(&mut app, ContentMessage::Disable);

        assert_eq!(app.status_message.as_deref(), Some("Disabled 2 sudo rules"));
        assert!(app.sudo_rules.table.rows().iter().all(|r| !r.enabled));
        // 选中的行现在全部禁用，只剩启用可用
        let state = app.sudo_rules.table.bulk_state();
        assert!(!state.enable_disabled);
        assert!(state.disable_disabled);
    }

    #[test]
    fn hosts_have_no_status_actions() {
        let mut app = open(EntityKind::Hosts);
        send(&mut app, ContentMessage::ToggleRow);
        send(&mut app, ContentMessage::Enable);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Cannot enable the current selection")
        );
    }

    #[test]
    fn search_narrows_server_paged_list() {
        let mut app = open(EntityKind::Hosts);
        send(&mut app, ContentMessage::NextPage);
        send(&mut app, ContentMessage::Search);
        for ch in "host0".chars() {
            update(&mut app, AppMessage::Modal(ModalMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(!app.modal.is_open());
        assert_eq!(app.hosts.table.keyword(), Some("host0"));
        assert_eq!(app.hosts.table.pagination().page(), 1);
        assert_eq!(app.hosts.table.pagination().item_count(), 9);
    }

    #[test]
    fn builtin_view_is_skipped() {
        let mut app = open(EntityKind::IdViews);
        send(&mut app, ContentMessage::SelectPage);
        assert_eq!(keys::<IdView>(&app), ["ad-users"]);
    }

    #[test]
    fn page_size_setting_applies_and_persists() {
        let config = MemoryConfig::default();
        let mut app = test_app_with(config.clone());
        init(&mut app);
        app.go_to(Page::Settings);
        app.settings.selected_index = 1;

        send(&mut app, ContentMessage::ToggleNext);
        assert_eq!(app.hosts.table.pagination().per_page(), 20);
        assert_eq!(app.hosts.visible_len(), 20);
        assert_eq!(app.hbac_rules.table.pagination().per_page(), 20);
        assert_eq!(config.saved().page_size, 20);
    }

    #[test]
    fn refresh_clears_selection() {
        let mut app = open(EntityKind::HbacRules);
        send(&mut app, ContentMessage::ToggleRow);
        update(&mut app, AppMessage::Refresh);
        assert!(app.hbac_rules.table.selection().is_empty());
    }

    #[test]
    fn disabling_on_enabled_tab_drops_vanished_rows_from_selection() {
        let mut app = open(EntityKind::SudoRules);
        send(&mut app, ContentMessage::NextTab);
        send(&mut app, ContentMessage::ClickRow(0));
        send(&mut app, ContentMessage::ClickRow(1));
        send(&mut app, ContentMessage::Disable);

        assert_eq!(app.status_message.as_deref(), Some("Disabled 2 sudo rules"));
        assert_eq!(app.sudo_rules.visible_len(), 0);
        assert!(app.sudo_rules.table.selection().is_empty());
        assert!(app.sudo_rules.table.bulk_state().delete_disabled);
        assert_eq!(app.sudo_rules.table.selected_on_page(), 0);
    }

    #[test]
    fn shift_space_range_can_end_on_hidden_host() {
        let mut app = open(EntityKind::Hosts);
        send(&mut app, ContentMessage::ClickRow(1));
        send(&mut app, ContentMessage::SelectNext);
        send(&mut app, ContentMessage::SelectNext);

        app.shift.press();
        send(&mut app, ContentMessage::ToggleRow);
        app.shift.release();

        assert_eq!(keys::<Host>(&app), ["host01.ipa.test", "host02.ipa.test"]);
        assert_eq!(app.status_message, None);

        // 不按 Shift 时仍然提示
        send(&mut app, ContentMessage::ToggleRow);
        assert_eq!(
            app.status_message.as_deref(),
            Some("This host cannot be selected")
        );
    }
}
