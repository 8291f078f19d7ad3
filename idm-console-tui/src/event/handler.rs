//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton,
    MouseEvent, MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
///
/// Shift 的按住状态在这里直接写入 `App::shift`，
/// 后续的 Space / 鼠标点击据此决定是否做区间选择。
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 失去焦点时收不到 Shift 的释放事件
        Event::FocusLost => {
            app.shift.release();
            AppMessage::Noop
        }
        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 终端支持 keyboard enhancement 时能收到单独的 Shift 按下/释放
    if let KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) = key.code
    {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => app.shift.press(),
            KeyEventKind::Release => app.shift.release(),
        }
        return AppMessage::Noop;
    }

    // 否则从每个按键的修饰键里推断
    app.shift
        .observe_modifiers(key.modifiers.contains(KeyModifiers::SHIFT));

    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter / →: 确认选择
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Entities(_) => handle_table_keys(key),
        Page::Settings => handle_settings_keys(key),
        Page::Home => AppMessage::Noop,
    }
}

/// 处理实体表格页面的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::TOGGLE_ROW.matches(&key) {
        ContentMessage::ToggleRow
    } else if DefaultKeymap::SELECT_PAGE.matches(&key) {
        ContentMessage::SelectPage
    } else if DefaultKeymap::DESELECT_ALL.matches(&key) {
        ContentMessage::DeselectAll
    } else if DefaultKeymap::NEXT_PAGE.matches(&key) {
        ContentMessage::NextPage
    } else if DefaultKeymap::PREV_PAGE.matches(&key) {
        ContentMessage::PrevPage
    } else if DefaultKeymap::GROW_PAGE_SIZE.matches(&key) {
        ContentMessage::GrowPageSize
    } else if DefaultKeymap::SHRINK_PAGE_SIZE.matches(&key) {
        ContentMessage::ShrinkPageSize
    } else if DefaultKeymap::SEARCH.matches(&key) {
        ContentMessage::Search
    } else if DefaultKeymap::NEXT_TAB.matches(&key) {
        ContentMessage::NextTab
    } else if DefaultKeymap::PREV_TAB.matches(&key) {
        ContentMessage::PrevTab
    } else if DefaultKeymap::ACTION_DELETE.matches(&key) {
        ContentMessage::Delete
    } else if DefaultKeymap::ACTION_ENABLE.matches(&key) {
        ContentMessage::Enable
    } else if DefaultKeymap::ACTION_DISABLE.matches(&key) {
        ContentMessage::Disable
    } else {
        match key.code {
            // Shift+↑/↓ 也只移动光标，Shift 状态已记录
            KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
            KeyCode::Home => ContentMessage::SelectFirst,
            KeyCode::End => ContentMessage::SelectLast,
            KeyCode::Enter => ContentMessage::ToggleRow,
            KeyCode::PageDown | KeyCode::Right => ContentMessage::NextPage,
            KeyCode::PageUp | KeyCode::Left => ContentMessage::PrevPage,
            _ => return AppMessage::Noop,
        }
    };
    AppMessage::Content(msg)
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Search { .. } => handle_search_keys(key),
        // 其余弹窗只响应关闭按键
        Modal::BatchReport { .. } | Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理搜索弹窗的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
            AppMessage::Modal(ModalMessage::ClearInput)
        }
        KeyCode::Char(ch) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    app.shift
        .observe_modifiers(mouse.modifiers.contains(KeyModifiers::SHIFT));

    if app.modal.is_open() || !matches!(app.current_page, Page::Entities(_)) {
        return AppMessage::Noop;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hit_area.row_at(mouse.column, mouse.row) {
                Some(index) => AppMessage::Content(ContentMessage::ClickRow(index)),
                None => AppMessage::Noop,
            }
        }
        MouseEventKind::ScrollUp => AppMessage::Content(ContentMessage::SelectPrevious),
        MouseEventKind::ScrollDown => AppMessage::Content(ContentMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::domain::EntityKind;
    use crate::model::FocusPanel;
    use crate::test_support::test_app;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn click(column: u16, row: u16, modifiers: KeyModifiers) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers,
        })
    }

    fn on_table(kind: EntityKind) -> App {
        let mut app = test_app();
        app.go_to(Page::Entities(kind));
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn explicit_shift_events_drive_tracker() {
        let app = on_table(EntityKind::HbacRules);
        let code = KeyCode::Modifier(ModifierKeyCode::LeftShift);

        handle_event(press(code, KeyModifiers::SHIFT), &app);
        assert!(app.shift.is_held());

        let release = KeyEvent::new_with_kind_and_state(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        handle_event(Event::Key(release), &app);
        assert!(!app.shift.is_held());
    }

    #[test]
    fn shift_space_is_a_range_toggle() {
        let app = on_table(EntityKind::HbacRules);
        let msg = handle_event(press(KeyCode::Char(' '), KeyModifiers::SHIFT), &app);
        assert_eq!(msg, AppMessage::Content(ContentMessage::ToggleRow));
        assert!(app.shift.is_held());

        handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app);
        assert!(!app.shift.is_held());
    }

    #[test]
    fn click_inside_table_maps_to_row() {
        let app = on_table(EntityKind::Hosts);
        app.hit_area.record(Rect::new(20, 4, 60, 10), 0);

        let msg = handle_event(click(30, 6, KeyModifiers::SHIFT), &app);
        assert_eq!(msg, AppMessage::Content(ContentMessage::ClickRow(2)));
        assert!(app.shift.is_held());

        assert_eq!(handle_event(click(2, 6, KeyModifiers::NONE), &app), AppMessage::Noop);
        assert!(!app.shift.is_held());
    }

    #[test]
    fn focus_lost_releases_shift() {
        let app = on_table(EntityKind::Hosts);
        app.shift.press();
        handle_event(Event::FocusLost, &app);
        assert!(!app.shift.is_held());
    }

    #[test]
    fn table_shortcuts() {
        let app = on_table(EntityKind::SudoRules);
        let cases = [
            (KeyCode::Char('a'), KeyModifiers::CONTROL, ContentMessage::SelectPage),
            (KeyCode::Char('a'), KeyModifiers::ALT, ContentMessage::DeselectAll),
            (KeyCode::Char(']'), KeyModifiers::NONE, ContentMessage::NextPage),
            (KeyCode::Char('+'), KeyModifiers::SHIFT, ContentMessage::GrowPageSize),
            (KeyCode::Char('T'), KeyModifiers::SHIFT, ContentMessage::PrevTab),
            (KeyCode::Char('d'), KeyModifiers::ALT, ContentMessage::Delete),
            (KeyCode::Char('x'), KeyModifiers::ALT, ContentMessage::Disable),
        ];
        for (code, modifiers, expected) in cases {
            assert_eq!(
                handle_event(press(code, modifiers), &app),
                AppMessage::Content(expected)
            );
        }
    }

    #[test]
    fn base_key_plus_shift_does_not_trigger_plain_binding() {
        let app = on_table(EntityKind::Hosts);
        // 未上报 alternate key 时 `?` 与 `+` 的编码
        assert_eq!(
            handle_event(press(KeyCode::Char('/'), KeyModifiers::SHIFT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('='), KeyModifiers::SHIFT), &app),
            AppMessage::Noop
        );
        // 启用 REPORT_ALTERNATE_KEYS 后的编码
        assert_eq!(
            handle_event(press(KeyCode::Char('?'), KeyModifiers::SHIFT), &app),
            AppMessage::ShowHelp
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('/'), KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::Search)
        );
    }

    #[test]
    fn search_modal_captures_typing() {
        let mut app = on_table(EntityKind::Hosts);
        app.modal.show_search(EntityKind::Hosts, None);
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
    }

    #[test]
    fn clicks_ignored_while_modal_open() {
        let mut app = on_table(EntityKind::Hosts);
        app.hit_area.record(Rect::new(0, 0, 80, 10), 0);
        app.modal.show_help();
        assert_eq!(handle_event(click(5, 5, KeyModifiers::NONE), &app), AppMessage::Noop);
    }
}
