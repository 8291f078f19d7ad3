//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 无修饰键的字符绑定在字符本身需要 Shift 时（`+`、`?`、`T`）接受 Shift；
    /// 空格也接受，Shift+Space 是区间选择。
    /// 基础键（`/`、`=`、`t`）带 Shift 时不匹配：未启用 alternate keys 的
    /// kitty 协议终端会把 `?` 报告为 `/` + Shift。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(c) if self.modifiers.is_empty() => {
                let rest = key.modifiers - KeyModifiers::SHIFT;
                rest.is_empty() && (key.modifiers == rest || !is_base_key(c))
            }
            _ => key.modifiers == self.modifiers,
        }
    }
}

/// 不按 Shift 就能打出的字符（美式布局）
fn is_base_key(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || "`-=[]\\;',./".contains(c)
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 选择
    pub const TOGGLE_ROW: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const SELECT_PAGE: KeyBinding = KeyBinding::ctrl(KeyCode::Char('a'));
    pub const DESELECT_ALL: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));

    // 分页
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char(']'));
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const GROW_PAGE_SIZE: KeyBinding = KeyBinding::key(KeyCode::Char('+'));
    pub const SHRINK_PAGE_SIZE: KeyBinding = KeyBinding::key(KeyCode::Char('-'));

    // 过滤
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const NEXT_TAB: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const PREV_TAB: KeyBinding = KeyBinding::key(KeyCode::Char('T'));

    // 批量操作
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_ENABLE: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DISABLE: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));
}
