//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件，左键点击换算成表格行
//!             Event::FocusLost                    // 终端失去焦点，释放 Shift
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，重绘终端
//!
//!         当接收到键盘事件时，转入 handle_key_event()
//!         判断：
//!             - Shift 按下/释放，写入 app.shift 后返回 Noop
//!             - 有弹窗打开时，调用 handle_modal_keys 处理
//!             - 全局快捷键，就地处理；
//!             - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!             - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Shift 跟踪
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     区间选择需要知道 "点击那一刻 Shift 是否按住"。
//!     app.shift 是 ShiftTracker（内部为原子布尔），handler 只持有 &App 也能写入。
//!
//!         支持 keyboard enhancement 的终端：
//!             KeyCode::Modifier(LeftShift | RightShift) 的 Press / Release
//!         其它终端：
//!             每个按键/鼠标事件的 modifiers 是否含 SHIFT
//!
//!     每个 TableController 持有同一个 ShiftHandle，
//!     toggle_visible_auto() 读取它来决定单选还是区间选择。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表格页面快捷键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         ↑/↓ j/k     → 移动光标
//!         Space       → ContentMessage::ToggleRow（Shift+Space 为区间）
//!         鼠标左键     → ContentMessage::ClickRow(n)
//!         Ctrl+A      → 选中当前页
//!         Alt+A       → 取消全部选择
//!         [ / ]       → 上一页 / 下一页
//!         - / +       → 每页条数
//!         /           → 搜索
//!         t / T       → 状态标签页
//!         Alt+D/E/X   → 删除 / 启用 / 禁用
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
