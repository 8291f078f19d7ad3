//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::colors;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::Rgb(180, 180, 180));
    let separator = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(c.highlight).fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigation"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Home => {}
            Page::Entities(kind) => {
                hints.push(("Space", "Toggle"));
                hints.push(("⇧", "Range"));
                hints.push(("[ ]", "Page"));
                hints.push(("/", "Search"));
                if kind.has_status() {
                    hints.push(("t", "Tab"));
                    hints.push(("Alt+e/x", "Enable/Disable"));
                }
                hints.push(("Alt+d", "Delete"));
            }
            Page::Settings => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Modify"));
            }
        },
    }

    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
