//! 弹窗组件

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::domain::EntityKind;
use crate::model::state::Modal;
use crate::model::App;

/// 确认删除弹窗最多列出的键数
const MAX_LISTED_KEYS: usize = 8;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { kind, keys, focus } => {
            render_confirm_delete(frame, *kind, keys, *focus);
        }
        Modal::Search { kind, input } => render_search(frame, *kind, input),
        Modal::BatchReport {
            title,
            summary,
            failures,
        } => render_batch_report(frame, title, summary, failures),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框，返回内容区域
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner.inner(Margin::new(1, 0))
}

/// 渲染确认删除弹窗
///
/// 列出打开弹窗时拍下的快照，确认后删除的正是这些条目。
fn render_confirm_delete(frame: &mut Frame, kind: EntityKind, keys: &[String], focus: usize) {
    let listed = keys.len().min(MAX_LISTED_KEYS);
    let more = keys.len() - listed;
    let height = u16::try_from(listed).unwrap_or(0) + u16::from(more > 0) + 8;
    let area = centered_rect(54, height, frame.area());
    let inner = modal_frame(frame, area, "Confirm Deletion", Color::Red);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let noun = if keys.len() == 1 {
        kind.noun().to_string()
    } else {
        format!("{}s", kind.noun())
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("Delete {} {noun}?", keys.len()),
            Style::default().fg(Color::White),
        ),
    ];
    lines.extend(
        keys.iter()
            .take(listed)
            .map(|key| Line::styled(format!("  • {key}"), Style::default().fg(Color::Yellow))),
    );
    if more > 0 {
        lines.push(Line::styled(
            format!("  … and {more} more"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(" Cancel ", cancel_style),
        Span::raw("    "),
        Span::styled(" Delete ", confirm_style),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染搜索弹窗
fn render_search(frame: &mut Frame, kind: EntityKind, input: &str) {
    let area = centered_rect(50, 7, frame.area());
    let inner = modal_frame(frame, area, &format!("Search {}", kind.title()), Color::Cyan);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                input,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::styled(
            "Enter apply · empty clears · Ctrl+U erase · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染批量操作结果（部分失败）
fn render_batch_report(frame: &mut Frame, title: &str, summary: &str, failures: &[String]) {
    let shown = failures.len().min(MAX_LISTED_KEYS);
    let height = u16::try_from(shown).unwrap_or(0) + 7;
    let area = centered_rect(64, height, frame.area());
    let inner = modal_frame(frame, area, title, Color::Yellow);

    let mut lines = vec![
        Line::from(""),
        Line::styled(summary, Style::default().fg(Color::White)),
    ];
    lines.extend(
        failures
            .iter()
            .take(shown)
            .map(|f| Line::styled(format!("  ✗ {f}"), Style::default().fg(Color::Red))),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc or Enter to close",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    let inner = modal_frame(frame, area, title, Color::Red);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn help_heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(58, 26, frame.area());
    let inner = modal_frame(frame, area, "Help", Color::Cyan);

    let lines = vec![
        help_heading("Global shortcuts"),
        help_line("Tab", "Switch panel"),
        help_line("↑↓/jk", "Move Up/Down"),
        help_line("Enter", "Confirm"),
        help_line("Esc", "Back/Cancel"),
        help_line("Alt+r", "Refresh"),
        help_line("q", "Quit"),
        Line::from(""),
        help_heading("Selection"),
        help_line("Space", "Toggle row"),
        help_line("Shift", "Hold while toggling or clicking for a range"),
        help_line("Ctrl+a", "Select / deselect page"),
        help_line("Alt+a", "Deselect all"),
        Line::from(""),
        help_heading("Paging & filters"),
        help_line("[ ]", "Previous / next page"),
        help_line("- +", "Smaller / larger pages"),
        help_line("/", "Search"),
        help_line("t T", "Next / previous status tab"),
        Line::from(""),
        help_heading("Bulk actions"),
        help_line("Alt+d", "Delete selected"),
        help_line("Alt+e", "Enable selected"),
        help_line("Alt+x", "Disable selected"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
