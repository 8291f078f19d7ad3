//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::domain::{EntityKind, HbacRule, Host, IdView, SudoRule, TableEntity};
use crate::model::App;
use crate::view::theme::colors;

/// 每种实体的统计
struct Summary {
    kind: EntityKind,
    total: u32,
    selected: usize,
    error: bool,
}

fn summary<T: TableEntity>(app: &App) -> Summary {
    let state = T::table(app);
    Summary {
        kind: T::KIND,
        total: state.table.pagination().item_count(),
        selected: state.table.selection().len(),
        error: state.error.is_some(),
    }
}

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Length(6), // 统计区域
            Constraint::Min(0),
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to IdM Console",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Browse directory entries and act on many of them at once",
            Style::default().fg(c.muted),
        )),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let summaries = [
        summary::<Host>(app),
        summary::<HbacRule>(app),
        summary::<SudoRule>(app),
        summary::<IdView>(app),
    ];

    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(layout[1]);

    for (s, area) in summaries.iter().zip(stats_layout.iter()) {
        render_summary(frame, *area, s);
    }
}

fn render_summary(frame: &mut Frame, area: Rect, s: &Summary) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", s.kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let count = if s.error {
        Span::styled("  unavailable", Style::default().fg(c.error))
    } else {
        Span::styled(
            format!("  {}", s.total),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![Line::from(""), Line::from(count)];
    if s.selected > 0 {
        lines.push(Line::styled(
            format!("  {} selected", s.selected),
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
