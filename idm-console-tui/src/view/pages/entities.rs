//! 实体表格页面视图
//!
//! 四种实体共用：标签页 + 批量按钮 + 表格 + 分页信息
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ All │ Enabled │ Disabled         filter: web │  ← 仅规则页面
//!     │ [Delete] [Enable] [Disable]      3 selected  │
//!     │ ┌──────────────────────────────────────────┐ │
//!     │ │[-] Name          Description     ...     │ │
//!     │ │[x] allow_all     ...                     │ │
//!     │ │[ ] allow_ssh     ...                     │ │
//!     │ └──────────────────────────────────────────┘ │
//!     │ Page 1/3 · showing 1-10 of 23 · ...          │
//!     └──────────────────────────────────────────────┘

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};

use idm_console_core::{BulkActionState, PageSelection, Row, TableController};

use crate::model::domain::TableEntity;
use crate::model::state::StatusTab;
use crate::model::App;
use crate::view::theme::colors;

/// 复选框列宽
const CHECKBOX_WIDTH: u16 = 3;

/// 渲染实体表格页面
pub fn render<T: TableEntity>(app: &App, frame: &mut Frame, area: Rect) {
    let state = T::table(app);
    let table = &state.table;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标签页 + 过滤
            Constraint::Length(1), // 批量按钮
            Constraint::Min(3),    // 表格
            Constraint::Length(1), // 分页信息
            Constraint::Length(1), // 错误信息
        ])
        .split(area);

    render_tabs::<T>(frame, layout[0], table);
    render_bulk_bar(frame, layout[1], &table.bulk_state(), table.selection().len());
    render_table::<T>(app, frame, layout[2]);

    let c = colors();
    frame.render_widget(
        Paragraph::new(footer_text(table)).style(Style::default().fg(c.muted)),
        layout[3],
    );

    if let Some(ref error) = state.error {
        frame.render_widget(
            Paragraph::new(format!(" ⚠ {error}")).style(Style::default().fg(c.error)),
            layout[4],
        );
    } else if table.is_loading() {
        frame.render_widget(
            Paragraph::new(" Loading...").style(Style::default().fg(c.muted)),
            layout[4],
        );
    }
}

/// 状态标签页和当前关键字
fn render_tabs<T: TableEntity>(frame: &mut Frame, area: Rect, table: &TableController<T>) {
    let c = colors();
    let mut spans = vec![Span::raw(" ")];

    if T::KIND.has_status() {
        let current = StatusTab::from_filter(table.status_filter());
        for (i, tab) in StatusTab::all().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
            }
            let style = if *tab == current {
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(c.muted)
            };
            spans.push(Span::styled(tab.label(), style));
        }
        spans.push(Span::raw("    "));
    }

    if let Some(keyword) = table.keyword() {
        spans.push(Span::styled("filter: ", Style::default().fg(c.muted)));
        spans.push(Span::styled(
            keyword.to_string(),
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 批量操作按钮，按选择状态启用/置灰
fn render_bulk_bar(frame: &mut Frame, area: Rect, bulk: &BulkActionState, selected: usize) {
    let c = colors();
    let button = |label: &'static str, disabled: bool| {
        let style = if disabled {
            Style::default().fg(c.border)
        } else {
            Style::default()
                .fg(c.selected_fg)
                .bg(c.highlight)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(label, style)
    };

    let mut spans = vec![
        Span::raw(" "),
        button(" Delete ", bulk.delete_disabled),
        Span::raw(" "),
        button(" Enable ", bulk.enable_disabled),
        Span::raw(" "),
        button(" Disable ", bulk.disable_disabled),
    ];
    if selected > 0 {
        spans.push(Span::styled(
            format!("   {selected} selected"),
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 表头复选框
fn page_checkbox(selection: PageSelection) -> &'static str {
    match selection {
        PageSelection::All => "[x]",
        PageSelection::Partial => "[-]",
        PageSelection::None => "[ ]",
    }
}

/// 首个可见行的索引，保证光标在 `height` 行的窗口内
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        (cursor + 1).saturating_sub(height)
    }
}

fn render_table<T: TableEntity>(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = T::table(app);
    let table = &state.table;
    let is_focused = app.focus.is_content();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            c.border_focused
        } else {
            c.border
        }));
    let inner = block.inner(area);

    let header_style = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);
    let header = TableRow::new(
        std::iter::once(Cell::from(page_checkbox(table.page_selection())))
            .chain(T::columns().iter().map(|col| Cell::from(col.title))),
    )
    .style(header_style);

    let rows: Vec<TableRow> = table
        .visible_rows()
        .iter()
        .map(|row| {
            let checkbox = if !row.is_selectable() {
                "   "
            } else if table.is_selected(row) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if !row.is_selectable() {
                Style::default().fg(c.muted).add_modifier(Modifier::ITALIC)
            } else if table.is_selected(row) {
                Style::default().fg(c.success)
            } else {
                Style::default().fg(c.fg)
            };
            TableRow::new(
                std::iter::once(Cell::from(checkbox))
                    .chain(row.cells().into_iter().map(Cell::from)),
            )
            .style(style)
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(CHECKBOX_WIDTH))
        .chain(T::columns().iter().map(|col| Constraint::Min(col.width)))
        .collect();

    let highlight = if is_focused {
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    // 表头占 1 行，其余为数据行
    let body_height = usize::from(inner.height.saturating_sub(1));
    let offset = scroll_offset(state.cursor, body_height);
    let mut table_state = TableState::default()
        .with_offset(offset)
        .with_selected((state.visible_len() > 0).then_some(state.cursor));

    frame.render_stateful_widget(widget, area, &mut table_state);

    // 记录数据行区域供鼠标点击换算
    let shown = state.visible_len().saturating_sub(offset).min(body_height);
    let rows_area = Rect::new(
        inner.x,
        inner.y.saturating_add(1),
        inner.width,
        u16::try_from(shown).unwrap_or(u16::MAX),
    );
    app.hit_area.record(rows_area, offset);
}

/// 分页信息
///
/// `Page 2/3 · showing 11-20 of 23 · 4 selected (6 remaining on page)`
pub fn footer_text<T: Row>(table: &TableController<T>) -> String {
    let p = table.pagination();
    let mut text = format!(
        " Page {}/{} · showing {}-{} of {}",
        p.page(),
        p.page_count(),
        p.first_index(),
        p.last_index(),
        p.item_count()
    );
    let selected = table.selection().len();
    if selected > 0 {
        text.push_str(&format!(
            " · {selected} selected ({} remaining on page)",
            table.remaining_on_page()
        ));
    }
    text
}
