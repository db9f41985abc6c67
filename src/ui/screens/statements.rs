use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Category, Statement};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, right_align, scroll_offset, truncate};
use crate::view::{Panel, RowKind, TxnRow};

const STATEMENTS_WIDTH: u16 = 38;
const AMOUNT_WIDTH: usize = 13;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(STATEMENTS_WIDTH), Constraint::Min(20)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(7)])
        .split(chunks[0]);

    render_statement_list(f, left[0], app);
    render_statement_details(f, left[1], app);
    render_transactions(f, chunks[1], app);
}

fn panel_title(title: String, focused: bool) -> Span<'static> {
    Span::styled(
        title,
        Style::default()
            .fg(if focused { theme::ACCENT } else { theme::TEXT_DIM })
            .add_modifier(Modifier::BOLD),
    )
}

/// " [3/12]" scroll indicator, empty for an empty list.
fn position(cursor: usize, len: usize) -> String {
    if len == 0 {
        String::new()
    } else {
        format!(" [{}/{}]", cursor + 1, len)
    }
}

fn row_style(is_cursor: bool, focused: bool, i: usize) -> Style {
    if is_cursor && focused {
        theme::selected_style()
    } else if is_cursor {
        theme::inactive_selected_style()
    } else if i % 2 == 1 {
        theme::alt_row_style()
    } else {
        theme::normal_style()
    }
}

fn render_statement_list(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.view.focus == Panel::Statements;
    let cursor = app.view.statement_index;
    let visible = area.height.saturating_sub(3) as usize;

    let header = Row::new(
        ["Period", "            Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = app
        .statements
        .iter()
        .enumerate()
        .skip(scroll_offset(cursor, visible))
        .take(visible)
        .map(|(i, stmt)| {
            Row::new(vec![
                Cell::from(stmt.period()),
                Cell::from(right_align(
                    &format!("NT${}", format_amount(stmt.total_amount())),
                    18,
                )),
            ])
            .style(row_style(i == cursor, focused, i))
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Length(18)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(focused))
                .title(panel_title(
                    format!(
                        " Statements{} ",
                        position(cursor, app.statements.len())
                    ),
                    focused,
                )),
        );

    f.render_widget(table, area);
}

fn detail_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<12}"), theme::dim_style()),
        Span::styled(value, theme::normal_style()),
    ])
}

fn render_statement_details(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.view.selected_statement(&app.statements) {
        Some(stmt) => statement_details(stmt),
        None => vec![Line::from(Span::styled(" No statements", theme::dim_style()))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Details ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn statement_details(stmt: &Statement) -> Vec<Line<'static>> {
    vec![
        detail_line("Statement", stmt.stmt_date.clone()),
        detail_line("Due", stmt.pmt_due.clone()),
        detail_line(
            "Min due",
            format!("NT${}", format_amount(stmt.minimum_due())),
        ),
        detail_line(
            "Limit",
            format!("NT${}", format_amount(stmt.credit_limit())),
        ),
        detail_line("Points", stmt.point_cur_pt_bal.clone()),
    ]
}

fn render_transactions(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.view.focus == Panel::Transactions;
    let rows = &app.view.rows;
    let cursor = app.view.transaction_index;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(panel_title(
            format!(
                " Transactions (Sort by: {}){} ",
                app.view.sort,
                position(cursor, rows.len())
            ),
            focused,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    render_filter_tabs(f, parts[0], app.view.filter);

    if rows.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No {} transactions in this statement", app.view.filter),
                theme::dim_style(),
            )),
        ])
        .centered();
        f.render_widget(msg, parts[1]);
        return;
    }

    let show_category = app.view.filter == Category::All;
    let desc_width = if show_category { 28 } else { 38 };
    let visible = parts[1].height.saturating_sub(1) as usize;

    let mut titles = vec!["Date"];
    if show_category {
        titles.push("Category");
    }
    titles.extend([" Amount (NTD)", "Description", "       Amount", "Curr", "Loc"]);
    let header = Row::new(
        titles
            .into_iter()
            .map(|h| Cell::from(h).style(theme::header_style())),
    )
    .height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll_offset(cursor, visible))
        .take(visible)
        .map(|(i, row)| {
            let style = if i != cursor && matches!(row.kind, RowKind::ForeignFeeTotal { .. }) {
                theme::fee_row_style()
            } else {
                row_style(i == cursor, focused, i)
            };
            Row::new(transaction_cells(row, show_category, desc_width)).style(style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(10)];
    if show_category {
        widths.push(Constraint::Length(10));
    }
    widths.extend([
        Constraint::Length(AMOUNT_WIDTH as u16),
        Constraint::Min(desc_width as u16),
        Constraint::Length(AMOUNT_WIDTH as u16),
        Constraint::Length(5),
        Constraint::Length(8),
    ]);

    f.render_widget(Table::new(table_rows, widths).header(header), parts[1]);
}

fn transaction_cells(row: &TxnRow, show_category: bool, desc_width: usize) -> Vec<Cell<'static>> {
    let amount_cell = |amount| {
        Cell::from(Span::styled(
            right_align(&format_amount(amount), AMOUNT_WIDTH),
            theme::amount_style(amount < rust_decimal::Decimal::ZERO),
        ))
    };

    let mut cells = vec![Cell::from(row.date.clone())];
    if show_category {
        cells.push(Cell::from(row.category_label()));
    }
    cells.extend([
        amount_cell(row.ntd_amount),
        Cell::from(truncate(&row.description, desc_width)),
        Cell::from(right_align(&format_amount(row.amount), AMOUNT_WIDTH)),
        Cell::from(row.currency.clone()),
        Cell::from(truncate(&row.location, 8)),
    ]);
    cells
}

fn render_filter_tabs(f: &mut Frame, area: Rect, active: Category) {
    let mut spans = Vec::new();
    for (i, category) in Category::filters().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *category == active {
            theme::active_tab_style()
        } else {
            theme::dim_style()
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, category), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
