use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::Provider;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, right_align};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Count cards
            Constraint::Min(6),    // Breakdown tables
        ])
        .split(area);

    render_cards(f, chunks[0], app);

    let tables = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_provider_totals(f, tables[0], app);
    render_apple_pay_cards(f, tables[1], app);
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);

    let c = &app.categorized;
    render_card(f, cards[0], "Statements", app.statements.len(), theme::ACCENT);
    render_card(f, cards[1], "Apple Pay", c.apple_pay.len(), theme::GREEN);
    render_card(f, cards[2], "PayPal", c.paypal.len(), theme::YELLOW);
    render_card(f, cards[3], "Foreign Fees", c.foreign_fees.len(), theme::PEACH);
    render_card(f, cards[4], "Other", c.other.len(), theme::TEXT);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, count: usize, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn titled_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

fn header(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1)
}

fn amount_cell(total: Decimal) -> Cell<'static> {
    Cell::from(right_align(&format!("NT${}", format_amount(total)), 16))
}

fn render_provider_totals(f: &mut Frame, area: Rect, app: &App) {
    let c = &app.categorized;
    let rows: Vec<Row> = Provider::all()
        .iter()
        .enumerate()
        .map(|(i, provider)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(provider.as_str()),
                Cell::from(right_align(&c.bucket(*provider).len().to_string(), 6)),
                amount_cell(c.total(*provider)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header(&["Provider", " Txns", "           Total"]))
        .block(titled_block(format!(" Payment Providers ({}) ", c.len())));

    f.render_widget(table, area);
}

fn render_apple_pay_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = app.categorized.apple_pay_by_card();

    if cards.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No Apple Pay transactions",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(titled_block(" Apple Pay by Card ".into()));
        f.render_widget(msg, area);
        return;
    }

    let rows: Vec<Row> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(format!("•••• {}", card.card_last4)),
                Cell::from(right_align(&card.count.to_string(), 6)),
                amount_cell(card.total),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header(&["Card", " Txns", "           Total"]))
        .block(titled_block(format!(" Apple Pay by Card ({}) ", cards.len())));

    f.render_widget(table, area);
}
