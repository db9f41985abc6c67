use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::App;
use super::theme;
use crate::view::View;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = [(View::Summary, "Summary"), (View::Statements, "Statements")]
        .iter()
        .map(|(view, label)| {
            if *view == app.view.view {
                Line::from(Span::styled(
                    *label,
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(*label, Style::default().fg(theme::TEXT_DIM)))
            }
        })
        .collect();

    let selected = match app.view.view {
        View::Summary => 0,
        View::Statements => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.view.view {
        View::Summary => super::screens::summary::render(f, area, app),
        View::Statements => super::screens::statements::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = match app.view.view {
        View::Summary => " SUMMARY ",
        View::Statements => " STATEMENTS ",
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(theme::ACCENT)
        .add_modifier(Modifier::BOLD);

    let txn_count: usize = app.statements.iter().map(|s| s.transactions.len()).sum();
    let info = format!(
        " {} statements | {} txns",
        app.statements.len(),
        txn_count
    );

    let right = match app.view.view {
        View::Summary => " Tab switch view | ? help | q quit ",
        View::Statements => {
            " Tab view | ←/→ panel | ↑/↓/PgUp/PgDn/Home/End move | 1-7 filter | s sort | q quit "
        }
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " Statement Browser Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Views"),
        entry("  Tab              Summary / Statements   ?          This help"),
        entry("  q, Ctrl-c        Quit"),
        Line::from(""),
        section(" Statements view"),
        entry("  ←/h  →/l         Focus statements / transactions panel"),
        entry("  ↑/k  ↓/j         Move cursor (wraps around)"),
        entry("  PgUp/PgDn        Move 10 rows           Home/g End/G  First/Last"),
        entry("  s                Cycle sort: Date, Amount, Location, Category"),
        entry("  1-7              Filter: All, Food, Transport, Shopping,"),
        entry("                   Travel, Utilities, Other"),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
