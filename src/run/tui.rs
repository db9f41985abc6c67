use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::models::Category;
use crate::ui::app::App;
use crate::view::{Action, Nav};

pub(crate) fn as_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("event loop failed: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match map_key(key) {
                Some(Input::Quit) => app.quit(),
                Some(Input::Help) => app.show_help = true,
                Some(Input::Apply(action)) => app.apply(action),
                None => {}
            }
        }
    }
    Ok(())
}

// ── Key mapping ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Help,
    Apply(Action),
}

fn map_key(key: KeyEvent) -> Option<Input> {
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Input::Quit)
        }
        KeyCode::Char('q') => return Some(Input::Quit),
        KeyCode::Char('?') => return Some(Input::Help),
        KeyCode::Tab => Action::ToggleView,
        KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Nav::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Nav::Down),
        KeyCode::Home | KeyCode::Char('g') => Action::Move(Nav::Home),
        KeyCode::End | KeyCode::Char('G') => Action::Move(Nav::End),
        KeyCode::PageUp => Action::Move(Nav::PageUp),
        KeyCode::PageDown => Action::Move(Nav::PageDown),
        KeyCode::Char('s') => Action::CycleSort,
        KeyCode::Char(c @ '1'..='7') => {
            let idx = c as usize - '1' as usize;
            Action::SetFilter(*Category::filters().get(idx)?)
        }
        _ => return None,
    };
    Some(Input::Apply(action))
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
