mod cli;
mod tui;

pub(crate) use cli::print_summary;
pub(crate) use tui::as_tui;
