use crate::models::{CategorizedTransactions, Statement};
use crate::view::{Action, ViewState};

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) show_help: bool,

    pub(crate) statements: Vec<Statement>,
    pub(crate) categorized: CategorizedTransactions,
    pub(crate) view: ViewState,
}

impl App {
    /// Build the dashboard over already enriched statements.
    pub(crate) fn new(statements: Vec<Statement>, categorized: CategorizedTransactions) -> Self {
        let view = ViewState::new(&statements);
        Self {
            running: true,
            show_help: false,
            statements,
            categorized,
            view,
        }
    }

    pub(crate) fn apply(&mut self, action: Action) {
        self.view.apply(action, &self.statements);
    }

    pub(crate) fn quit(&mut self) {
        self.running = false;
    }
}
