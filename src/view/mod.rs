mod rows;

use crate::models::{Category, Statement};

pub(crate) use rows::{derive_rows, RowKind, TxnRow};

/// Rows moved by a page up/down.
pub(crate) const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Summary,
    Statements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Statements,
    Transactions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortMode {
    Date,
    Amount,
    Location,
    Category,
}

impl SortMode {
    pub(crate) fn all() -> &'static [SortMode] {
        &[Self::Date, Self::Amount, Self::Location, Self::Category]
    }

    pub(crate) fn next(self) -> Self {
        let modes = Self::all();
        let idx = modes.iter().position(|m| *m == self).unwrap_or(0);
        modes[(idx + 1) % modes.len()]
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "Date"),
            Self::Amount => write!(f, "Amount"),
            Self::Location => write!(f, "Location"),
            Self::Category => write!(f, "Category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nav {
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Nav {
    /// New cursor position in a list of `len` rows. Up/down wrap around,
    /// paging clamps at the ends. `None` for an empty list.
    pub(crate) fn apply(self, cursor: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let last = len - 1;
        let cursor = cursor.min(last);
        Some(match self {
            Self::Up => {
                if cursor == 0 {
                    last
                } else {
                    cursor - 1
                }
            }
            Self::Down => (cursor + 1) % len,
            Self::Home => 0,
            Self::End => last,
            Self::PageUp => cursor.saturating_sub(PAGE_SIZE),
            Self::PageDown => (cursor + PAGE_SIZE).min(last),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    ToggleView,
    FocusPrev,
    FocusNext,
    Move(Nav),
    CycleSort,
    SetFilter(Category),
}

/// Navigation, sort and filter state of the dashboard, plus the rows it
/// currently derives for the selected statement.
#[derive(Debug, Clone)]
pub(crate) struct ViewState {
    pub(crate) view: View,
    pub(crate) focus: Panel,
    pub(crate) sort: SortMode,
    pub(crate) filter: Category,
    pub(crate) statement_index: usize,
    pub(crate) transaction_index: usize,
    pub(crate) rows: Vec<TxnRow>,
}

impl ViewState {
    pub(crate) fn new(statements: &[Statement]) -> Self {
        let mut state = Self {
            view: View::Summary,
            focus: Panel::Statements,
            sort: SortMode::Date,
            filter: Category::All,
            statement_index: 0,
            transaction_index: 0,
            rows: Vec::new(),
        };
        state.refresh(statements);
        state
    }

    /// Apply one user action. Everything except `ToggleView` only acts while
    /// the statements view is showing.
    pub(crate) fn apply(&mut self, action: Action, statements: &[Statement]) {
        if action == Action::ToggleView {
            self.toggle_view();
            return;
        }
        if self.view != View::Statements {
            return;
        }

        match action {
            Action::ToggleView => {}
            Action::FocusPrev => {
                if self.focus == Panel::Transactions {
                    self.focus = Panel::Statements;
                }
            }
            Action::FocusNext => {
                if self.focus == Panel::Statements {
                    self.focus = Panel::Transactions;
                }
            }
            Action::Move(nav) => self.navigate(nav, statements),
            Action::CycleSort => {
                self.sort = self.sort.next();
                self.refresh(statements);
            }
            Action::SetFilter(category) => {
                self.filter = category;
                self.refresh(statements);
            }
        }

        tracing::debug!(
            ?action,
            statement = self.statement_index,
            transaction = self.transaction_index,
            rows = self.rows.len(),
            "view action applied"
        );
    }

    fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Summary => {
                self.focus = Panel::Statements;
                View::Statements
            }
            View::Statements => View::Summary,
        };
    }

    fn navigate(&mut self, nav: Nav, statements: &[Statement]) {
        match self.focus {
            Panel::Statements => {
                if let Some(idx) = nav.apply(self.statement_index, statements.len()) {
                    self.statement_index = idx;
                    self.transaction_index = 0;
                    self.refresh(statements);
                }
            }
            Panel::Transactions => {
                if let Some(idx) = nav.apply(self.transaction_index, self.rows.len()) {
                    self.transaction_index = idx;
                }
            }
        }
    }

    /// Re-derive the transaction rows for the selected statement.
    ///
    /// An out-of-range statement index leaves the previous rows in place.
    pub(crate) fn refresh(&mut self, statements: &[Statement]) {
        let Some(stmt) = statements.get(self.statement_index) else {
            return;
        };
        self.rows = derive_rows(stmt, self.sort, self.filter);
        self.transaction_index = self
            .transaction_index
            .min(self.rows.len().saturating_sub(1));
    }

    pub(crate) fn selected_statement<'a>(&self, statements: &'a [Statement]) -> Option<&'a Statement> {
        statements.get(self.statement_index)
    }
}
