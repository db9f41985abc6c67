use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::models::{sum_amounts, Category, Statement, Transaction};
use crate::normalize::clean_description;

use super::SortMode;

/// One line of the transactions table, before presentation formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TxnRow {
    pub(crate) date: String,
    pub(crate) kind: RowKind,
    pub(crate) description: String,
    pub(crate) ntd_amount: Decimal,
    pub(crate) amount: Decimal,
    pub(crate) currency: String,
    pub(crate) location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowKind {
    Transaction(Category),
    /// Synthetic row folding every foreign transaction fee of the statement.
    ForeignFeeTotal { count: usize },
}

impl TxnRow {
    fn from_transaction(txn: &Transaction) -> Self {
        Self {
            date: txn.txn_date.clone(),
            kind: RowKind::Transaction(txn.category()),
            description: clean_description(txn.normalized_description()).to_string(),
            ntd_amount: txn.ntd_amount(),
            amount: txn.foreign_amount(),
            currency: txn.currency().to_string(),
            location: txn.txn_loc.clone(),
        }
    }

    fn foreign_fee_total(date: String, count: usize, total: Decimal) -> Self {
        Self {
            date,
            kind: RowKind::ForeignFeeTotal { count },
            description: format!("Foreign TX Fee ({count})"),
            ntd_amount: total,
            amount: total,
            currency: "NTD".into(),
            location: String::new(),
        }
    }

    pub(crate) fn category_label(&self) -> &'static str {
        match self.kind {
            RowKind::Transaction(category) => category.as_str(),
            RowKind::ForeignFeeTotal { .. } => "Fee",
        }
    }
}

fn compare(sort: SortMode, a: &Transaction, b: &Transaction) -> Ordering {
    match sort {
        SortMode::Date => a.txn_date.cmp(&b.txn_date),
        SortMode::Amount => b.effective_amount().cmp(&a.effective_amount()),
        SortMode::Location => a.txn_loc.cmp(&b.txn_loc),
        SortMode::Category => a.category().as_str().cmp(b.category().as_str()),
    }
}

/// Rows shown for a statement under the given sort mode and category filter.
///
/// Foreign transaction fees never appear individually. When no category
/// filter is active they are folded into one trailing total row.
pub(crate) fn derive_rows(stmt: &Statement, sort: SortMode, filter: Category) -> Vec<TxnRow> {
    let (fees, regular): (Vec<&Transaction>, Vec<&Transaction>) =
        stmt.transactions.iter().partition(|t| t.is_foreign_fee());

    let mut shown: Vec<&Transaction> = regular
        .into_iter()
        .filter(|t| filter == Category::All || t.category() == filter)
        .collect();
    shown.sort_by(|a, b| compare(sort, a, b));

    let mut rows: Vec<TxnRow> = shown
        .into_iter()
        .filter(|t| !t.is_online_banking_payment())
        .map(TxnRow::from_transaction)
        .collect();

    if filter == Category::All && !fees.is_empty() {
        let total = sum_amounts(fees.iter().map(|t| t.effective_amount()));
        let date = fees
            .first()
            .map(|t| t.txn_date.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or(stmt.stmt_date.as_str())
            .to_string();
        rows.push(TxnRow::foreign_fee_total(date, fees.len(), total));
    }

    rows
}
