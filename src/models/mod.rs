mod amount;
mod categorized;
mod category;
mod null_default;
mod statement;
mod transaction;

pub(crate) use amount::{parse_amount, sum_amounts};
pub(crate) use categorized::CategorizedTransactions;
pub(crate) use category::{Category, Provider};
pub(crate) use statement::Statement;
pub(crate) use transaction::{Enrichment, Transaction, FOREIGN_FEE_PREFIX};

#[cfg(test)]
mod tests;
