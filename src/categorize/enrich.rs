use crate::models::{CategorizedTransactions, Enrichment, Statement};
use crate::normalize::{clean_description, to_half_width};

use super::{apple_pay_card_last4, detect_category, detect_provider};

/// Derived fields for a raw description.
pub(crate) fn enrichment_for(description: &str) -> Enrichment {
    let normalized = to_half_width(description);
    let category = detect_category(clean_description(&normalized));
    let apple_pay_card_last4 = apple_pay_card_last4(&normalized);

    Enrichment {
        normalized_description: normalized,
        category,
        apple_pay_card_last4,
    }
}

/// Annotate every transaction and group copies of them by provider.
///
/// Visits statements in order, then transactions in order, so each bucket
/// keeps the input ordering. Transactions enriched earlier keep their
/// existing annotations.
pub(crate) fn enrich(statements: &mut [Statement]) -> CategorizedTransactions {
    let mut categorized = CategorizedTransactions::default();

    for stmt in statements.iter_mut() {
        for txn in stmt.transactions.iter_mut() {
            let provider = detect_provider(&txn.enrich_with(enrichment_for).normalized_description);
            categorized.push(provider, txn.clone());
        }
    }

    tracing::debug!(
        apple_pay = categorized.apple_pay.len(),
        paypal = categorized.paypal.len(),
        line_pay = categorized.line_pay.len(),
        jkopay = categorized.jkopay.len(),
        foreign_fees = categorized.foreign_fees.len(),
        other = categorized.other.len(),
        "categorized transactions"
    );

    categorized
}
