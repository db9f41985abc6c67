use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::{sum_amounts, Provider, Transaction};

/// Transactions grouped by payment provider. Built once by enrichment and
/// only read afterwards.
#[derive(Debug, Clone, Default)]
pub(crate) struct CategorizedTransactions {
    pub(crate) apple_pay: Vec<Transaction>,
    pub(crate) paypal: Vec<Transaction>,
    pub(crate) line_pay: Vec<Transaction>,
    pub(crate) jkopay: Vec<Transaction>,
    pub(crate) foreign_fees: Vec<Transaction>,
    pub(crate) other: Vec<Transaction>,
}

/// Apple Pay spending for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardSummary {
    pub(crate) card_last4: String,
    pub(crate) count: usize,
    pub(crate) total: Decimal,
}

impl CategorizedTransactions {
    pub(crate) fn bucket(&self, provider: Provider) -> &[Transaction] {
        match provider {
            Provider::ApplePay => &self.apple_pay,
            Provider::PayPal => &self.paypal,
            Provider::LinePay => &self.line_pay,
            Provider::Jkopay => &self.jkopay,
            Provider::ForeignFee => &self.foreign_fees,
            Provider::Other => &self.other,
        }
    }

    pub(crate) fn push(&mut self, provider: Provider, txn: Transaction) {
        let bucket = match provider {
            Provider::ApplePay => &mut self.apple_pay,
            Provider::PayPal => &mut self.paypal,
            Provider::LinePay => &mut self.line_pay,
            Provider::Jkopay => &mut self.jkopay,
            Provider::ForeignFee => &mut self.foreign_fees,
            Provider::Other => &mut self.other,
        };
        bucket.push(txn);
    }

    pub(crate) fn len(&self) -> usize {
        Provider::all().iter().map(|p| self.bucket(*p).len()).sum()
    }

    /// Sum of effective amounts in one bucket.
    pub(crate) fn total(&self, provider: Provider) -> Decimal {
        sum_amounts(self.bucket(provider).iter().map(Transaction::effective_amount))
    }

    /// Apple Pay transactions grouped by card, ordered by card key.
    /// Transactions without a detected card are grouped under "Unknown".
    pub(crate) fn apple_pay_by_card(&self) -> Vec<CardSummary> {
        let mut by_card: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();
        for txn in &self.apple_pay {
            let key = txn.apple_pay_card_last4().unwrap_or("Unknown");
            let entry = by_card.entry(key).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 = entry.1.saturating_add(txn.effective_amount());
        }

        by_card
            .into_iter()
            .map(|(card, (count, total))| CardSummary {
                card_last4: card.to_string(),
                count,
                total,
            })
            .collect()
    }
}
