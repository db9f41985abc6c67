use rust_decimal::Decimal;
use serde::Deserialize;

use super::null_default::null_as_default;
use super::{parse_amount, Category};

/// Description prefix marking a foreign transaction fee line item.
pub(crate) const FOREIGN_FEE_PREFIX: &str = "國外交易手續費";

/// Description of the bill payment line, which carries no spending.
pub(crate) const ONLINE_BANKING_PAYMENT: &str = "網路銀行繳款";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Transaction {
    /// Amount in the original currency.
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) amt_cy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) txn_loc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) txn_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) cy_cnv_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) posting_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) ntd_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) is_foreign_txn: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) is_installment_txn: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) card_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) relation_ship: String,

    /// Derived fields, written once by `enrich_with`.
    #[serde(skip)]
    pub(crate) enrichment: Option<Enrichment>,
}

/// Fields derived from the raw description during enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Enrichment {
    pub(crate) normalized_description: String,
    pub(crate) category: Category,
    pub(crate) apple_pay_card_last4: Option<String>,
}

impl Transaction {
    /// Attach derived fields, computing them at most once.
    ///
    /// A transaction that already carries an enrichment keeps it; `derive` is
    /// not called again.
    pub(crate) fn enrich_with(&mut self, derive: impl FnOnce(&str) -> Enrichment) -> &Enrichment {
        let description = &self.description;
        self.enrichment.get_or_insert_with(|| derive(description))
    }

    /// Half-width description, or the raw description before enrichment.
    pub(crate) fn normalized_description(&self) -> &str {
        self.enrichment
            .as_ref()
            .map_or(self.description.as_str(), |e| e.normalized_description.as_str())
    }

    pub(crate) fn category(&self) -> Category {
        self.enrichment.as_ref().map_or(Category::Other, |e| e.category)
    }

    pub(crate) fn apple_pay_card_last4(&self) -> Option<&str> {
        self.enrichment
            .as_ref()
            .and_then(|e| e.apple_pay_card_last4.as_deref())
    }

    pub(crate) fn ntd_amount(&self) -> Decimal {
        parse_amount(&self.ntd_amount)
    }

    pub(crate) fn foreign_amount(&self) -> Decimal {
        parse_amount(&self.amount)
    }

    /// NTD amount, falling back to the original-currency amount when the NTD
    /// figure is zero or unparseable.
    pub(crate) fn effective_amount(&self) -> Decimal {
        let ntd = self.ntd_amount();
        if ntd.is_zero() {
            self.foreign_amount()
        } else {
            ntd
        }
    }

    pub(crate) fn currency(&self) -> &str {
        let cy = self.amt_cy.trim();
        if cy.is_empty() {
            "NTD"
        } else {
            cy
        }
    }

    pub(crate) fn is_foreign_fee(&self) -> bool {
        self.normalized_description().starts_with(FOREIGN_FEE_PREFIX)
    }

    pub(crate) fn is_online_banking_payment(&self) -> bool {
        self.normalized_description() == ONLINE_BANKING_PAYMENT
    }
}
