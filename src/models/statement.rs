use rust_decimal::Decimal;
use serde::Deserialize;

use super::null_default::null_as_default;
use super::{parse_amount, Transaction};

/// One monthly credit card statement as exported by the bank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Statement {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) national_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) payment_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) card_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) stmt_mo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) stmt_yr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) pmt_due: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) cur_tot_amt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) min_amt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) stmt_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) int_rate: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) credit_lmt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) cash_adv_lmt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) pre_bal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) pre_adj_amt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) pre_tot_amt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) cur_inc_expense: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) cur_oth_expense: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) point_cur_pt_bal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) point_prebal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) point_cur_inc_pt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) point_cur_use_pt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) transactions: Vec<Transaction>,
}

impl Statement {
    /// Statement period as "YYYY/MM".
    pub(crate) fn period(&self) -> String {
        format!("{}/{}", self.stmt_yr, self.stmt_mo)
    }

    pub(crate) fn total_amount(&self) -> Decimal {
        parse_amount(&self.cur_tot_amt)
    }

    pub(crate) fn minimum_due(&self) -> Decimal {
        parse_amount(&self.min_amt)
    }

    pub(crate) fn credit_limit(&self) -> Decimal {
        parse_amount(&self.credit_lmt)
    }
}
