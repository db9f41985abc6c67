use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a monetary string leniently.
///
/// Statement exports carry every amount as a string. Thousands separators,
/// surrounding whitespace and exponent notation ("1.5e3") are tolerated;
/// anything else that fails to parse (including the empty string) becomes
/// zero.
pub(crate) fn parse_amount(s: &str) -> Decimal {
    let cleaned = s.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(cleaned)
        .or_else(|e| {
            if cleaned.contains(['e', 'E']) {
                Decimal::from_scientific(cleaned)
            } else {
                Err(e)
            }
        })
        .unwrap_or(Decimal::ZERO)
}

/// Sum amounts, clamping at the `Decimal` bounds instead of overflowing.
pub(crate) fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}
