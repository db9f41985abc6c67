use std::fmt::Write as _;

use crate::models::{CategorizedTransactions, Provider, Statement};
use crate::ui::util::format_amount;

pub(crate) fn print_summary(statements: &[Statement], categorized: &CategorizedTransactions) {
    print!("{}", summary_report(statements, categorized));
}

/// Plain-text rendition of the summary view.
fn summary_report(statements: &[Statement], categorized: &CategorizedTransactions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, statements, categorized);
    out
}

fn write_report(
    out: &mut String,
    statements: &[Statement],
    c: &CategorizedTransactions,
) -> std::fmt::Result {
    writeln!(out, "Transaction Summary")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Statements:          {}", statements.len())?;
    writeln!(out, "  Apple Pay:           {}", c.apple_pay.len())?;
    writeln!(out, "  PayPal:              {}", c.paypal.len())?;
    writeln!(out, "  LINE Pay:            {}", c.line_pay.len())?;
    writeln!(out, "  Jkopay:              {}", c.jkopay.len())?;
    writeln!(out, "  Foreign fees:        {}", c.foreign_fees.len())?;
    writeln!(out, "  Other:               {}", c.other.len())?;

    writeln!(out)?;
    writeln!(out, "Apple Pay by Card:")?;
    let cards = c.apple_pay_by_card();
    if cards.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for card in &cards {
        writeln!(
            out,
            "  Card ending in {}: {} transactions, Total: NT${}",
            card.card_last4,
            card.count,
            format_amount(card.total)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Provider Totals:")?;
    for provider in [
        Provider::PayPal,
        Provider::LinePay,
        Provider::Jkopay,
        Provider::ForeignFee,
    ] {
        writeln!(
            out,
            "  {:<20} {:>4}  NT${}",
            provider.as_str(),
            c.bucket(provider).len(),
            format_amount(c.total(provider))
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
