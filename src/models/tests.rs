#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::categorized::CardSummary;
use super::transaction::ONLINE_BANKING_PAYMENT;
use super::*;

fn make_txn(ntd: &str, amount: &str) -> Transaction {
    Transaction {
        description: "TEST".into(),
        ntd_amount: ntd.into(),
        amount: amount.into(),
        ..Default::default()
    }
}

fn enriched(desc: &str, card: Option<&str>, ntd: &str) -> Transaction {
    let mut txn = Transaction {
        description: desc.into(),
        ntd_amount: ntd.into(),
        ..Default::default()
    };
    txn.enrich_with(|d| Enrichment {
        normalized_description: d.to_string(),
        category: Category::Other,
        apple_pay_card_last4: card.map(str::to_string),
    });
    txn
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("123.45"), dec!(123.45));
    assert_eq!(parse_amount("-20"), dec!(-20));
}

#[test]
fn test_parse_amount_thousands_and_whitespace() {
    assert_eq!(parse_amount(" 1,234.50 "), dec!(1234.50));
}

#[test]
fn test_parse_amount_defaults_to_zero() {
    assert_eq!(parse_amount(""), Decimal::ZERO);
    assert_eq!(parse_amount("   "), Decimal::ZERO);
    assert_eq!(parse_amount("N/A"), Decimal::ZERO);
    assert_eq!(parse_amount("12.3.4"), Decimal::ZERO);
}

#[test]
fn test_parse_amount_exponent() {
    assert_eq!(parse_amount("1e3"), dec!(1000));
    assert_eq!(parse_amount("2.5E2"), dec!(250));
    assert_eq!(parse_amount("1.5e-2"), dec!(0.015));
    assert_eq!(parse_amount("e3"), Decimal::ZERO);
}

// ── sum_amounts ───────────────────────────────────────────────

#[test]
fn test_sum_amounts_basic() {
    assert_eq!(sum_amounts([dec!(1.25), dec!(2), dec!(-0.25)]), dec!(3));
    assert_eq!(sum_amounts(Vec::<Decimal>::new()), Decimal::ZERO);
}

#[test]
fn test_sum_amounts_clamps_at_bounds() {
    assert_eq!(sum_amounts([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
    assert_eq!(sum_amounts([Decimal::MIN, dec!(-1)]), Decimal::MIN);
}

// ── Transaction amounts ───────────────────────────────────────

#[test]
fn test_effective_amount_prefers_ntd() {
    assert_eq!(make_txn("300", "10.00").effective_amount(), dec!(300));
}

#[test]
fn test_effective_amount_falls_back_on_zero() {
    assert_eq!(make_txn("0", "30").effective_amount(), dec!(30));
    assert_eq!(make_txn("0.00", "30").effective_amount(), dec!(30));
}

#[test]
fn test_effective_amount_falls_back_on_garbage() {
    assert_eq!(make_txn("", "42.10").effective_amount(), dec!(42.10));
    assert_eq!(make_txn("abc", "").effective_amount(), Decimal::ZERO);
}

#[test]
fn test_currency_defaults_to_ntd() {
    let mut txn = make_txn("1", "1");
    assert_eq!(txn.currency(), "NTD");
    txn.amt_cy = "  ".into();
    assert_eq!(txn.currency(), "NTD");
    txn.amt_cy = " EUR ".into();
    assert_eq!(txn.currency(), "EUR");
}

// ── Enrichment ────────────────────────────────────────────────

#[test]
fn test_unenriched_defaults() {
    let txn = Transaction {
        description: "RAW".into(),
        ..Default::default()
    };
    assert!(txn.enrichment.is_none());
    assert_eq!(txn.normalized_description(), "RAW");
    assert_eq!(txn.category(), Category::Other);
    assert_eq!(txn.apple_pay_card_last4(), None);
}

#[test]
fn test_enrich_with_runs_once() {
    let mut txn = Transaction {
        description: "UBER".into(),
        ..Default::default()
    };
    txn.enrich_with(|d| Enrichment {
        normalized_description: d.to_string(),
        category: Category::Transport,
        apple_pay_card_last4: None,
    });

    let mut called = false;
    let kept = txn
        .enrich_with(|_| {
            called = true;
            Enrichment {
                normalized_description: "OVERWRITTEN".into(),
                category: Category::Food,
                apple_pay_card_last4: Some("0000".into()),
            }
        })
        .clone();

    assert!(!called);
    assert_eq!(kept.category, Category::Transport);
    assert_eq!(txn.normalized_description(), "UBER");
}

#[test]
fn test_foreign_fee_and_banking_markers() {
    assert!(enriched("國外交易手續費", None, "10").is_foreign_fee());
    assert!(!enriched("STORE", None, "10").is_foreign_fee());
    assert!(enriched(ONLINE_BANKING_PAYMENT, None, "-5000").is_online_banking_payment());
    assert!(!enriched("網路銀行繳款 X", None, "1").is_online_banking_payment());
}

// ── Statement ─────────────────────────────────────────────────

#[test]
fn test_statement_period_and_totals() {
    let stmt = Statement {
        stmt_yr: "2024".into(),
        stmt_mo: "03".into(),
        cur_tot_amt: "12,345".into(),
        min_amt: "1234.5".into(),
        credit_lmt: "".into(),
        ..Default::default()
    };
    assert_eq!(stmt.period(), "2024/03");
    assert_eq!(stmt.total_amount(), dec!(12345));
    assert_eq!(stmt.minimum_due(), dec!(1234.5));
    assert_eq!(stmt.credit_limit(), Decimal::ZERO);
}

// ── Category / Provider ───────────────────────────────────────

#[test]
fn test_category_display() {
    assert_eq!(Category::ForeignFee.to_string(), "ForeignFee");
    assert_eq!(Category::All.to_string(), "All");
}

#[test]
fn test_filter_order() {
    let names: Vec<&str> = Category::filters().iter().map(Category::as_str).collect();
    assert_eq!(
        names,
        ["All", "Food", "Transport", "Shopping", "Travel", "Utilities", "Other"]
    );
}

#[test]
fn test_provider_display() {
    assert_eq!(Provider::LinePay.to_string(), "LINE Pay");
    assert_eq!(Provider::all().len(), 6);
}

// ── CategorizedTransactions ───────────────────────────────────

#[test]
fn test_categorized_push_and_bucket() {
    let mut c = CategorizedTransactions::default();
    c.push(Provider::Jkopay, make_txn("10", "10"));
    c.push(Provider::Jkopay, make_txn("5", "5"));
    c.push(Provider::Other, make_txn("1", "1"));

    assert_eq!(c.bucket(Provider::Jkopay).len(), 2);
    assert_eq!(c.bucket(Provider::Other).len(), 1);
    assert_eq!(c.len(), 3);
    assert_eq!(c.total(Provider::Jkopay), dec!(15));
    assert_eq!(c.total(Provider::PayPal), Decimal::ZERO);
}

#[test]
fn test_apple_pay_by_card() {
    let mut c = CategorizedTransactions::default();
    c.push(Provider::ApplePay, enriched("APE9999A", Some("9999"), "100"));
    c.push(Provider::ApplePay, enriched("APEB", None, "7"));
    c.push(Provider::ApplePay, enriched("APE1234C", Some("1234"), "20"));
    c.push(Provider::ApplePay, enriched("APE1234D", Some("1234"), "30.5"));

    let cards = c.apple_pay_by_card();

    assert_eq!(
        cards,
        vec![
            CardSummary {
                card_last4: "1234".into(),
                count: 2,
                total: dec!(50.5),
            },
            CardSummary {
                card_last4: "9999".into(),
                count: 1,
                total: dec!(100),
            },
            CardSummary {
                card_last4: "Unknown".into(),
                count: 1,
                total: dec!(7),
            },
        ]
    );
}

#[test]
fn test_categorized_totals_clamp_on_huge_amounts() {
    let huge = "79228162514264337593543950335";
    let mut c = CategorizedTransactions::default();
    c.push(Provider::PayPal, make_txn(huge, "0"));
    c.push(Provider::PayPal, make_txn(huge, "0"));
    c.push(Provider::ApplePay, enriched("APE1234A", Some("1234"), huge));
    c.push(Provider::ApplePay, enriched("APE1234B", Some("1234"), huge));

    assert_eq!(c.total(Provider::PayPal), Decimal::MAX);
    let cards = c.apple_pay_by_card();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].count, 2);
    assert_eq!(cards[0].total, Decimal::MAX);
}
