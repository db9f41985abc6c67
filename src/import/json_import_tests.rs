#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_json_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SAMPLE: &str = r#"[
  {
    "nationalId": "A123456789",
    "cardType": "VISA",
    "stmtMo": "03",
    "stmtYr": "2024",
    "pmtDue": "2024/04/15",
    "curTotAmt": "12,345",
    "minAmt": "1,235",
    "stmtDate": "2024/03/25",
    "creditLmt": "100,000",
    "message": "Thank you",
    "transactions": [
      {
        "amount": "450",
        "description": "APE1234 UBER TRIP",
        "amtCy": "",
        "txnLoc": "TW",
        "txnDate": "2024/03/02",
        "postingDate": "2024/03/04",
        "ntdAmount": "450",
        "cardNo": "1234",
        "isForeignTxn": false,
        "isInstallmentTxn": false
      },
      {
        "amount": "12.99",
        "description": "PAYPAL*STEAM",
        "amtCy": "USD",
        "txnLoc": "US",
        "txnDate": "2024/03/05",
        "ntdAmount": "415",
        "isForeignTxn": true
      }
    ]
  }
]"#;

// ── load_statements ───────────────────────────────────────────

#[test]
fn test_load_statements_basic() {
    let file = make_json_file(SAMPLE);
    let statements = load_statements(file.path()).unwrap();

    assert_eq!(statements.len(), 1);
    let stmt = &statements[0];
    assert_eq!(stmt.card_type, "VISA");
    assert_eq!(stmt.period(), "2024/03");
    assert_eq!(stmt.total_amount(), dec!(12345));
    assert_eq!(stmt.transactions.len(), 2);

    let txn = &stmt.transactions[1];
    assert_eq!(txn.description, "PAYPAL*STEAM");
    assert_eq!(txn.amt_cy, "USD");
    assert!(txn.is_foreign_txn);
    assert_eq!(txn.ntd_amount(), dec!(415));
}

#[test]
fn test_load_statements_missing_fields_default() {
    let file = make_json_file(r#"[{"stmtYr": "2024", "transactions": [{"description": "X"}]}]"#);
    let statements = load_statements(file.path()).unwrap();

    let stmt = &statements[0];
    assert_eq!(stmt.stmt_mo, "");
    assert_eq!(stmt.message, "");
    let txn = &stmt.transactions[0];
    assert_eq!(txn.amount, "");
    assert!(!txn.is_foreign_txn);
    assert_eq!(txn.currency(), "NTD");
}

#[test]
fn test_load_statements_without_transactions() {
    let file = make_json_file(r#"[{"stmtYr": "2024", "stmtMo": "01"}]"#);
    let statements = load_statements(file.path()).unwrap();
    assert!(statements[0].transactions.is_empty());
}

#[test]
fn test_load_statements_empty_array() {
    let file = make_json_file("[]");
    assert!(load_statements(file.path()).unwrap().is_empty());
}

#[test]
fn test_load_statements_starts_unenriched() {
    let file = make_json_file(SAMPLE);
    let statements = load_statements(file.path()).unwrap();
    assert!(statements[0].transactions[0].enrichment.is_none());
}

#[test]
fn test_load_statements_null_fields_default() {
    let file = make_json_file(
        r#"[{
            "stmtYr": "2024",
            "stmtMo": null,
            "message": null,
            "transactions": [{
                "description": "X",
                "amtCy": null,
                "ntdAmount": null,
                "isForeignTxn": null
            }]
        }]"#,
    );
    let statements = load_statements(file.path()).unwrap();

    let stmt = &statements[0];
    assert_eq!(stmt.stmt_yr, "2024");
    assert_eq!(stmt.stmt_mo, "");
    assert_eq!(stmt.message, "");
    let txn = &stmt.transactions[0];
    assert_eq!(txn.description, "X");
    assert_eq!(txn.amt_cy, "");
    assert_eq!(txn.currency(), "NTD");
    assert!(!txn.is_foreign_txn);
    assert_eq!(txn.ntd_amount(), rust_decimal::Decimal::ZERO);
}

#[test]
fn test_load_statements_null_transactions() {
    let file = make_json_file(r#"[{"stmtYr": "2024", "transactions": null}]"#);
    let statements = load_statements(file.path()).unwrap();
    assert!(statements[0].transactions.is_empty());
}

// ── Errors ────────────────────────────────────────────────────

#[test]
fn test_load_statements_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_statements(&path).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_load_statements_invalid_json() {
    let file = make_json_file("{ not json");
    let err = load_statements(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_load_statements_wrong_shape() {
    // An object where an array of statements is expected
    let file = make_json_file(r#"{"stmtYr": "2024"}"#);
    let err = load_statements(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}
