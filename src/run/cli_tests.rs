#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_filter_args_empty() {
    let (filter, positional) = parse_filter_args(&[]).unwrap();
    assert!(filter.is_empty());
    assert!(positional.is_empty());
}

#[test]
fn test_parse_filter_args_all_flags() {
    let (filter, positional) = parse_filter_args(&args(&[
        "out.csv",
        "--type",
        "Expense",
        "--category",
        "bills",
        "--from",
        "2023-01-01",
        "--to",
        "2023-01-31",
    ]))
    .unwrap();

    assert_eq!(positional, args(&["out.csv"]));
    assert_eq!(filter.kind, Some(TxnType::Expense));
    assert_eq!(filter.category, Some(Category::Bills));
    assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2023, 1, 1));
    assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2023, 1, 31));
}

#[test]
fn test_parse_filter_args_rejects_bad_values() {
    let err = parse_filter_args(&args(&["--type", "transfer"])).unwrap_err();
    assert!(err.to_string().contains("Unknown type"));

    let err = parse_filter_args(&args(&["--category", "rent"])).unwrap_err();
    assert!(err.to_string().contains("Available: groceries"));

    let err = parse_filter_args(&args(&["--from", "01/02/2023"])).unwrap_err();
    assert!(err.to_string().contains("invalid date"));
}

#[test]
fn test_parse_filter_args_missing_value() {
    let err = parse_filter_args(&args(&["--to"])).unwrap_err();
    assert_eq!(err.to_string(), "Missing value for --to");
}

#[test]
fn test_unknown_command_fails() {
    let ledger = Ledger::seeded().unwrap();
    let err = as_cli(&args(&["frobnicate"]), &ledger).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: frobnicate");
}

#[test]
fn test_read_only_commands_succeed() {
    let ledger = Ledger::seeded().unwrap();
    assert!(as_cli(&args(&["list"]), &ledger).is_ok());
    assert!(as_cli(&args(&["list", "--type", "income"]), &ledger).is_ok());
    assert!(as_cli(&args(&["balance"]), &ledger).is_ok());
    assert!(as_cli(&args(&["categories"]), &ledger).is_ok());
    assert!(as_cli(&args(&["version"]), &ledger).is_ok());
}

#[test]
fn test_list_rejects_stray_argument() {
    let ledger = Ledger::seeded().unwrap();
    assert!(as_cli(&args(&["list", "extra"]), &ledger).is_err());
}

#[test]
fn test_export_filtered() {
    let ledger = Ledger::seeded().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let path_str = path.to_str().unwrap();

    as_cli(&args(&["export", path_str, "--type", "expense"]), &ledger).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "id,date,amount,type,category\n2,2023-01-02,50,expense,groceries\n"
    );
}

#[test]
fn test_export_requires_path() {
    let ledger = Ledger::seeded().unwrap();
    let err = as_cli(&args(&["export", "--type", "income"]), &ledger).unwrap_err();
    assert!(err.to_string().starts_with("Usage: tally export"));
}
