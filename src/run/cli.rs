use anyhow::{Context, Result};
use std::path::Path;

use crate::ledger::Ledger;
use crate::models::{parse_date, Category, Filter, TxnType, DATE_FORMAT};
use crate::query;
use crate::ui::util::{expand_home, format_amount};

pub(crate) fn as_cli(args: &[String], ledger: &Ledger) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "list" | "ls" => cli_list(&args[1..], ledger),
        "balance" | "b" => cli_balance(ledger),
        "export" => cli_export(&args[1..], ledger),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Tally - in-memory income and expense tracker");
    println!();
    println!("Usage: tally [--empty] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  list [filters]                Print transactions and the balance");
    println!("  balance                       Print balance, totals and per-category sums");
    println!("  export <file.csv> [filters]   Write the filtered transactions as CSV");
    println!("  categories                    List transaction types and categories");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Filters:");
    println!("  --type <income|expense>");
    println!("  --category <name>");
    println!("  --from <YYYY-MM-DD>           Inclusive lower date bound");
    println!("  --to <YYYY-MM-DD>             Inclusive upper date bound");
    println!();
    println!("Options:");
    println!("  --empty                       Start without the sample records");
    println!();
    println!("Environment:");
    println!("  TALLY_LOG_FILE                Log file for the TUI");
    println!("  RUST_LOG                      Log filter (default: warn for CLI, info for TUI)");
}

/// Build a [`Filter`] from `--type`, `--category`, `--from` and `--to` flags.
/// Anything else is returned as a positional argument.
pub(crate) fn parse_filter_args(args: &[String]) -> Result<(Filter, Vec<String>)> {
    let mut filter = Filter::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        if !matches!(flag, "--type" | "--category" | "--from" | "--to") {
            positional.push(arg.clone());
            continue;
        }
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing value for {flag}"))?;
        match flag {
            "--type" => {
                filter.kind = Some(TxnType::parse(value).ok_or_else(|| {
                    anyhow::anyhow!("Unknown type '{value}'. Use income or expense")
                })?);
            }
            "--category" => {
                filter.category = Some(Category::parse(value).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown category '{value}'. Available: {}",
                        category_names().join(", ")
                    )
                })?);
            }
            "--from" => filter.date_from = Some(parse_date(value)?),
            _ => filter.date_to = Some(parse_date(value)?),
        }
    }

    Ok((filter, positional))
}

fn category_names() -> Vec<&'static str> {
    Category::all().iter().map(|c| c.as_str()).collect()
}

fn cli_list(args: &[String], ledger: &Ledger) -> Result<()> {
    let (filter, extra) = parse_filter_args(args)?;
    if let Some(arg) = extra.first() {
        anyhow::bail!("Unexpected argument: {arg}");
    }

    let shown: Vec<_> = query::filter(ledger.snapshot(), &filter).collect();
    if ledger.is_empty() {
        println!("No transactions yet");
    } else if shown.is_empty() {
        println!("No transactions ({})", filter.describe());
    } else {
        println!(
            "{:>4}  {:<10}  {:>14}  {:<8} Category",
            "ID", "Date", "Amount", "Type"
        );
        println!("{}", "─".repeat(55));
        for txn in &shown {
            println!(
                "{:>4}  {:<10}  {:>14}  {:<8} {}",
                txn.id,
                txn.date.format(DATE_FORMAT),
                format_amount(txn.amount),
                txn.kind.as_str(),
                txn.category,
            );
        }
    }

    println!();
    if !filter.is_empty() {
        println!("Filter:   {}", filter.describe());
        println!("Shown:    {} of {}", shown.len(), ledger.len());
    }
    println!(
        "Balance:  {}",
        format_amount(query::balance(ledger.snapshot()))
    );
    Ok(())
}

fn cli_balance(ledger: &Ledger) -> Result<()> {
    let records = ledger.snapshot();
    let totals = query::totals(records);
    let breakdown = query::by_category(records);

    println!("Tally");
    println!("{}", "─".repeat(40));
    println!("  Income:     {}", format_amount(totals.income));
    println!("  Expenses:   {}", format_amount(totals.expenses));
    println!("  Balance:    {}", format_amount(totals.net()));
    println!("  Total Txns: {}", ledger.len());

    if !breakdown.is_empty() {
        println!();
        println!("By Category:");
        for (category, amount) in &breakdown {
            println!("  {:<24} {}", category.as_str(), format_amount(*amount));
        }
    }
    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger) -> Result<()> {
    let (filter, positional) = parse_filter_args(args)?;
    let output_path = match positional.as_slice() {
        [path] => expand_home(path),
        [] => anyhow::bail!("Usage: tally export <file.csv> [filters]"),
        [_, extra, ..] => anyhow::bail!("Unexpected argument: {extra}"),
    };

    let count = crate::export::export_to_csv(
        Path::new(&output_path),
        query::filter(ledger.snapshot(), &filter),
    )
    .with_context(|| format!("Export to {output_path} failed"))?;

    if count == 0 {
        println!("No transactions matched; wrote header only to {output_path}");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

fn cli_categories() {
    let types: Vec<&str> = TxnType::all().iter().map(|t| t.as_str()).collect();
    println!("Types:      {}", types.join(", "));
    println!("Categories: {}", category_names().join(", "));
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
