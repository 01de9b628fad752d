use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::App;
use super::util::expand_home;
use crate::ledger::Ledger;
use crate::models::{parse_date, Category, Filter, TransactionInput, TxnType};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Tally", cmd_quit, r);
    register_command!("quit", "Quit Tally", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (form, or :add 2023-01-03 200 income other)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add transaction (form, or :add 2023-01-03 200 income other)",
        cmd_add,
        r
    );
    register_command!(
        "edit",
        "Edit selected transaction (or :edit <id>)",
        cmd_edit,
        r
    );
    register_command!(
        "e",
        "Edit selected transaction (or :edit <id>)",
        cmd_edit,
        r
    );
    register_command!(
        "delete",
        "Delete selected transaction (or :delete <id>)",
        cmd_delete,
        r
    );
    register_command!(
        "del",
        "Delete selected transaction (or :delete <id>)",
        cmd_delete,
        r
    );
    register_command!(
        "type",
        "Filter by type (e.g. :type expense, :type to clear)",
        cmd_type,
        r
    );
    register_command!(
        "category",
        "Filter by category (e.g. :category bills)",
        cmd_category,
        r
    );
    register_command!(
        "cat",
        "Filter by category (e.g. :category bills)",
        cmd_category,
        r
    );
    register_command!(
        "from",
        "Only show dates on or after (e.g. :from 2023-01-01)",
        cmd_from,
        r
    );
    register_command!(
        "to",
        "Only show dates on or before (e.g. :to 2023-01-31)",
        cmd_to,
        r
    );
    register_command!("clear", "Clear all filters", cmd_clear, r);
    register_command!(
        "export",
        "Export shown transactions to CSV (e.g. :export ~/tally.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_new_form();
        return Ok(());
    }

    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != 4 {
        app.set_status("Usage: :add <date> <amount> <type> <category>");
        return Ok(());
    }

    match TransactionInput::parse(parts[0], parts[1], parts[2], parts[3]) {
        Ok(input) => match ledger.create(input) {
            Ok(txn) => {
                app.refresh(ledger);
                app.select_id(txn.id);
                app.set_status("Transaction added.");
            }
            Err(e) => app.set_status(format!("Not added: {e}")),
        },
        Err(e) => app.set_status(format!("Not added: {e}")),
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let target = if args.is_empty() {
        app.selected().cloned()
    } else {
        match args.parse::<i64>() {
            Ok(id) => ledger.get(id).cloned(),
            Err(_) => {
                app.set_status(format!("Invalid id: {args}"));
                return Ok(());
            }
        }
    };

    match target {
        Some(txn) => app.open_edit_form(&txn),
        None if args.is_empty() => app.set_status("Nothing selected"),
        None => app.set_status(format!("No transaction with id {args}")),
    }
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.delete_selected(ledger);
        return Ok(());
    }
    match args.parse::<i64>() {
        Ok(id) => app.delete(ledger, id),
        Err(_) => app.set_status(format!("Invalid id: {args}")),
    }
    Ok(())
}

fn cmd_type(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let kind = if args.is_empty() {
        None
    } else if let Some(kind) = TxnType::parse(args) {
        Some(kind)
    } else {
        app.set_status(format!("Unknown type '{args}'. Use income or expense"));
        return Ok(());
    };

    let filter = Filter {
        kind,
        ..app.filter.clone()
    };
    app.set_filter(ledger, filter);
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let category = if args.is_empty() {
        None
    } else if let Some(category) = Category::parse(args) {
        Some(category)
    } else {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Unknown category '{args}'. Available: {}",
            names.join(", ")
        ));
        return Ok(());
    };

    let filter = Filter {
        category,
        ..app.filter.clone()
    };
    app.set_filter(ledger, filter);
    Ok(())
}

fn cmd_from(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    set_date_bound(args, app, ledger, |f, d| f.date_from = d)
}

fn cmd_to(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    set_date_bound(args, app, ledger, |f, d| f.date_to = d)
}

fn set_date_bound(
    args: &str,
    app: &mut App,
    ledger: &Ledger,
    apply: fn(&mut Filter, Option<chrono::NaiveDate>),
) -> anyhow::Result<()> {
    let date = if args.is_empty() {
        None
    } else {
        match parse_date(args) {
            Ok(d) => Some(d),
            Err(e) => {
                app.set_status(e.to_string());
                return Ok(());
            }
        }
    };

    let mut filter = app.filter.clone();
    apply(&mut filter, date);
    app.set_filter(ledger, filter);
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.clear_filters(ledger);
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/tally-export.csv")
    } else {
        expand_home(args)
    };

    match crate::export::export_to_csv(Path::new(&path), &app.view) {
        Ok(0) => app.set_status(format!("Exported header only to {path} (no transactions shown)")),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
