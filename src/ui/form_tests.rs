#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, InputMode};
use super::form::*;
use crate::ledger::{Ledger, ValidationError};
use crate::models::{parse_date, Category, TxnType};

fn today() -> chrono::NaiveDate {
    parse_date("2023-01-03").unwrap()
}

fn type_str(form: &mut Form, s: &str) {
    for c in s.chars() {
        form.input_char(c);
    }
}

// ── Form ──────────────────────────────────────────────────────

#[test]
fn test_new_form_defaults() {
    let form = Form::new(today());
    assert_eq!(form.title(), "New Transaction");
    assert_eq!(form.date, "2023-01-03");
    assert!(form.amount.is_empty());
    assert_eq!(form.kind, TxnType::Income);
    assert_eq!(form.category, Category::Groceries);
    assert_eq!(form.focus, FormField::Amount);
}

#[test]
fn test_field_navigation_wraps() {
    let mut form = Form::new(today());
    form.next_field();
    assert_eq!(form.focus, FormField::Type);
    form.next_field();
    form.next_field();
    assert_eq!(form.focus, FormField::Date);
    form.prev_field();
    assert_eq!(form.focus, FormField::Category);
}

#[test]
fn test_typing_only_affects_text_fields() {
    let mut form = Form::new(today());
    type_str(&mut form, "12.5");
    form.backspace();
    assert_eq!(form.amount, "12.");

    form.focus = FormField::Type;
    type_str(&mut form, "x");
    assert_eq!(form.kind, TxnType::Income);
    form.input_char(' ');
    assert_eq!(form.kind, TxnType::Expense);
}

#[test]
fn test_cycle_choices() {
    let mut form = Form::new(today());
    form.focus = FormField::Category;
    form.cycle_choice(-1);
    assert_eq!(form.category, Category::Other);
    form.cycle_choice(1);
    form.cycle_choice(1);
    assert_eq!(form.category, Category::Bills);
    assert_eq!(form.value(FormField::Category), "bills");
}

#[test]
fn test_to_input_errors() {
    let mut form = Form::new(today());
    assert_eq!(
        form.to_input(),
        Err(ValidationError::InvalidAmount(String::new()))
    );
    type_str(&mut form, "-3");
    assert_eq!(
        form.to_input(),
        Err(ValidationError::NegativeAmount(dec!(-3)))
    );
}

// ── Submitting through the app ────────────────────────────────

fn setup() -> (App, Ledger) {
    let ledger = Ledger::seeded().unwrap();
    let mut app = App::new();
    app.refresh(&ledger);
    (app, ledger)
}

#[test]
fn test_submit_new() {
    let (mut app, mut ledger) = setup();
    let mut form = Form::new(today());
    type_str(&mut form, "200");
    form.focus = FormField::Category;
    form.cycle_choice(-1);
    app.form = Some(form);
    app.input_mode = InputMode::Form;

    app.submit_form(&mut ledger);

    assert!(app.form.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Transaction added.");
    let created = ledger.get(3).unwrap();
    assert_eq!(created.amount, dec!(200));
    assert_eq!(created.category, Category::Other);
    assert_eq!(app.balance, dec!(1150));
}

#[test]
fn test_submit_edit_keeps_id_and_position() {
    let (mut app, mut ledger) = setup();
    let txn = ledger.get(1).cloned().unwrap();
    app.open_edit_form(&txn);
    let form = app.form.as_mut().unwrap();
    form.focus = FormField::Amount;
    form.amount.clear();
    type_str(form, "900");

    app.submit_form(&mut ledger);

    assert_eq!(app.status_message, "Transaction updated.");
    assert_eq!(ledger.snapshot()[0].id, 1);
    assert_eq!(ledger.snapshot()[0].amount, dec!(900));
    assert_eq!(app.balance, dec!(850));
}

#[test]
fn test_submit_invalid_keeps_form_open() {
    let (mut app, mut ledger) = setup();
    app.open_new_form();
    let form = app.form.as_mut().unwrap();
    form.date = "not a date".into();
    type_str(form, "10");

    app.submit_form(&mut ledger);

    assert_eq!(app.input_mode, InputMode::Form);
    let error = app.form.as_ref().unwrap().error.clone().unwrap();
    assert!(error.contains("invalid date"));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_submit_overflowing_amount_keeps_form_open() {
    let (mut app, mut ledger) = setup();
    app.open_new_form();
    type_str(app.form.as_mut().unwrap(), "79228162514264337593543950335");

    app.submit_form(&mut ledger);

    assert_eq!(app.input_mode, InputMode::Form);
    let error = app.form.as_ref().unwrap().error.clone().unwrap();
    assert!(error.contains("too large"));
    assert_eq!(ledger.len(), 2);
    assert_eq!(app.balance, dec!(950));
}

#[test]
fn test_cursor_column_counts_chars() {
    use crate::ui::screens::form::cursor_column;
    assert_eq!(cursor_column(""), 13);
    assert_eq!(cursor_column("12.50"), 18);
    assert_eq!(cursor_column("€5"), cursor_column("$5"));
}
