use chrono::Local;
use rust_decimal::Decimal;

use super::form::Form;
use super::util::{cycle_optional, scroll_to_top};
use crate::ledger::{Ledger, LedgerError};
use crate::models::{Category, Filter, Transaction, TxnType};
use crate::query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "FORM"),
        }
    }
}

/// Presentation state. Holds a copy of the current filtered view; the ledger
/// itself is passed in by the caller on every operation.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) filter: Filter,
    pub(crate) view: Vec<Transaction>,
    pub(crate) balance: Decimal,
    pub(crate) total_count: usize,

    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    pub(crate) form: Option<Form>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            filter: Filter::default(),
            view: Vec::new(),
            balance: Decimal::ZERO,
            total_count: 0,

            transaction_index: 0,
            transaction_scroll: 0,

            form: None,

            visible_rows: 20,
        }
    }

    /// Recompute the filtered view and the balance from the ledger.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        let records = ledger.snapshot();
        self.view = query::filter(records, &self.filter).cloned().collect();
        self.balance = query::balance(records);
        self.total_count = records.len();

        if self.transaction_index >= self.view.len() {
            self.transaction_index = self.view.len().saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    pub(crate) fn selected(&self) -> Option<&Transaction> {
        self.view.get(self.transaction_index)
    }

    /// Put the cursor on `id` if it is in the view.
    pub(crate) fn select_id(&mut self, id: i64) {
        if let Some(pos) = self.view.iter().position(|t| t.id == id) {
            self.transaction_index = pos;
            let page = self.visible_rows.max(1);
            if pos < self.transaction_scroll {
                self.transaction_scroll = pos;
            } else if pos >= self.transaction_scroll + page {
                self.transaction_scroll = pos + 1 - page;
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    // ── Form ──────────────────────────────────────────────────

    pub(crate) fn open_new_form(&mut self) {
        self.form = Some(Form::new(Local::now().date_naive()));
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn open_edit_form(&mut self, txn: &Transaction) {
        self.form = Some(Form::edit(txn));
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn close_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Create or update from the open form. On failure the form stays open
    /// and carries the error; nothing in the ledger changes.
    pub(crate) fn submit_form(&mut self, ledger: &mut Ledger) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let editing = form.editing;
        let result = form
            .to_input()
            .map_err(LedgerError::from)
            .and_then(|input| match editing {
                Some(id) => ledger.update(id, input),
                None => ledger.create(input),
            });

        match result {
            Ok(txn) => {
                self.close_form();
                self.refresh(ledger);
                self.select_id(txn.id);
                let verb = if editing.is_some() { "updated" } else { "added" };
                self.set_status(format!("Transaction {verb}."));
            }
            Err(e) => {
                if let Some(form) = self.form.as_mut() {
                    form.error = Some(e.to_string());
                }
            }
        }
    }

    // ── Mutations outside the form ────────────────────────────

    pub(crate) fn delete(&mut self, ledger: &mut Ledger, id: i64) {
        match ledger.delete(id) {
            Some(_) => {
                self.refresh(ledger);
                self.set_status("Transaction deleted.");
            }
            None => self.set_status(format!("No transaction with id {id}")),
        }
    }

    pub(crate) fn delete_selected(&mut self, ledger: &mut Ledger) {
        match self.selected().map(|t| t.id) {
            Some(id) => self.delete(ledger, id),
            None => self.set_status("Nothing selected"),
        }
    }

    // ── Filters ───────────────────────────────────────────────

    pub(crate) fn set_filter(&mut self, ledger: &Ledger, filter: Filter) {
        self.filter = filter;
        scroll_to_top(&mut self.transaction_index, &mut self.transaction_scroll);
        self.refresh(ledger);
        self.set_status(format!(
            "Filter: {} ({} of {})",
            self.filter.describe(),
            self.view.len(),
            self.total_count
        ));
    }

    pub(crate) fn cycle_type_filter(&mut self, ledger: &Ledger) {
        let mut filter = self.filter.clone();
        filter.kind = cycle_optional(filter.kind, TxnType::all());
        self.set_filter(ledger, filter);
    }

    pub(crate) fn cycle_category_filter(&mut self, ledger: &Ledger) {
        let mut filter = self.filter.clone();
        filter.category = cycle_optional(filter.category, Category::all());
        self.set_filter(ledger, filter);
    }

    pub(crate) fn clear_filters(&mut self, ledger: &Ledger) {
        self.set_filter(ledger, Filter::default());
    }
}
