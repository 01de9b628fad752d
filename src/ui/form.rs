use chrono::NaiveDate;

use super::util::cycle;
use crate::ledger::ValidationError;
use crate::models::{Category, Transaction, TransactionInput, TxnType, DATE_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Date,
    Amount,
    Type,
    Category,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Date, Self::Amount, Self::Type, Self::Category]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Type => "Type",
            Self::Category => "Category",
        }
    }

    /// Choice fields cycle through a fixed list instead of taking text.
    pub(crate) fn is_choice(&self) -> bool {
        matches!(self, Self::Type | Self::Category)
    }
}

/// State of the add/edit popup. Date and amount are kept as typed text and
/// only parsed on submit.
#[derive(Debug, Clone)]
pub(crate) struct Form {
    /// `Some(id)` when editing an existing record.
    pub(crate) editing: Option<i64>,
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) kind: TxnType,
    pub(crate) category: Category,
    pub(crate) focus: FormField,
    pub(crate) error: Option<String>,
}

impl Form {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            editing: None,
            date: today.format(DATE_FORMAT).to_string(),
            amount: String::new(),
            kind: TxnType::all()[0],
            category: Category::all()[0],
            focus: FormField::Amount,
            error: None,
        }
    }

    pub(crate) fn edit(txn: &Transaction) -> Self {
        Self {
            editing: Some(txn.id),
            date: txn.date.format(DATE_FORMAT).to_string(),
            amount: txn.amount.to_string(),
            kind: txn.kind,
            category: txn.category,
            focus: FormField::Date,
            error: None,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Transaction"
        } else {
            "New Transaction"
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.focus = cycle(self.focus, FormField::all(), 1);
    }

    pub(crate) fn prev_field(&mut self) {
        self.focus = cycle(self.focus, FormField::all(), -1);
    }

    /// Type into the focused text field. On a choice field, space steps to
    /// the next option.
    pub(crate) fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Date => self.date.push(c),
            FormField::Amount => self.amount.push(c),
            FormField::Type | FormField::Category if c == ' ' => self.cycle_choice(1),
            _ => {}
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.focus {
            FormField::Date => {
                self.date.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            _ => {}
        }
    }

    pub(crate) fn cycle_choice(&mut self, delta: i32) {
        match self.focus {
            FormField::Type => self.kind = cycle(self.kind, TxnType::all(), delta),
            FormField::Category => self.category = cycle(self.category, Category::all(), delta),
            _ => {}
        }
    }

    /// Text shown for `field`.
    pub(crate) fn value(&self, field: FormField) -> String {
        match field {
            FormField::Date => self.date.clone(),
            FormField::Amount => self.amount.clone(),
            FormField::Type => self.kind.to_string(),
            FormField::Category => self.category.to_string(),
        }
    }

    pub(crate) fn to_input(&self) -> Result<TransactionInput, ValidationError> {
        TransactionInput::parse(
            &self.date,
            &self.amount,
            self.kind.as_str(),
            self.category.as_str(),
        )
    }
}
