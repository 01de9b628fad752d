use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::ledger::ValidationError;

/// Date format used for input, display and export.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TxnType {
    Income,
    Expense,
}

impl TxnType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Strict, case-insensitive lookup. Anything outside the enumeration is `None`.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [TxnType] {
        &[Self::Income, Self::Expense]
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Groceries,
    Bills,
    Salary,
    Entertainment,
    Healthcare,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Bills => "bills",
            Self::Salary => "salary",
            Self::Entertainment => "entertainment",
            Self::Healthcare => "healthcare",
            Self::Other => "other",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.as_str() == lower)
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Bills,
            Self::Salary,
            Self::Entertainment,
            Self::Healthcare,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) id: i64,
    pub(crate) date: NaiveDate,
    /// Always a magnitude. The sign comes from `kind`.
    pub(crate) amount: Decimal,
    pub(crate) kind: TxnType,
    pub(crate) category: Category,
}

impl Transaction {
    pub(crate) fn is_income(&self) -> bool {
        self.kind == TxnType::Income
    }

    /// Effect of this record on the balance.
    pub(crate) fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxnType::Income => self.amount,
            TxnType::Expense => -self.amount,
        }
    }
}

/// Everything a caller supplies to create or replace a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransactionInput {
    pub(crate) date: NaiveDate,
    pub(crate) amount: Decimal,
    pub(crate) kind: TxnType,
    pub(crate) category: Category,
}

impl TransactionInput {
    /// Build an input from raw text fields, rejecting anything that does not
    /// fit the record's types. Fields are checked in declaration order and the
    /// first failure is reported.
    pub(crate) fn parse(
        date: &str,
        amount: &str,
        kind: &str,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let input = Self {
            date: parse_date(date)?,
            amount: parse_amount(amount)?,
            kind: TxnType::parse(kind).ok_or_else(|| ValidationError::UnknownType(kind.into()))?,
            category: Category::parse(category)
                .ok_or_else(|| ValidationError::UnknownCategory(category.into()))?,
        };
        input.validate()?;
        Ok(input)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }

    pub(crate) fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.into()))
}

/// Parse an amount such as `"1234.50"`, `"$1,234.50"` or `"50"`.
/// Negative values parse; rejecting them is `TransactionInput::validate`'s job.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let cleaned = s.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidAmount(s.into()));
    }
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidAmount(s.into()))
}
