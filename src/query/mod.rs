//! Read-only views over a ledger snapshot.

use rust_decimal::Decimal;

use crate::models::{Category, Filter, Transaction};

/// Records matching every constraint in `spec`, in their original order.
pub(crate) fn filter<'a>(
    records: &'a [Transaction],
    spec: &'a Filter,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    records.iter().filter(move |t| spec.matches(t))
}

/// Signed sum of every record: income adds, expense subtracts.
///
/// Pass the full snapshot, not a filtered view; the balance is a property of
/// the whole ledger.
pub(crate) fn balance(records: &[Transaction]) -> Decimal {
    records
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc + t.signed_amount())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    /// Magnitude of all expenses.
    pub(crate) expenses: Decimal,
}

impl Totals {
    pub(crate) fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

pub(crate) fn totals<'a>(records: impl IntoIterator<Item = &'a Transaction>) -> Totals {
    records.into_iter().fold(Totals::default(), |mut acc, t| {
        if t.is_income() {
            acc.income += t.amount;
        } else {
            acc.expenses += t.amount;
        }
        acc
    })
}

/// Signed total per category, in `Category::all()` order. Categories with no
/// records are left out.
pub(crate) fn by_category<'a>(
    records: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(Category, Decimal)> {
    let records: Vec<&Transaction> = records.into_iter().collect();
    Category::all()
        .iter()
        .filter_map(|&cat| {
            let mut matched = records.iter().filter(|t| t.category == cat).peekable();
            matched.peek()?;
            Some((cat, matched.fold(Decimal::ZERO, |acc, t| acc + t.signed_amount())))
        })
        .collect()
}
