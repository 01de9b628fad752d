use chrono::NaiveDate;

use super::{Category, Transaction, TxnType, DATE_FORMAT};

/// Constraints narrowing which records are shown. `None` on a dimension
/// means no constraint; set dimensions are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Filter {
    pub(crate) kind: Option<TxnType>,
    pub(crate) category: Option<Category>,
    /// Inclusive lower bound.
    pub(crate) date_from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub(crate) date_to: Option<NaiveDate>,
}

impl Filter {
    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.map_or(true, |c| txn.category == c)
            && self.date_from.map_or(true, |from| txn.date >= from)
            && self.date_to.map_or(true, |to| txn.date <= to)
    }

    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Short human description, e.g. `"type=expense from=2023-01-01"`.
    pub(crate) fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(kind) = self.kind {
            parts.push(format!("type={kind}"));
        }
        if let Some(category) = self.category {
            parts.push(format!("category={category}"));
        }
        if let Some(from) = self.date_from {
            parts.push(format!("from={}", from.format(DATE_FORMAT)));
        }
        if let Some(to) = self.date_to {
            parts.push(format!("to={}", to.format(DATE_FORMAT)));
        }
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join(" ")
        }
    }
}
