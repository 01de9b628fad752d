mod error;

pub(crate) use error::{LedgerError, ValidationError};

use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionInput};

/// The authoritative, insertion-ordered collection of transactions.
///
/// Ids are assigned as one more than the largest live id, so deleting the
/// newest record and creating another hands out the same id again.
///
/// The sum of all amounts always fits in a `Decimal`, so any signed or
/// per-category sum over the records does too.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    records: Vec<Transaction>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The two records a fresh session starts with.
    pub(crate) fn seeded() -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        ledger.create(TransactionInput::parse("2023-01-01", "1000", "income", "salary")?)?;
        ledger.create(TransactionInput::parse("2023-01-02", "50", "expense", "groceries")?)?;
        Ok(ledger)
    }

    // ── Reads ─────────────────────────────────────────────────

    pub(crate) fn snapshot(&self) -> &[Transaction] {
        &self.records
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn next_id(&self) -> i64 {
        self.records.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    // ── Mutations ─────────────────────────────────────────────

    pub(crate) fn create(&mut self, input: TransactionInput) -> Result<Transaction, LedgerError> {
        if let Err(e) = input.validate() {
            tracing::warn!(error = %e, "rejected new transaction");
            return Err(e.into());
        }
        self.check_total(input.amount, None)?;

        let txn = input.into_transaction(self.next_id());
        tracing::info!(
            id = txn.id,
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "transaction created"
        );
        self.records.push(txn.clone());
        Ok(txn)
    }

    pub(crate) fn update(
        &mut self,
        id: i64,
        input: TransactionInput,
    ) -> Result<Transaction, LedgerError> {
        let Some(pos) = self.records.iter().position(|t| t.id == id) else {
            tracing::warn!(id, "update of unknown transaction");
            return Err(LedgerError::NotFound(id));
        };
        if let Err(e) = input.validate() {
            tracing::warn!(id, error = %e, "rejected transaction update");
            return Err(e.into());
        }
        self.check_total(input.amount, Some(pos))?;

        let txn = input.into_transaction(id);
        tracing::info!(
            id,
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "transaction updated"
        );
        self.records[pos] = txn.clone();
        Ok(txn)
    }

    /// Fail if adding `amount` to the other records' total would overflow.
    /// `replacing` is the position of a record the amount stands in for.
    fn check_total(&self, amount: Decimal, replacing: Option<usize>) -> Result<(), LedgerError> {
        let total = self
            .records
            .iter()
            .enumerate()
            .filter(|(pos, _)| Some(*pos) != replacing)
            .try_fold(Decimal::ZERO, |acc, (_, t)| acc.checked_add(t.amount))
            .and_then(|acc| acc.checked_add(amount));

        if total.is_none() {
            tracing::warn!(%amount, "rejected amount: ledger total would overflow");
            return Err(LedgerError::TotalOverflow(amount));
        }
        Ok(())
    }

    /// Remove the record with `id`. An unknown id is not an error: the call
    /// simply has no effect and returns `None`.
    pub(crate) fn delete(&mut self, id: i64) -> Option<Transaction> {
        match self.records.iter().position(|t| t.id == id) {
            Some(pos) => {
                let removed = self.records.remove(pos);
                tracing::info!(id, "transaction deleted");
                Some(removed)
            }
            None => {
                tracing::debug!(id, "delete of unknown transaction ignored");
                None
            }
        }
    }
}
