use rust_decimal::Decimal;
use thiserror::Error;

/// Input that does not fit the transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown type '{0}', expected income or expense")]
    UnknownType(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("transaction {0} not found")]
    NotFound(i64),

    #[error("amount {0} is too large: ledger total would overflow")]
    TotalOverflow(Decimal),
}
