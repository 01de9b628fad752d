mod filter;
mod transaction;

pub(crate) use filter::Filter;
pub(crate) use transaction::{
    parse_date, Category, Transaction, TransactionInput, TxnType, DATE_FORMAT,
};
