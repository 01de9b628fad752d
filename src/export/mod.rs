use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{Transaction, DATE_FORMAT};

const HEADER: [&str; 5] = ["id", "date", "amount", "type", "category"];

/// Write `records` as CSV to `path`, replacing any existing file.
/// Returns the number of records written.
pub(crate) fn export_to_csv<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a Transaction>,
) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let count = write_csv(file, records)?;
    tracing::info!(path = %path.display(), count, "exported transactions");
    Ok(count)
}

pub(crate) fn write_csv<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a Transaction>,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)
        .context("Failed to write CSV header")?;

    let mut count = 0;
    for txn in records {
        wtr.write_record([
            txn.id.to_string(),
            txn.date.format(DATE_FORMAT).to_string(),
            txn.amount.to_string(),
            txn.kind.as_str().to_string(),
            txn.category.as_str().to_string(),
        ])
        .with_context(|| format!("Failed to write transaction {}", txn.id))?;
        count += 1;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(count)
}
