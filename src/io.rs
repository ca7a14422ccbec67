//! Delimited-text loaders producing report tables.
use std::path::Path;

use anyhow::{Context, Result};

use crate::table::DataTable;

/// Read a comma-separated file with a header row into a [`DataTable`].
pub fn read_csv_table<P: AsRef<Path>>(path: P) -> Result<DataTable> {
    read_delimited_table(path, b',')
}

/// Read a tab-separated file with a header row into a [`DataTable`].
pub fn read_tsv_table<P: AsRef<Path>>(path: P) -> Result<DataTable> {
    read_delimited_table(path, b'\t')
}

/// Read a delimited file with a header row into a [`DataTable`].
///
/// Header names become column names; every record becomes one row of string
/// cells.
pub fn read_delimited_table<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<DataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open table file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read table header row")?
        .clone();
    let mut table = DataTable::new(headers.iter().map(str::to_string).collect());

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        table
            .push_row(record.iter().map(str::to_string).collect())
            .with_context(|| format!("Malformed row {}", row_idx + 1))?;
    }

    log::debug!(
        "loaded table with {} columns and {} rows from {}",
        table.columns().len(),
        table.n_rows(),
        path.as_ref().display()
    );
    Ok(table)
}
