//! CSV ingestion boundary.
//!
//! The engine itself only ever sees ordered key-value rows; this module is
//! the bundled adapter for delimited-text sources. Hosts with their own
//! transport feed [`RawRow`]s to the engine directly instead.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::record::{RawRow, RawValue};
use crate::error::{FilmscopeError, FilmscopeResult};

/// Reads all rows from a CSV source into ordered key-value form.
///
/// Cells keep their textual form; empty cells become [`RawValue::Null`] so
/// alias resolution treats them as absent. Transport and syntax errors
/// surface as [`FilmscopeError::Load`]; there is no retry.
pub fn rows_from_csv_reader<R: Read>(reader: R) -> FilmscopeResult<Vec<RawRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|error| FilmscopeError::Load(error.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|error| FilmscopeError::Load(error.to_string()))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| {
                let value = if cell.is_empty() {
                    RawValue::Null
                } else {
                    RawValue::Str(cell.to_owned())
                };
                (header.to_owned(), value)
            })
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "csv rows read");
    Ok(rows)
}

/// Reads all rows from a CSV file on disk.
pub fn rows_from_csv_path(path: impl AsRef<Path>) -> FilmscopeResult<Vec<RawRow>> {
    let file = std::fs::File::open(path.as_ref())
        .map_err(|error| FilmscopeError::Load(error.to_string()))?;
    rows_from_csv_reader(file)
}
