//! CSV ingestion implementation.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::frame::DataFrame;
use crate::types::{Column, ColumnData};

/// Read a comma-separated file with a header row into a [`DataFrame`].
pub fn read_csv(path: impl AsRef<Path>) -> IngestionResult<DataFrame> {
    read_csv_from_path(path, b',', true)
}

/// Read a delimited file into a [`DataFrame`].
///
/// Rules:
///
/// - Every cell is trimmed.
/// - A column is numeric iff every one of its cells parses as `f64`; otherwise it is
///   categorical and keeps the trimmed text.
/// - Every record must have the same number of fields.
/// - Without headers, columns are named `column_0`, `column_1`, ...
pub fn read_csv_from_path(
    path: impl AsRef<Path>,
    delimiter: u8,
    has_headers: bool,
) -> IngestionResult<DataFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Read CSV data from an existing CSV reader.
///
/// Whether the first record is a header follows the reader's own configuration.
pub fn read_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<DataFrame> {
    let header_names = if rdr.has_headers() {
        Some(checked_headers(rdr.headers()?)?)
    } else {
        None
    };

    let mut cells: Vec<Vec<String>> = match &header_names {
        Some(names) => vec![Vec::new(); names.len()],
        None => Vec::new(),
    };
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        if row_idx0 == 0 && header_names.is_none() {
            cells = vec![Vec::new(); record.len()];
        }
        for (col, raw) in cells.iter_mut().zip(record.iter()) {
            col.push(raw.trim().to_owned());
        }
    }

    let names = header_names
        .unwrap_or_else(|| (0..cells.len()).map(|i| format!("column_{i}")).collect());
    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column::new(name, infer_column(raw)))
        .collect();

    Ok(DataFrame::from_columns(columns)?)
}

fn checked_headers(headers: &csv::StringRecord) -> IngestionResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(headers.len());
    for (idx, h) in headers.iter().enumerate() {
        let name = h.trim();
        if name.is_empty() {
            return Err(IngestionError::SchemaMismatch {
                message: format!("empty header at position {idx}"),
            });
        }
        if !seen.insert(name) {
            return Err(IngestionError::SchemaMismatch {
                message: format!(
                    "duplicate header '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
        names.push(name.to_owned());
    }
    Ok(names)
}

fn infer_column(raw: Vec<String>) -> ColumnData {
    let parsed: Option<Vec<f64>> = raw.iter().map(|s| s.parse::<f64>().ok()).collect();
    match parsed {
        Some(values) => ColumnData::Numeric(values),
        None => ColumnData::Categorical(raw),
    }
}
