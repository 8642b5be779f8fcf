//! Unified table-reading entrypoint.
//!
//! Most callers should use [`read_table`], which reads a file into an in-memory
//! [`crate::frame::DataFrame`], inferring column kinds from the data.
//!
//! - If [`ReadOptions::format`] is `None`, the format is inferred from the file extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::frame::DataFrame;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json};

/// Supported table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Delimited text (comma by default).
    Csv,
    /// JSON object, array of objects, or NDJSON.
    Json,
}

impl TableFormat {
    /// Parse a table format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "tsv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

/// Options controlling [`read_table`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ReadOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<TableFormat>,
    /// Field delimiter for CSV. Auto-detected `.tsv` files always use a tab.
    pub delimiter: u8,
    /// Whether the first CSV record names the columns.
    pub has_headers: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOptions")
            .field("format", &self.format)
            .field("delimiter", &char::from(self.delimiter))
            .field("has_headers", &self.has_headers)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: b',',
            has_headers: true,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Unified entry point for path-based tables.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the row count and each column's inferred kind
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// Failing to infer the format is returned as [`IngestionError::SchemaMismatch`] without
/// notifying the observer, since no read was attempted.
///
/// # Examples
///
/// ## CSV (auto-detect by extension)
///
/// ```no_run
/// use rust_tabular_ml::ingestion::{read_table, ReadOptions};
///
/// # fn main() -> Result<(), rust_tabular_ml::IngestionError> {
/// let df = read_table("insurance.csv", &ReadOptions::default())?;
/// println!("{}", df.head_default());
/// # Ok(())
/// # }
/// ```
///
/// ## Force a format explicitly (override extension inference)
///
/// ```no_run
/// use rust_tabular_ml::ingestion::{read_table, ReadOptions, TableFormat};
///
/// # fn main() -> Result<(), rust_tabular_ml::IngestionError> {
/// let opts = ReadOptions {
///     format: Some(TableFormat::Csv),
///     delimiter: b';',
///     has_headers: false,
///     ..Default::default()
/// };
///
/// let df = read_table("input_without_extension", &opts)?;
/// println!("rows={}", df.rows());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (`log` facade + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rust_tabular_ml::ingestion::{read_table, IngestionSeverity, LogObserver, ReadOptions};
///
/// let opts = ReadOptions {
///     observer: Some(Arc::new(LogObserver::default())),
///     alert_at_or_above: IngestionSeverity::Critical,
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert` at this threshold.
/// let _err = read_table("does_not_exist.csv", &opts).unwrap_err();
/// ```
pub fn read_table(path: impl AsRef<Path>, options: &ReadOptions) -> IngestionResult<DataFrame> {
    let path = path.as_ref();
    let (fmt, delimiter) = match options.format {
        Some(f) => (f, options.delimiter),
        None => {
            let (f, is_tsv) = infer_format_from_path(path)?;
            (f, if is_tsv { b'\t' } else { options.delimiter })
        }
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = match fmt {
        TableFormat::Csv => csv::read_csv_from_path(path, delimiter, options.has_headers),
        TableFormat::Json => json::read_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(df) => obs.on_success(&ctx, &IngestionStats::from_frame(df)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Classify a read failure: infrastructure (I/O) problems are `Critical`, bad data is `Error`.
pub fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        IngestionError::Json(err) if err.is_io() => IngestionSeverity::Critical,
        IngestionError::Json(_) => IngestionSeverity::Error,
        IngestionError::SchemaMismatch { .. } => IngestionSeverity::Error,
        IngestionError::ParseError { .. } => IngestionSeverity::Error,
        IngestionError::Data(_) => IngestionSeverity::Error,
    }
}

/// Returns the format plus whether the extension was `tsv`.
fn infer_format_from_path(path: &Path) -> IngestionResult<(TableFormat, bool)> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    let fmt = TableFormat::from_extension(ext).ok_or_else(|| IngestionError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })?;
    Ok((fmt, ext.eq_ignore_ascii_case("tsv")))
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to queue reads in a job system.
#[derive(Clone)]
pub struct TableRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling the read.
    pub options: ReadOptions,
}

impl fmt::Debug for TableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl TableRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: ReadOptions::default(),
        }
    }

    /// Execute the request by calling [`read_table`].
    pub fn run(&self) -> IngestionResult<DataFrame> {
        read_table(&self.path, &self.options)
    }
}
