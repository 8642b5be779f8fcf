//! Reading tables from files.
//!
//! Most callers should use [`read_table`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`ReadOptions`])
//! - reads into an in-memory [`crate::frame::DataFrame`], inferring each column's kind
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    ColumnSummary, CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    LogObserver, StdErrObserver,
};
pub use unified::{read_table, severity_for_error, ReadOptions, TableFormat, TableRequest};
