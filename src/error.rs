use thiserror::Error;

/// Convenience result type for Matrix / DataFrame operations.
pub type DataResult<T> = Result<T, DataError>;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by the in-memory engines ([`crate::matrix`], [`crate::frame`] and the
/// modeling helpers built on them).
///
/// Every variant is a caller-visible, typed failure. Operations that return one of these never
/// leave their receiver partially modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// An argument is malformed (negative dimension, duplicate column name, length mismatch, ...).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An index or range falls outside the valid bounds after negative-index normalization.
    #[error("index {index} out of range for {axis} of length {len}")]
    IndexOutOfRange {
        index: isize,
        len: usize,
        axis: &'static str,
    },

    /// A locator is neither an integer nor a half-open range (or a two-axis spec is malformed).
    #[error("invalid index kind: {message}")]
    InvalidIndexKind { message: String },

    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A referenced column does not exist.
    #[error("column not found: '{key}'")]
    KeyNotFound { key: String },

    /// A categorical value matched neither label during binary encoding.
    #[error("cannot binary-encode column '{column}': {message}")]
    EncodingConstraintViolation { column: String, message: String },
}

impl DataError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }
}

/// Error type returned by table ingestion.
///
/// This is a single error enum shared across CSV and JSON ingestion.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have a usable tabular shape (missing keys, duplicate headers, ...).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value has a type that cannot be stored in a numeric or categorical column.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Building the resulting table violated a [`DataFrame`](crate::frame::DataFrame) invariant.
    #[error(transparent)]
    Data(#[from] DataError),
}
