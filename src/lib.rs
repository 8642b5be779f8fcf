//! `rust-tabular-ml` is a small library for numeric matrices and column-oriented tables, plus the
//! preparation steps that sit between them when training simple models.
//!
//! The two core types are:
//!
//! - [`matrix::Matrix`]: a dense, row-major `f64` matrix with signed (negative-from-end) indexing,
//!   slicing, arithmetic, and a cache-blocked transpose.
//! - [`frame::DataFrame`]: an ordered set of named, equal-length columns, each either numeric or
//!   categorical.
//!
//! Every operation that returns a matrix or table allocates new storage. Slices, rows, `head`,
//! `filter`, and arithmetic results never alias their source.
//!
//! ## Quick example: table to model inputs
//!
//! ```rust
//! use rust_tabular_ml::frame::DataFrame;
//! use rust_tabular_ml::preprocessing::{train_test_split, StandardScaler, DEFAULT_SEED};
//!
//! # fn main() -> Result<(), rust_tabular_ml::DataError> {
//! let mut df = DataFrame::with_column("age", vec![19.0, 33.0, 46.0, 52.0, 28.0])?;
//! df.add_column("smoker", vec!["yes", "no", "no", "yes", "no"])?;
//! df.add_column("charges", vec![16884.9, 4449.5, 8240.6, 27808.7, 3866.9])?;
//!
//! df.encode_binary("smoker", "yes", "no")?;
//! let x = df.to_matrix(&["age", "smoker"])?;
//! let y = df.to_matrix(&["charges"])?;
//!
//! let split = train_test_split(&x, &y, 0.4, DEFAULT_SEED)?;
//! let mut scaler = StandardScaler::new();
//! let x_train = scaler.fit_transform(&split.x_train)?;
//! let x_test = scaler.transform(&split.x_test)?;
//! assert_eq!((x_train.rows(), x_test.rows()), (3, 2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Indexing
//!
//! Matrix and table accessors take signed indices: `-1` is the last row. Matrix slicing uses a
//! [`index::Locator`], either a single index or a half-open range, and can also be parsed from
//! text:
//!
//! ```rust
//! use rust_tabular_ml::matrix::Matrix;
//!
//! let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! assert_eq!(m.get(-1, -1).unwrap(), 6.0);
//!
//! let block = m.index_str(":, 1:").unwrap().into_block().unwrap();
//! assert_eq!(block.to_string(), "Matrix(2x2) [\n  [2, 3],\n  [5, 6]\n]");
//! ```
//!
//! ## Reading files
//!
//! [`ingestion::read_table`] auto-detects CSV (`.csv`, `.tsv`) and JSON (`.json`, `.ndjson`) by
//! extension (or you can force a format via [`ingestion::ReadOptions`]):
//!
//! ```no_run
//! use rust_tabular_ml::ingestion::{read_table, ReadOptions};
//!
//! # fn main() -> Result<(), rust_tabular_ml::IngestionError> {
//! let df = read_table("insurance.csv", &ReadOptions::default())?;
//! println!("{df}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: dense matrix type, arithmetic, transpose, formatting
//! - [`index`]: signed index and range resolution shared by matrices and tables
//! - [`frame`]: column store and table operations (filter, encode, head, to_matrix)
//! - [`types`]: column kinds, cell values, column storage
//! - [`ingestion`]: CSV/JSON readers with observer hooks
//! - [`processing`]: free-function filter and reductions over tables
//! - [`preprocessing`]: standard scaler and train/test split
//! - [`metrics`]: regression and classification scores
//! - [`error`]: error types

pub mod error;
pub mod frame;
pub mod index;
pub mod ingestion;
pub mod matrix;
pub mod metrics;
pub mod preprocessing;
pub mod processing;
pub mod types;

pub use error::{DataError, DataResult, IngestionError, IngestionResult};
pub use frame::DataFrame;
pub use matrix::Matrix;
