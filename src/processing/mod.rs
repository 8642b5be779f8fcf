//! In-memory table transformations.
//!
//! The processing layer operates on [`crate::frame::DataFrame`] values, whether built in code or
//! produced by ingestion. Everything here is single-threaded and returns new values.
//!
//! Currently implemented:
//!
//! - [`filter()`]: row filtering by a predicate on one column
//! - [`reduce()`]: common reductions over a numeric column (count/sum/min/max/mean)
//!
//! ## Example: filter → reduce
//!
//! ```rust
//! use rust_tabular_ml::frame::DataFrame;
//! use rust_tabular_ml::processing::{filter, reduce, ReduceOp};
//!
//! let mut df = DataFrame::with_column("active", vec!["yes", "no", "yes"]).unwrap();
//! df.add_column("score", vec![10.0, 20.0, 5.5]).unwrap();
//!
//! // Keep only active rows.
//! let active = filter(&df, "active", |v| v == "yes").unwrap();
//!
//! let sum = reduce(&active, "score", ReduceOp::Sum).unwrap();
//! assert_eq!(sum, Some(15.5));
//! ```

pub mod filter;
pub mod reduce;

pub use filter::filter;
pub use reduce::{reduce, ReduceOp};
