//! Feature preparation for model training.
//!
//! Both utilities operate on [`crate::matrix::Matrix`] values (rows are samples, columns are
//! features), typically produced by [`crate::frame::DataFrame::to_matrix`].
//!
//! - [`StandardScaler`]: per-column mean/std standardization
//! - [`train_test_split()`]: seeded row shuffle into train and test partitions

pub mod scaler;
pub mod split;

pub use scaler::StandardScaler;
pub use split::{train_test_split, Split, DEFAULT_SEED, DEFAULT_TEST_SIZE};
