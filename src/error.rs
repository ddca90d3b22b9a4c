//! Error types for bijection construction and positional access.
//!
//! Every fallible operation validates its input before touching any state,
//! so an `Err` always leaves the receiver exactly as it was.

use thiserror::Error;

/// Errors raised by bijection constructors and positional operations.
///
/// # Examples
///
/// ```rust
/// use bijective::{Bijection, BijectionError};
///
/// let result = Bijection::from_parallel(vec!["a", "b", "c"], vec![1, 2]);
/// assert_eq!(result.unwrap_err(), BijectionError::SizeMismatch { keys: 3, values: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BijectionError {
    /// Parallel key and value sequences of unequal length.
    #[error("size mismatch: {keys} keys but {values} values")]
    SizeMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// A position beyond the valid bound.
    ///
    /// The bound is `len` for insertion and `len - 1` for access.
    #[error("index {index} out of range for bijection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of entries at the time of the call.
        len: usize,
    },
}
