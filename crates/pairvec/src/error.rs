//! Error types for `PairVec` operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during [`PairVec`](crate::PairVec) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairVecError {
    /// An index outside `[0, len)` was passed to
    /// [`PairVec::get`](crate::PairVec::get). The container is unchanged.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// The backing storage could not grow during
    /// [`PairVec::push`](crate::PairVec::push). Both component stores are
    /// left at their previous, equal length.
    AllocationFailed {
        /// Number of additional pairs that could not be reserved.
        additional: usize,
    },
}

impl fmt::Display for PairVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::AllocationFailed { additional } => {
                write!(f, "failed to reserve capacity for {additional} more pair(s)")
            }
        }
    }
}

impl Error for PairVecError {}
