//! The structure-of-arrays pair container.

use crate::error::PairVecError;

/// A random-access collection of `(F, S)` pairs stored as two co-indexed
/// vectors.
///
/// A pair is never materialized in storage; [`get`](PairVec::get)
/// synthesizes it on read as references into both component stores. The
/// container grows only by appending to the end — no removal, no
/// in-place mutation, no reordering.
///
/// # Examples
///
/// ```
/// use pairvec::PairVec;
///
/// let mut pairs = PairVec::new();
/// pairs.push((7u8, 3.5f64)).unwrap();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs.get(0).unwrap(), (&7, &3.5));
/// ```
#[derive(Clone, Debug)]
pub struct PairVec<F, S> {
    /// The first component of each element.
    firsts: Vec<F>,
    /// The second component of each element.
    seconds: Vec<S>,
}

impl<F, S> PairVec<F, S> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            firsts: Vec::new(),
            seconds: Vec::new(),
        }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.firsts.len()
    }

    /// `true` if the container holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.firsts.is_empty()
    }

    /// The pair at position `i`, as references into both component stores.
    ///
    /// Returns `Err(PairVecError::OutOfBounds)` when `i >= self.len()`.
    /// The single check against `len()` covers both components (their
    /// lengths are always equal), so a partial pair can never be observed.
    pub fn get(&self, i: usize) -> Result<(&F, &S), PairVecError> {
        if i >= self.len() {
            return Err(PairVecError::OutOfBounds {
                index: i,
                len: self.len(),
            });
        }
        Ok((&self.firsts[i], &self.seconds[i]))
    }

    /// Append a pair to the end.
    ///
    /// Capacity for both components is reserved before either value is
    /// moved, so a failed push returns
    /// `Err(PairVecError::AllocationFailed)` with the container unchanged
    /// and the two component stores still at equal length.
    pub fn push(&mut self, pair: (F, S)) -> Result<(), PairVecError> {
        self.firsts
            .try_reserve(1)
            .map_err(|_| PairVecError::AllocationFailed { additional: 1 })?;
        self.seconds
            .try_reserve(1)
            .map_err(|_| PairVecError::AllocationFailed { additional: 1 })?;
        self.firsts.push(pair.0);
        self.seconds.push(pair.1);
        Ok(())
    }

    /// Lengths of the two component stores, for invariant checks in tests.
    #[cfg(test)]
    fn component_lens(&self) -> (usize, usize) {
        (self.firsts.len(), self.seconds.len())
    }
}

impl<F, S> Default for PairVec<F, S> {
    fn default() -> Self {
        Self::new()
    }
}
