//! Structure-of-arrays storage for pairs.
//!
//! [`PairVec`] stores a sequence of `(F, S)` pairs as two co-indexed
//! vectors — all first components in one, all second components in the
//! other — instead of a single `Vec<(F, S)>`. When `F` and `S` have
//! mismatched sizes or alignments, the tuple layout pays padding on every
//! element; the split layout stores each component tightly.
//!
//! The split is an implementation detail. The public API is pair-level
//! only, and every operation maintains the invariant that the two backing
//! vectors have equal length.
//!
//! # Quick start
//!
//! ```rust
//! use pairvec::PairVec;
//!
//! let mut pairs: PairVec<u32, String> = PairVec::new();
//! pairs.push((1, "a".to_string())).unwrap();
//! pairs.push((2, "b".to_string())).unwrap();
//!
//! assert_eq!(pairs.len(), 2);
//! let (first, second) = pairs.get(0).unwrap();
//! assert_eq!((*first, second.as_str()), (1, "a"));
//!
//! // Out-of-range access is an error, not a panic.
//! assert!(pairs.get(2).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod pair_vec;

pub use error::PairVecError;
pub use pair_vec::PairVec;
