//! Shared fixtures for the pairvec benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pairvec::PairVec;

/// Deterministic `(u64, String)` input data of length `n`.
pub fn int_string_input(n: usize) -> Vec<(u64, String)> {
    (0..n as u64).map(|i| (i, i.to_string())).collect()
}

/// Build a `PairVec` from prepared input pairs.
pub fn build_pair_vec(input: &[(u64, String)]) -> PairVec<u64, String> {
    let mut pairs = PairVec::new();
    for (a, b) in input {
        pairs
            .push((*a, b.clone()))
            .expect("benchmark input fits in memory");
    }
    pairs
}
