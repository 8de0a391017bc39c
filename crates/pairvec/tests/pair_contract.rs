//! End-to-end contract tests for the public `PairVec` API:
//! construction, length, indexed reads, append ordering, and the
//! out-of-bounds error surface.

use pairvec::{PairVec, PairVecError};

#[test]
fn fresh_container_is_empty_and_every_read_fails() {
    let pairs: PairVec<i64, String> = PairVec::new();
    assert_eq!(pairs.len(), 0);
    for i in [0usize, 1, 100, usize::MAX] {
        assert_eq!(
            pairs.get(i),
            Err(PairVecError::OutOfBounds { index: i, len: 0 })
        );
    }
}

#[test]
fn single_append_is_readable_at_index_zero() {
    let mut pairs = PairVec::new();
    pairs.push((1i64, "a".to_string())).unwrap();
    assert_eq!(pairs.len(), 1);
    let (first, second) = pairs.get(0).unwrap();
    assert_eq!(*first, 1);
    assert_eq!(second, "a");
}

#[test]
fn second_append_leaves_first_entry_in_place() {
    let mut pairs = PairVec::new();
    pairs.push((1i64, "a".to_string())).unwrap();
    pairs.push((2i64, "b".to_string())).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs.get(0).unwrap(), (&1, &"a".to_string()));
    assert_eq!(pairs.get(1).unwrap(), (&2, &"b".to_string()));
}

#[test]
fn reads_at_and_past_len_fail() {
    let mut pairs = PairVec::new();
    pairs.push((1i64, "a".to_string())).unwrap();
    pairs.push((2i64, "b".to_string())).unwrap();
    assert_eq!(
        pairs.get(2),
        Err(PairVecError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(
        pairs.get(3),
        Err(PairVecError::OutOfBounds { index: 3, len: 2 })
    );
}

#[test]
fn thousand_pairs_round_trip_in_order() {
    let mut pairs = PairVec::new();
    for i in 0..1000u32 {
        pairs.push((i, i.to_string())).unwrap();
    }
    assert_eq!(pairs.len(), 1000);
    for i in 0..1000u32 {
        let (first, second) = pairs.get(i as usize).unwrap();
        assert_eq!(*first, i);
        assert_eq!(*second, i.to_string());
    }
}
