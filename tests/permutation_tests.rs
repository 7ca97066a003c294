//! Permutations engine.

mod common;

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use common::TestingSequence;
use seqkit::{permutations, SeqExt};

#[test]
fn test_counts_match_factorial() {
    let expected = [1usize, 1, 2, 6, 24, 120, 720, 5040];
    for (n, want) in expected.iter().enumerate() {
        let all: Vec<Vec<usize>> = permutations(0..n).collect();
        assert_eq!(all.len(), *want, "n = {n}");
        let distinct: HashSet<&Vec<usize>> = all.iter().collect();
        assert_eq!(distinct.len(), *want);
    }
}

#[test]
fn test_multiset_input_keeps_positions_distinct() {
    let all: Vec<Vec<char>> = permutations(vec!['a', 'a', 'b']).collect();
    assert_eq!(all.len(), 6);
    for p in &all {
        let mut sorted = p.clone();
        sorted.sort();
        assert_eq!(sorted, vec!['a', 'a', 'b']);
    }
}

#[test]
fn test_consecutive_permutations_differ_by_adjacent_swap() {
    let all: Vec<Vec<u8>> = (1..=5u8).permutations().collect();
    for pair in all.windows(2) {
        let diffs: Vec<usize> = (0..5).filter(|&i| pair[0][i] != pair[1][i]).collect();
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[1], diffs[0] + 1);
    }
}

#[test]
fn test_first_permutation_is_identity_and_lazy() {
    let (src, probe) = TestingSequence::new(vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    let mut it = permutations(src);
    assert_eq!(probe.opened.get(), 0);
    assert_eq!(
        it.next(),
        Some(vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100])
    );
    assert_eq!(probe.released.get(), 1);
    // 10! - 1 still to come, none generated yet.
    assert_eq!(it.size_hint(), (3_628_799, Some(3_628_799)));
}

#[test]
fn test_yielded_snapshots_are_owned() {
    let mut it = permutations(vec![String::from("x"), String::from("y")]);
    let mut first = it.next().unwrap();
    first.push(String::from("mutated"));
    let second = it.next().unwrap();
    assert_eq!(second, vec!["y".to_string(), "x".to_string()]);
    assert_eq!(first.len(), 3);
    assert_eq!(it.next(), None);
}

#[test]
fn test_upstream_panic_releases_source() {
    let (src, probe) = TestingSequence::failing_at(vec![1, 2, 3, 4], 3);
    let mut it = permutations(src);
    let result = catch_unwind(AssertUnwindSafe(|| it.next()));
    assert!(result.is_err());
    drop(it);
    assert_eq!(probe.opened.get(), 1);
    assert_eq!(probe.released.get(), 1);
}
