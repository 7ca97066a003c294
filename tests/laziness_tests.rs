//! Deferred execution: building any operator over a source that fails on
//! open must not fail until the result is pulled.

mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use common::BreakingSequence;
use seqkit::*;

fn breaking() -> BreakingSequence<i32> {
    BreakingSequence::new()
}

#[test]
fn test_construction_never_opens_sources() {
    let _ = zip_shortest(breaking(), breaking(), |a, b| a + b);
    let _ = zip_longest(breaking(), breaking(), |a, b| a + b);
    let _ = zip_shortest4(breaking(), breaking(), breaking(), breaking(), |a, b, c, d| {
        a + b + c + d
    });
    let _ = pre_scan(breaking(), 0, |a, b| a + b);
    let _ = scan(breaking(), |a, b| a + b);
    let _ = backsert(breaking(), breaking(), 2);
    let _ = insert(breaking(), breaking(), 2);
    let _ = exclude(breaking(), 1, 2);
    let _ = rank(breaking());
    let _ = rank_by(breaking(), |x| *x);
    let _ = count_by(breaking(), |x| *x);
    let _ = permutations(breaking());
}

#[test]
fn test_first_pull_surfaces_the_failure() {
    let pulls: Vec<Box<dyn FnOnce()>> = vec![
        Box::new(|| {
            let _ = pre_scan(breaking(), 0, |a, b| a + b).next();
        }),
        Box::new(|| {
            let _ = exclude(breaking(), 0, 1).next();
        }),
        Box::new(|| {
            let _ = rank(breaking()).next();
        }),
        Box::new(|| {
            let _ = count_by(breaking(), |x| *x).next();
        }),
        Box::new(|| {
            let _ = permutations(breaking()).next();
        }),
    ];
    for pull in pulls {
        assert!(catch_unwind(AssertUnwindSafe(pull)).is_err());
    }
}

#[test]
fn test_insert_source_opened_only_at_splice_point() {
    // The spliced sequence is never opened when the source is too short.
    let mut it = backsert(vec![1, 2], breaking(), 5);
    assert_eq!(it.next(), Some(Err(Error::OutOfRange { index: 5, len: 2 })));
    assert_eq!(it.next(), None);

    let mut it = insert(vec![1, 2, 3], breaking(), 2);
    assert_eq!(it.next(), Some(Ok(1)));
    assert_eq!(it.next(), Some(Ok(2)));
}

#[test]
fn test_unfold_runs_nothing_until_pulled() {
    let it = unfold(
        0,
        |_: i32| -> i32 { panic!("generate ran eagerly") },
        |_: &i32| true,
        |s: &i32| *s,
        |s: i32| s,
    );
    drop(it);
}
