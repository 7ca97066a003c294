//! Dense, tie-aware ranking.
//!
//! The whole source is materialized on the first pull (ranking needs every
//! key), sorted stably by key, and ranked: the smallest key gets rank 1,
//! keys the comparer reports equal share a rank, and each new distinct key
//! adds exactly 1. Output keeps the original input order.

use std::cmp::Ordering;
use std::iter::{FusedIterator, Zip};
use std::vec;

use seqkit_core::compare::{Comparer, Natural};
use seqkit_core::config::SeqConfig;
use seqkit_core::cursor::Cursor;
use seqkit_core::trace;

type Ranked<T> = Zip<vec::IntoIter<T>, vec::IntoIter<usize>>;

/// Compute 1-based dense ranks of `keys`, indexed like `keys`.
fn dense_ranks<K, C: Comparer<K>>(keys: &[K], comparer: &C) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable, so equal keys keep their input order.
    order.sort_by(|&a, &b| comparer.compare(&keys[a], &keys[b]));

    let mut ranks = vec![0usize; keys.len()];
    let mut rank = 0usize;
    let mut prev: Option<usize> = None;
    for idx in order {
        let new_group = match prev {
            Some(p) => comparer.compare(&keys[p], &keys[idx]) != Ordering::Equal,
            None => true,
        };
        if new_group {
            rank += 1;
        }
        ranks[idx] = rank;
        prev = Some(idx);
    }
    ranks
}

fn drain_into<S: IntoIterator>(source: &mut Cursor<S>) -> Vec<S::Item> {
    source.open();
    let mut values = Vec::with_capacity(SeqConfig::global().capacity_for(source.size_hint()));
    values.extend(source.by_ref());
    values
}

/// See [`rank`] and [`rank_with`].
pub struct Rank<S: IntoIterator, C> {
    source: Cursor<S>,
    comparer: C,
    ranked: Option<Ranked<S::Item>>,
}

/// Pairs each element with its dense rank under its natural order.
///
/// ```
/// use seqkit_operators::rank::rank;
///
/// let out: Vec<(i32, usize)> = rank(vec![30, 10, 20, 10]).collect();
/// assert_eq!(out, vec![(30, 3), (10, 1), (20, 2), (10, 1)]);
/// ```
pub fn rank<S>(source: S) -> Rank<S, Natural>
where
    S: IntoIterator,
    S::Item: Ord,
{
    rank_with(source, Natural)
}

/// Pairs each element with its dense rank under `comparer`.
pub fn rank_with<S, C>(source: S, comparer: C) -> Rank<S, C>
where
    S: IntoIterator,
    C: Comparer<S::Item>,
{
    Rank {
        source: Cursor::labeled(source, "rank"),
        comparer,
        ranked: None,
    }
}

impl<S, C> Iterator for Rank<S, C>
where
    S: IntoIterator,
    C: Comparer<S::Item>,
{
    type Item = (S::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.ranked.is_none() {
            let values = drain_into(&mut self.source);
            let ranks = dense_ranks(&values, &self.comparer);
            trace::emit("rank", "materialized", values.len());
            self.ranked = Some(values.into_iter().zip(ranks));
        }
        self.ranked.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.ranked {
            Some(r) => r.size_hint(),
            None => self.source.size_hint(),
        }
    }
}

impl<S, C> FusedIterator for Rank<S, C>
where
    S: IntoIterator,
    C: Comparer<S::Item>,
{
}

/// See [`rank_by`] and [`rank_by_with`].
pub struct RankBy<S: IntoIterator, KF, C> {
    source: Cursor<S>,
    key_fn: KF,
    comparer: C,
    ranked: Option<Ranked<S::Item>>,
}

/// Pairs each element with the dense rank of `key_fn(element)`.
pub fn rank_by<S, K, KF>(source: S, key_fn: KF) -> RankBy<S, KF, Natural>
where
    S: IntoIterator,
    K: Ord,
    KF: FnMut(&S::Item) -> K,
{
    rank_by_with(source, key_fn, Natural)
}

/// Pairs each element with the dense rank of `key_fn(element)` under
/// `comparer`. `key_fn` is called exactly once per element, in order.
pub fn rank_by_with<S, K, KF, C>(source: S, key_fn: KF, comparer: C) -> RankBy<S, KF, C>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    C: Comparer<K>,
{
    RankBy {
        source: Cursor::labeled(source, "rank_by"),
        key_fn,
        comparer,
        ranked: None,
    }
}

impl<S, K, KF, C> Iterator for RankBy<S, KF, C>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    C: Comparer<K>,
{
    type Item = (S::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.ranked.is_none() {
            let values = drain_into(&mut self.source);
            let keys: Vec<K> = values.iter().map(&mut self.key_fn).collect();
            let ranks = dense_ranks(&keys, &self.comparer);
            trace::emit("rank_by", "materialized", values.len());
            self.ranked = Some(values.into_iter().zip(ranks));
        }
        self.ranked.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.ranked {
            Some(r) => r.size_hint(),
            None => self.source.size_hint(),
        }
    }
}

impl<S, K, KF, C> FusedIterator for RankBy<S, KF, C>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    C: Comparer<K>,
{
}
