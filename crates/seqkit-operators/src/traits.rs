//! Method-call surface for the operators.
//!
//! `SeqExt` is implemented for every `Iterator`. Each method only forwards to
//! the free function of the same module, so the free functions stay the
//! entry point for sources that should not be opened yet (any
//! `IntoIterator`).

use seqkit_core::compare::{Comparer, EqualityComparer, Natural, NaturalEq};

use crate::backsert::{self, Backsert, Insert};
use crate::count_by::{self, CountBy};
use crate::ends_with;
use crate::exclude::{self, Exclude};
use crate::permutations::{self, Permutations};
use crate::rank::{self, Rank, RankBy};
use crate::scan::{self, PreScan, Scan};
use crate::zip::{self, Filler, ZipLongest, ZipShortest};

pub trait SeqExt: Iterator + Sized {
    fn zip_shortest<B, R, F>(self, other: B, f: F) -> ZipShortest<Self, B, F>
    where
        B: IntoIterator,
        F: FnMut(Self::Item, B::Item) -> R,
    {
        zip::zip_shortest(self, other, f)
    }

    fn zip_longest<B, R, F>(self, other: B, f: F) -> ZipLongest<Self, B, F>
    where
        B: IntoIterator,
        Self::Item: Default,
        B::Item: Default,
        F: FnMut(Self::Item, B::Item) -> R,
    {
        zip::zip_longest(self, other, f)
    }

    fn zip_longest_with<B, R, F>(
        self,
        other: B,
        self_fill: Self::Item,
        other_fill: B::Item,
        f: F,
    ) -> ZipLongest<Self, B, F, Filler<Self::Item>, Filler<B::Item>>
    where
        B: IntoIterator,
        Self::Item: Clone,
        B::Item: Clone,
        F: FnMut(Self::Item, B::Item) -> R,
    {
        zip::zip_longest_with(self, other, self_fill, other_fill, f)
    }

    fn pre_scan<A, F>(self, seed: A, combine: F) -> PreScan<Self, A, F>
    where
        A: Clone,
        F: FnMut(&A, Self::Item) -> A,
    {
        scan::pre_scan(self, seed, combine)
    }

    /// Inclusive running fold; named apart from `Iterator::scan`.
    fn inclusive_scan<F>(self, combine: F) -> Scan<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, Self::Item) -> Self::Item,
    {
        scan::scan(self, combine)
    }

    fn backsert<I>(self, insert: I, index_from_end: usize) -> Backsert<Self, I>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        backsert::backsert(self, insert, index_from_end)
    }

    fn insert_at<I>(self, insert: I, index: usize) -> Insert<Self, I>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        backsert::insert(self, insert, index)
    }

    fn exclude(self, start: usize, count: usize) -> Exclude<Self> {
        exclude::exclude(self, start, count)
    }

    fn rank(self) -> Rank<Self, Natural>
    where
        Self::Item: Ord,
    {
        rank::rank(self)
    }

    fn rank_with<C>(self, comparer: C) -> Rank<Self, C>
    where
        C: Comparer<Self::Item>,
    {
        rank::rank_with(self, comparer)
    }

    fn rank_by<K, KF>(self, key_fn: KF) -> RankBy<Self, KF, Natural>
    where
        K: Ord,
        KF: FnMut(&Self::Item) -> K,
    {
        rank::rank_by(self, key_fn)
    }

    fn rank_by_with<K, KF, C>(self, key_fn: KF, comparer: C) -> RankBy<Self, KF, C>
    where
        KF: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        rank::rank_by_with(self, key_fn, comparer)
    }

    fn count_by<K, KF>(self, key_fn: KF) -> CountBy<Self, K, KF, NaturalEq>
    where
        K: std::hash::Hash + Eq,
        KF: FnMut(&Self::Item) -> K,
    {
        count_by::count_by(self, key_fn)
    }

    fn count_by_with<K, KF, E>(self, key_fn: KF, comparer: E) -> CountBy<Self, K, KF, E>
    where
        KF: FnMut(&Self::Item) -> K,
        E: EqualityComparer<K>,
    {
        count_by::count_by_with(self, key_fn, comparer)
    }

    fn ends_with<B>(self, suffix: B) -> bool
    where
        B: IntoIterator,
        Self::Item: PartialEq<B::Item>,
    {
        ends_with::ends_with(self, suffix)
    }

    fn starts_with<B>(self, prefix: B) -> bool
    where
        B: IntoIterator,
        Self::Item: PartialEq<B::Item>,
    {
        ends_with::starts_with(self, prefix)
    }

    fn permutations(self) -> Permutations<Self>
    where
        Self::Item: Clone,
    {
        permutations::permutations(self)
    }
}

impl<I: Iterator> SeqExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_read_left_to_right() {
        let out: Vec<(i32, usize)> = (1..=6)
            .exclude(1, 2)
            .pre_scan(0, |acc, x| acc + x)
            .rank()
            .collect();
        assert_eq!(out, vec![(0, 1), (1, 2), (5, 3), (10, 4)]);
    }

    #[test]
    fn spliced_pipeline() {
        let out: Result<Vec<i32>, _> = vec![1, 2, 3].into_iter().backsert([0], 1).collect();
        assert_eq!(out.unwrap(), vec![1, 2, 0, 3]);
        assert!(vec![1, 2, 3].into_iter().ends_with([2, 3]));
        assert!(vec![1, 2, 3].into_iter().starts_with([1]));
    }
}
