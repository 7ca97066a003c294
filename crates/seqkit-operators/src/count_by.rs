//! Key frequency counting in first-seen order.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::{FusedIterator, Zip};
use std::vec;

use seqkit_core::compare::{EqualityComparer, NaturalEq};
use seqkit_core::cursor::Cursor;
use seqkit_core::trace;

/// Insertion-ordered key/count table.
///
/// A key's slot is fixed when it is first seen. Lookups go through the
/// comparer's hash into a bucket of slots, except when the key matches the
/// slot touched last, which is checked first.
struct CountTable<K> {
    keys: Vec<K>,
    counts: Vec<usize>,
    buckets: HashMap<u64, Vec<usize>>,
    last: Option<(u64, usize)>,
}

impl<K> CountTable<K> {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            counts: Vec::new(),
            buckets: HashMap::new(),
            last: None,
        }
    }

    fn add<E: EqualityComparer<K>>(&mut self, key: K, eq: &E) {
        let hash = eq.hash_of(&key);
        if let Some((h, slot)) = self.last {
            if h == hash && eq.equals(&self.keys[slot], &key) {
                self.counts[slot] += 1;
                return;
            }
        }
        let keys = &mut self.keys;
        let bucket = self.buckets.entry(hash).or_default();
        let found = bucket.iter().copied().find(|&s| eq.equals(&keys[s], &key));
        let slot = match found {
            Some(slot) => {
                self.counts[slot] += 1;
                slot
            }
            None => {
                let slot = keys.len();
                keys.push(key);
                self.counts.push(1);
                bucket.push(slot);
                slot
            }
        };
        self.last = Some((hash, slot));
    }

    fn into_entries(self) -> Zip<vec::IntoIter<K>, vec::IntoIter<usize>> {
        self.keys.into_iter().zip(self.counts)
    }
}

/// See [`count_by`] and [`count_by_with`].
pub struct CountBy<S: IntoIterator, K, KF, E> {
    source: Cursor<S>,
    key_fn: KF,
    comparer: E,
    counted: Option<Zip<vec::IntoIter<K>, vec::IntoIter<usize>>>,
}

/// Counts elements per `key_fn` key, one `(key, count)` per distinct key in
/// order of first occurrence.
///
/// The whole source is consumed on the first pull.
///
/// ```
/// use seqkit_operators::count_by::count_by;
///
/// let out: Vec<(&str, usize)> = count_by(vec!["a", "b", "a"], |s| *s).collect();
/// assert_eq!(out, vec![("a", 2), ("b", 1)]);
/// ```
pub fn count_by<S, K, KF>(source: S, key_fn: KF) -> CountBy<S, K, KF, NaturalEq>
where
    S: IntoIterator,
    K: Hash + Eq,
    KF: FnMut(&S::Item) -> K,
{
    count_by_with(source, key_fn, NaturalEq)
}

/// Like [`count_by`], with keys compared only through `comparer`.
pub fn count_by_with<S, K, KF, E>(source: S, key_fn: KF, comparer: E) -> CountBy<S, K, KF, E>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    E: EqualityComparer<K>,
{
    CountBy {
        source: Cursor::labeled(source, "count_by"),
        key_fn,
        comparer,
        counted: None,
    }
}

impl<S, K, KF, E> Iterator for CountBy<S, K, KF, E>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    E: EqualityComparer<K>,
{
    type Item = (K, usize);

    fn next(&mut self) -> Option<(K, usize)> {
        if self.counted.is_none() {
            let mut table = CountTable::new();
            while let Some(item) = self.source.pull() {
                table.add((self.key_fn)(&item), &self.comparer);
            }
            trace::emit("count_by", "materialized", table.keys.len());
            self.counted = Some(table.into_entries());
        }
        self.counted.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.counted {
            Some(c) => c.size_hint(),
            // At most one entry per element, at least one if non-empty.
            None => {
                let (lo, hi) = self.source.size_hint();
                (lo.min(1), hi)
            }
        }
    }
}

impl<S, K, KF, E> FusedIterator for CountBy<S, K, KF, E>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    E: EqualityComparer<K>,
{
}
