//! Prefix folds: exclusive (`pre_scan`) and inclusive (`scan`).
//!
//! Both are strictly demand-driven: `combine` only runs when the consumer
//! asks for the element that needs it.

use std::iter::FusedIterator;

use seqkit_core::cursor::Cursor;

/// Exclusive prefix scan. See [`pre_scan`].
pub struct PreScan<S: IntoIterator, A, F> {
    source: Cursor<S>,
    acc: Option<A>,
    held: Option<S::Item>,
    combine: F,
}

/// Yields, for each source element `i`, the fold of elements `0..i`
/// starting from `seed`. The output has the same length as the source and
/// its first element (if any) is `seed`.
///
/// `combine` is invoked once per element after the first, and only when
/// the following element has been pulled from the source.
///
/// ```
/// use seqkit_operators::scan::pre_scan;
///
/// let sums: Vec<i32> = pre_scan(1..=4, 0, |acc, x| acc + x).collect();
/// assert_eq!(sums, vec![0, 1, 3, 6]);
/// ```
pub fn pre_scan<S, A, F>(source: S, seed: A, combine: F) -> PreScan<S, A, F>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    PreScan {
        source: Cursor::labeled(source, "pre_scan"),
        acc: Some(seed),
        held: None,
        combine,
    }
}

impl<S, A, F> Iterator for PreScan<S, A, F>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let item = self.source.pull()?;
        let acc = self.acc.take()?;
        // The element pulled last round folds in only now that another
        // output is actually needed.
        let acc = match self.held.take() {
            Some(prev) => (self.combine)(&acc, prev),
            None => acc,
        };
        self.held = Some(item);
        self.acc = Some(acc.clone());
        Some(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, A, F> FusedIterator for PreScan<S, A, F>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
}

/// Inclusive prefix scan seeded by the first element. See [`scan`].
pub struct Scan<S: IntoIterator, F> {
    source: Cursor<S>,
    acc: Option<S::Item>,
    combine: F,
}

/// Yields the running fold of the source, the first output being the first
/// element itself. An empty source yields nothing.
pub fn scan<S, F>(source: S, combine: F) -> Scan<S, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(&S::Item, S::Item) -> S::Item,
{
    Scan {
        source: Cursor::labeled(source, "scan"),
        acc: None,
        combine,
    }
}

impl<S, F> Iterator for Scan<S, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(&S::Item, S::Item) -> S::Item,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let item = self.source.pull()?;
        let acc = match self.acc.take() {
            Some(acc) => (self.combine)(&acc, item),
            None => item,
        };
        self.acc = Some(acc.clone());
        Some(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F> FusedIterator for Scan<S, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(&S::Item, S::Item) -> S::Item,
{
}
