//! Splicing one sequence into another: `backsert` counts the splice point
//! from the end of the source, `insert` from the start.
//!
//! Both yield `Result` items. An index past the source's end is only
//! detectable once the source has been drained, so the `OutOfRange` error
//! is yielded lazily at that point; the iterator is fused afterwards.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use seqkit_core::config::SeqConfig;
use seqkit_core::cursor::Cursor;
use seqkit_core::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Leading,
    Splicing,
    Trailing,
    Done,
}

/// See [`backsert`].
pub struct Backsert<S: IntoIterator, I: IntoIterator<Item = S::Item>> {
    source: Cursor<S>,
    insert: Cursor<I>,
    index: usize,
    /// Look-behind window: the last `index` elements not yet emitted.
    window: Option<VecDeque<S::Item>>,
    seen: usize,
    phase: Phase,
}

/// Splices `insert` into `source` `index_from_end` positions before its
/// end: `0` appends, `len` prepends.
///
/// At most `index_from_end` source elements are held back at any time. If
/// `index_from_end` exceeds the source length, `Err(Error::OutOfRange)` is
/// yielded once the source is exhausted, without any element having been
/// emitted after the shortfall was detected.
///
/// ```
/// use seqkit_operators::backsert::backsert;
///
/// let out: Result<Vec<i32>, _> = backsert(vec![1, 2, 3], vec![8, 9], 2).collect();
/// assert_eq!(out.unwrap(), vec![1, 8, 9, 2, 3]);
/// ```
pub fn backsert<S, I>(source: S, insert: I, index_from_end: usize) -> Backsert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
    Backsert {
        source: Cursor::labeled(source, "backsert"),
        insert: Cursor::labeled(insert, "backsert"),
        index: index_from_end,
        window: None,
        seen: 0,
        phase: Phase::Leading,
    }
}

impl<S, I> Backsert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
    fn fail(&mut self) -> Option<Result<S::Item>> {
        self.phase = Phase::Done;
        self.window = None;
        self.insert.release();
        Some(Err(Error::OutOfRange {
            index: self.index,
            len: self.seen,
        }))
    }
}

impl<S, I> Iterator for Backsert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Leading => {
                    let index = self.index;
                    let window = self.window.get_or_insert_with(|| {
                        let bound = index.saturating_add(1);
                        let cap = SeqConfig::global().capacity_for((bound, Some(bound)));
                        VecDeque::with_capacity(cap)
                    });
                    match self.source.pull() {
                        Some(item) => {
                            self.seen += 1;
                            window.push_back(item);
                            if window.len() > index {
                                if let Some(front) = window.pop_front() {
                                    return Some(Ok(front));
                                }
                            }
                        }
                        None if window.len() < index => return self.fail(),
                        None => self.phase = Phase::Splicing,
                    }
                }
                Phase::Splicing => match self.insert.pull() {
                    Some(item) => return Some(Ok(item)),
                    None => self.phase = Phase::Trailing,
                },
                Phase::Trailing => {
                    match self.window.as_mut().and_then(VecDeque::pop_front) {
                        Some(item) => return Some(Ok(item)),
                        None => {
                            self.window = None;
                            self.phase = Phase::Done;
                        }
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<S, I> FusedIterator for Backsert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
}

/// See [`insert`].
pub struct Insert<S: IntoIterator, I: IntoIterator<Item = S::Item>> {
    source: Cursor<S>,
    insert: Cursor<I>,
    index: usize,
    seen: usize,
    phase: Phase,
}

/// Splices `insert` into `source` before position `index`; `index == len`
/// appends. An index greater than the length yields a lazy
/// `Err(Error::OutOfRange)` once the source is exhausted.
pub fn insert<S, I>(source: S, insert: I, index: usize) -> Insert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
    Insert {
        source: Cursor::labeled(source, "insert"),
        insert: Cursor::labeled(insert, "insert"),
        index,
        seen: 0,
        phase: Phase::Leading,
    }
}

impl<S, I> Iterator for Insert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Leading if self.seen == self.index => self.phase = Phase::Splicing,
                Phase::Leading => match self.source.pull() {
                    Some(item) => {
                        self.seen += 1;
                        return Some(Ok(item));
                    }
                    None => {
                        self.phase = Phase::Done;
                        self.insert.release();
                        return Some(Err(Error::OutOfRange {
                            index: self.index,
                            len: self.seen,
                        }));
                    }
                },
                Phase::Splicing => match self.insert.pull() {
                    Some(item) => return Some(Ok(item)),
                    None => self.phase = Phase::Trailing,
                },
                Phase::Trailing => match self.source.pull() {
                    Some(item) => return Some(Ok(item)),
                    None => self.phase = Phase::Done,
                },
                Phase::Done => return None,
            }
        }
    }
}

impl<S, I> FusedIterator for Insert<S, I>
where
    S: IntoIterator,
    I: IntoIterator<Item = S::Item>,
{
}
