//! Drop an index window from a sequence without buffering it.

use std::iter::FusedIterator;

use seqkit_core::cursor::Cursor;

/// See [`exclude`].
pub struct Exclude<S: IntoIterator> {
    source: Cursor<S>,
    start: usize,
    /// Exclusive end of the window; saturates instead of overflowing.
    end: usize,
    pos: usize,
}

/// Yields `source` with positions `[start, start + count)` removed.
///
/// `count == 0` passes the source through unchanged, and a window that
/// extends past the end of the source simply removes less. Arguments are
/// unsigned, so there is no invalid input to reject.
///
/// ```
/// use seqkit_operators::exclude::exclude;
///
/// let out: Vec<i32> = exclude(1..=10, 3, 5).collect();
/// assert_eq!(out, vec![1, 2, 3, 9, 10]);
/// ```
pub fn exclude<S: IntoIterator>(source: S, start: usize, count: usize) -> Exclude<S> {
    Exclude {
        source: Cursor::labeled(source, "exclude"),
        start,
        end: start.saturating_add(count),
        pos: 0,
    }
}

impl<S: IntoIterator> Iterator for Exclude<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.pos == self.start && self.end > self.start {
            // Skip the whole window in one go; `nth` lets sized sources jump.
            let skip = self.end - self.start;
            self.pos = self.end;
            self.source.nth(skip - 1)?;
        }
        let item = self.source.pull()?;
        self.pos = self.pos.saturating_add(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        if self.pos > self.start || self.end == self.start {
            return (lo, hi);
        }
        let before = self.start - self.pos;
        let window = self.end - self.start;
        let trim = |n: usize| {
            if n <= before {
                n
            } else {
                before + n.saturating_sub(before + window)
            }
        };
        (trim(lo), hi.map(trim))
    }
}

impl<S: IntoIterator> FusedIterator for Exclude<S> {}
