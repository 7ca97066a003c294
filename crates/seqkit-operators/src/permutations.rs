//! All orderings of a finite collection, one step at a time.
//!
//! Generation follows Steinhaus–Johnson–Trotter: every element carries a
//! direction, the largest *mobile* element (one pointing at a smaller
//! neighbour) swaps with that neighbour, and every element larger than it
//! flips direction. Consecutive permutations differ by one adjacent swap;
//! the series ends when nothing is mobile.
//!
//! The algorithm runs over element *labels* (`0..n`), so the items
//! themselves need no ordering and duplicates are treated as distinct
//! positions.

use std::iter::FusedIterator;

use seqkit_core::config::SeqConfig;
use seqkit_core::cursor::Cursor;
use seqkit_core::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Working state: the collection, the current arrangement of labels, and
/// one direction per label. Never handed out; callers get snapshots.
struct Sjt<T> {
    items: Vec<T>,
    perm: Vec<usize>,
    dir: Vec<Direction>,
    /// Permutations not yet yielded, when `n!` fits in `usize`.
    remaining: Option<usize>,
    emitted_first: bool,
    exhausted: bool,
}

impl<T: Clone> Sjt<T> {
    fn new(items: Vec<T>) -> Self {
        let n = items.len();
        let remaining = (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k));
        Self {
            items,
            perm: (0..n).collect(),
            dir: vec![Direction::Left; n],
            remaining,
            emitted_first: false,
            exhausted: false,
        }
    }

    /// Position of the largest mobile label, if any.
    fn largest_mobile(&self) -> Option<usize> {
        let n = self.perm.len();
        let mut best: Option<usize> = None;
        for (pos, &label) in self.perm.iter().enumerate() {
            let neighbour = match self.dir[label] {
                Direction::Left if pos > 0 => self.perm[pos - 1],
                Direction::Right if pos + 1 < n => self.perm[pos + 1],
                _ => continue,
            };
            if neighbour < label && best.map_or(true, |b| self.perm[b] < label) {
                best = Some(pos);
            }
        }
        best
    }

    /// Advance to the next permutation in place. False once exhausted.
    fn step(&mut self) -> bool {
        let Some(pos) = self.largest_mobile() else {
            return false;
        };
        let label = self.perm[pos];
        let target = match self.dir[label] {
            Direction::Left => pos - 1,
            Direction::Right => pos + 1,
        };
        self.perm.swap(pos, target);
        for d in &mut self.dir[label + 1..] {
            *d = match *d {
                Direction::Left => Direction::Right,
                Direction::Right => Direction::Left,
            };
        }
        true
    }

    fn snapshot(&self) -> Vec<T> {
        self.perm.iter().map(|&i| self.items[i].clone()).collect()
    }

    fn next_permutation(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        if self.emitted_first {
            if !self.step() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.emitted_first = true;
        }
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(self.snapshot())
    }
}

/// See [`permutations`].
pub struct Permutations<S: IntoIterator> {
    source: Cursor<S>,
    state: Option<Sjt<S::Item>>,
}

/// Yields every ordering of `collection`: `n!` vectors for `n` elements,
/// starting with the input order. An empty collection yields exactly one
/// empty vector.
///
/// The collection is read on the first pull; each later pull performs a
/// single generation step. Every yielded `Vec` is an independent copy.
///
/// ```
/// use seqkit_operators::permutations::permutations;
///
/// let all: Vec<Vec<char>> = permutations(vec!['a', 'b', 'c']).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec!['a', 'b', 'c']);
/// ```
pub fn permutations<S>(collection: S) -> Permutations<S>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Permutations {
        source: Cursor::labeled(collection, "permutations"),
        state: None,
    }
}

impl<S> Iterator for Permutations<S>
where
    S: IntoIterator,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_none() {
            self.source.open();
            let mut items =
                Vec::with_capacity(SeqConfig::global().capacity_for(self.source.size_hint()));
            items.extend(self.source.by_ref());
            trace::emit("permutations", "start", items.len());
            self.state = Some(Sjt::new(items));
        }
        self.state.as_mut()?.next_permutation()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            Some(s) if s.exhausted => (0, Some(0)),
            Some(s) => match s.remaining {
                Some(r) => (r, Some(r)),
                None => (usize::MAX, None),
            },
            None => (0, None),
        }
    }
}

impl<S> FusedIterator for Permutations<S>
where
    S: IntoIterator,
    S::Item: Clone,
{
}
