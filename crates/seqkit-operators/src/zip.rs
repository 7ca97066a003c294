//! Zip engine: 2 to 4 sources under shortest-stops or longest-pads policy.
//!
//! Every public zip drives the same four-lane `ZipCore`; narrower zips park
//! their spare lanes as `Lane::Unused`. Cursors are opened together, in
//! argument order, on the first pull. A lane is released as soon as it is
//! exhausted; the shortest policy releases every lane the moment one runs
//! dry, and never pulls a later lane in that round. When every lane reports
//! an exact length once open, the shortest policy counts rows down instead
//! and stops without pulling any lane past the shortest. Dropping the
//! iterator releases whatever is still open.

use std::iter::{Empty, FusedIterator};

use seqkit_core::config::exact_len;
use seqkit_core::cursor::Cursor;

/// Stopping rule for a zip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipPolicy {
    /// Stop when any source is exhausted.
    Shortest,
    /// Stop when every source is exhausted.
    Longest,
}

/// Source type occupying an unused lane.
pub type NoLane = Empty<()>;

enum Lane<S: IntoIterator> {
    Active(Cursor<S>),
    Unused,
}

impl<S: IntoIterator> Lane<S> {
    fn active(source: S) -> Self {
        Lane::Active(Cursor::labeled(source, "zip"))
    }

    fn open(&mut self) {
        if let Lane::Active(c) = self {
            c.open();
        }
    }

    fn release(&mut self) {
        if let Lane::Active(c) = self {
            c.release();
        }
    }

    /// `None` when an active lane is exhausted; unused lanes never stop.
    fn pull_or_stop(&mut self) -> Option<Option<S::Item>> {
        match self {
            Lane::Active(c) => c.pull().map(Some),
            Lane::Unused => Some(None),
        }
    }

    fn pull(&mut self) -> Option<S::Item> {
        match self {
            Lane::Active(c) => c.pull(),
            Lane::Unused => None,
        }
    }

    fn size_hint(&self) -> Option<(usize, Option<usize>)> {
        match self {
            Lane::Active(c) => Some(c.size_hint()),
            Lane::Unused => None,
        }
    }
}

/// One round of a zip: `None` marks an exhausted or unused lane.
pub type Row<A, B, C, D> = (
    Option<<A as IntoIterator>::Item>,
    Option<<B as IntoIterator>::Item>,
    Option<<C as IntoIterator>::Item>,
    Option<<D as IntoIterator>::Item>,
);

/// Four-lane zip state machine shared by every arity and policy.
pub struct ZipCore<A, B, C, D>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
{
    a: Lane<A>,
    b: Lane<B>,
    c: Lane<C>,
    d: Lane<D>,
    policy: ZipPolicy,
    /// Rows left under the shortest policy, when every lane length is exact.
    remaining: Option<usize>,
    started: bool,
    done: bool,
}

impl<A, B, C, D> ZipCore<A, B, C, D>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
{
    fn new(policy: ZipPolicy, a: Lane<A>, b: Lane<B>, c: Lane<C>, d: Lane<D>) -> Self {
        Self {
            a,
            b,
            c,
            d,
            policy,
            remaining: None,
            started: false,
            done: false,
        }
    }

    /// Length of the shortest active lane, if every active lane knows its own.
    fn exact_shortest(&self) -> Option<usize> {
        [
            self.a.size_hint(),
            self.b.size_hint(),
            self.c.size_hint(),
            self.d.size_hint(),
        ]
        .into_iter()
        .flatten()
        .map(exact_len)
        .try_fold(usize::MAX, |shortest, len| len.map(|n| shortest.min(n)))
    }

    fn finish(&mut self) {
        self.done = true;
        self.a.release();
        self.b.release();
        self.c.release();
        self.d.release();
    }

    fn next_shortest(&mut self) -> Option<Row<A, B, C, D>> {
        if let Some(left) = self.remaining.as_mut() {
            if *left == 0 {
                self.finish();
                return None;
            }
            *left -= 1;
        }
        // Pull lane by lane so nothing past the stopping lane is advanced.
        let Some(a) = self.a.pull_or_stop() else {
            self.finish();
            return None;
        };
        let Some(b) = self.b.pull_or_stop() else {
            self.finish();
            return None;
        };
        let Some(c) = self.c.pull_or_stop() else {
            self.finish();
            return None;
        };
        let Some(d) = self.d.pull_or_stop() else {
            self.finish();
            return None;
        };
        Some((a, b, c, d))
    }

    fn next_longest(&mut self) -> Option<Row<A, B, C, D>> {
        let row = (self.a.pull(), self.b.pull(), self.c.pull(), self.d.pull());
        if row.0.is_none() && row.1.is_none() && row.2.is_none() && row.3.is_none() {
            self.finish();
            return None;
        }
        Some(row)
    }
}

impl<A, B, C, D> Iterator for ZipCore<A, B, C, D>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
{
    type Item = Row<A, B, C, D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.a.open();
            self.b.open();
            self.c.open();
            self.d.open();
            if self.policy == ZipPolicy::Shortest {
                self.remaining = self.exact_shortest();
            }
        }
        match self.policy {
            ZipPolicy::Shortest => self.next_shortest(),
            ZipPolicy::Longest => self.next_longest(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if let Some(left) = self.remaining {
            return (left, Some(left));
        }
        let hints = [
            self.a.size_hint(),
            self.b.size_hint(),
            self.c.size_hint(),
            self.d.size_hint(),
        ];
        let mut hints = hints.into_iter().flatten();
        let Some(first) = hints.next() else {
            return (0, Some(0));
        };
        hints.fold(first, |(lo, hi), (l, h)| match self.policy {
            ZipPolicy::Shortest => (
                lo.min(l),
                match (hi, h) {
                    (Some(x), Some(y)) => Some(x.min(y)),
                    (x, y) => x.or(y),
                },
            ),
            ZipPolicy::Longest => (lo.max(l), hi.zip(h).map(|(x, y)| x.max(y))),
        })
    }
}

impl<A, B, C, D> FusedIterator for ZipCore<A, B, C, D>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
{
}

/// Produces the placeholder for an exhausted lane under the longest policy.
pub trait Pad<T> {
    fn pad(&self) -> T;
}

/// Pads with `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPad;

impl<T: Default> Pad<T> for DefaultPad {
    #[inline]
    fn pad(&self) -> T {
        T::default()
    }
}

/// Pads with a clone of a caller-supplied value.
#[derive(Debug, Clone)]
pub struct Filler<T>(pub T);

impl<T: Clone> Pad<T> for Filler<T> {
    #[inline]
    fn pad(&self) -> T {
        self.0.clone()
    }
}

/// Two-source zip that stops at the shorter source.
pub struct ZipShortest<A: IntoIterator, B: IntoIterator, F> {
    core: ZipCore<A, B, NoLane, NoLane>,
    f: F,
}

/// Two-source zip that runs to the longer source, padding the other.
pub struct ZipLongest<A: IntoIterator, B: IntoIterator, F, PA = DefaultPad, PB = DefaultPad> {
    core: ZipCore<A, B, NoLane, NoLane>,
    pads: (PA, PB),
    f: F,
}

pub struct ZipShortest3<A: IntoIterator, B: IntoIterator, C: IntoIterator, F> {
    core: ZipCore<A, B, C, NoLane>,
    f: F,
}

pub struct ZipLongest3<A: IntoIterator, B: IntoIterator, C: IntoIterator, F> {
    core: ZipCore<A, B, C, NoLane>,
    f: F,
}

pub struct ZipShortest4<A: IntoIterator, B: IntoIterator, C: IntoIterator, D: IntoIterator, F> {
    core: ZipCore<A, B, C, D>,
    f: F,
}

pub struct ZipLongest4<A: IntoIterator, B: IntoIterator, C: IntoIterator, D: IntoIterator, F> {
    core: ZipCore<A, B, C, D>,
    f: F,
}

/// Pairs `first` and `second` through `f`, stopping at the shorter one.
///
/// Neither source is opened until the first pull. The second source is not
/// advanced once the first one has run out.
pub fn zip_shortest<A, B, R, F>(first: A, second: B, f: F) -> ZipShortest<A, B, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    ZipShortest {
        core: ZipCore::new(
            ZipPolicy::Shortest,
            Lane::active(first),
            Lane::active(second),
            Lane::Unused,
            Lane::Unused,
        ),
        f,
    }
}

pub fn zip_shortest3<A, B, C, R, F>(first: A, second: B, third: C, f: F) -> ZipShortest3<A, B, C, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    ZipShortest3 {
        core: ZipCore::new(
            ZipPolicy::Shortest,
            Lane::active(first),
            Lane::active(second),
            Lane::active(third),
            Lane::Unused,
        ),
        f,
    }
}

pub fn zip_shortest4<A, B, C, D, R, F>(
    first: A,
    second: B,
    third: C,
    fourth: D,
    f: F,
) -> ZipShortest4<A, B, C, D, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item, D::Item) -> R,
{
    ZipShortest4 {
        core: ZipCore::new(
            ZipPolicy::Shortest,
            Lane::active(first),
            Lane::active(second),
            Lane::active(third),
            Lane::active(fourth),
        ),
        f,
    }
}

/// Pairs `first` and `second` through `f` until both are exhausted; the
/// exhausted side contributes `Default::default()`.
pub fn zip_longest<A, B, R, F>(first: A, second: B, f: F) -> ZipLongest<A, B, F>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Default,
    B::Item: Default,
    F: FnMut(A::Item, B::Item) -> R,
{
    zip_longest_padded(first, second, DefaultPad, DefaultPad, f)
}

/// Like `zip_longest`, padding with clones of the supplied fillers.
pub fn zip_longest_with<A, B, R, F>(
    first: A,
    second: B,
    first_fill: A::Item,
    second_fill: B::Item,
    f: F,
) -> ZipLongest<A, B, F, Filler<A::Item>, Filler<B::Item>>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Clone,
    B::Item: Clone,
    F: FnMut(A::Item, B::Item) -> R,
{
    zip_longest_padded(first, second, Filler(first_fill), Filler(second_fill), f)
}

fn zip_longest_padded<A, B, PA, PB, R, F>(
    first: A,
    second: B,
    pa: PA,
    pb: PB,
    f: F,
) -> ZipLongest<A, B, F, PA, PB>
where
    A: IntoIterator,
    B: IntoIterator,
    PA: Pad<A::Item>,
    PB: Pad<B::Item>,
    F: FnMut(A::Item, B::Item) -> R,
{
    ZipLongest {
        core: ZipCore::new(
            ZipPolicy::Longest,
            Lane::active(first),
            Lane::active(second),
            Lane::Unused,
            Lane::Unused,
        ),
        pads: (pa, pb),
        f,
    }
}

pub fn zip_longest3<A, B, C, R, F>(first: A, second: B, third: C, f: F) -> ZipLongest3<A, B, C, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    A::Item: Default,
    B::Item: Default,
    C::Item: Default,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    ZipLongest3 {
        core: ZipCore::new(
            ZipPolicy::Longest,
            Lane::active(first),
            Lane::active(second),
            Lane::active(third),
            Lane::Unused,
        ),
        f,
    }
}

pub fn zip_longest4<A, B, C, D, R, F>(
    first: A,
    second: B,
    third: C,
    fourth: D,
    f: F,
) -> ZipLongest4<A, B, C, D, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    A::Item: Default,
    B::Item: Default,
    C::Item: Default,
    D::Item: Default,
    F: FnMut(A::Item, B::Item, C::Item, D::Item) -> R,
{
    ZipLongest4 {
        core: ZipCore::new(
            ZipPolicy::Longest,
            Lane::active(first),
            Lane::active(second),
            Lane::active(third),
            Lane::active(fourth),
        ),
        f,
    }
}

impl<A, B, R, F> Iterator for ZipShortest<A, B, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        match self.core.next()? {
            (Some(a), Some(b), ..) => Some((self.f)(a, b)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.core.size_hint()
    }
}

impl<A, B, R, F, PA, PB> Iterator for ZipLongest<A, B, F, PA, PB>
where
    A: IntoIterator,
    B: IntoIterator,
    PA: Pad<A::Item>,
    PB: Pad<B::Item>,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (a, b, ..) = self.core.next()?;
        let a = a.unwrap_or_else(|| self.pads.0.pad());
        let b = b.unwrap_or_else(|| self.pads.1.pad());
        Some((self.f)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.core.size_hint()
    }
}

impl<A, B, C, R, F> Iterator for ZipShortest3<A, B, C, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        match self.core.next()? {
            (Some(a), Some(b), Some(c), _) => Some((self.f)(a, b, c)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.core.size_hint()
    }
}

impl<A, B, C, R, F> Iterator for ZipLongest3<A, B, C, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    A::Item: Default,
    B::Item: Default,
    C::Item: Default,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (a, b, c, _) = self.core.next()?;
        Some((self.f)(
            a.unwrap_or_default(),
            b.unwrap_or_default(),
            c.unwrap_or_default(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.core.size_hint()
    }
}

impl<A, B, C, D, R, F> Iterator for ZipShortest4<A, B, C, D, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item, D::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        match self.core.next()? {
            (Some(a), Some(b), Some(c), Some(d)) => Some((self.f)(a, b, c, d)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.core.size_hint()
    }
}

impl<A, B, C, D, R, F> Iterator for ZipLongest4<A, B, C, D, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    A::Item: Default,
    B::Item: Default,
    C::Item: Default,
    D::Item: Default,
    F: FnMut(A::Item, B::Item, C::Item, D::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (a, b, c, d) = self.core.next()?;
        Some((self.f)(
            a.unwrap_or_default(),
            b.unwrap_or_default(),
            c.unwrap_or_default(),
            d.unwrap_or_default(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.core.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_stops_at_shorter() {
        let out: Vec<i32> = zip_shortest(vec![1, 2, 3], vec![10, 20], |a, b| a + b).collect();
        assert_eq!(out, vec![11, 22]);
    }

    #[test]
    fn shortest_does_not_advance_later_lanes() {
        let mut pulled = 0;
        let second = (0..5).inspect(|_| pulled += 1);
        let out: Vec<(i32, i32)> = zip_shortest(vec![7, 8], second, |a, b| (a, b)).collect();
        assert_eq!(out, vec![(7, 0), (8, 1)]);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn longest_pads_with_default() {
        let out: Vec<(i32, i32)> =
            zip_longest(Vec::<i32>::new(), vec![1, 2, 3], |a, b| (a, b)).collect();
        assert_eq!(out, vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn longest_with_filler() {
        let out: Vec<String> = zip_longest_with(vec!["a", "b"], vec![1], "-", 0, |s, n| {
            format!("{s}{n}")
        })
        .collect();
        assert_eq!(out, vec!["a1", "b0"]);
    }

    #[test]
    fn four_lanes() {
        let out: Vec<i32> = zip_shortest4(0..3, 0..4, 0..5, 0..6, |a, b, c, d| a + b + c + d)
            .collect();
        assert_eq!(out, vec![0, 4, 8]);
        let out: Vec<i32> =
            zip_longest3(vec![1], vec![1, 1], vec![1, 1, 1], |a, b, c| a + b + c).collect();
        assert_eq!(out, vec![3, 2, 1]);
    }

    #[test]
    fn size_hints_follow_policy() {
        let mut z = zip_shortest(0..3, 0..5, |a, b| a + b);
        assert_eq!(z.size_hint(), (0, None));
        z.next();
        assert_eq!(z.size_hint(), (2, Some(2)));

        let mut z = zip_longest(0..3, 0..5, |a, b| a + b);
        z.next();
        assert_eq!(z.size_hint(), (4, Some(4)));
    }

    #[test]
    fn shortest_counts_down_exact_lengths() {
        let mut pulled_long = 0;
        let long = (0..3).inspect(|_| pulled_long += 1);
        let out: Vec<i32> = zip_shortest(long, vec![10, 20], |a, b| a + b).collect();
        assert_eq!(out, vec![10, 21]);
        assert_eq!(pulled_long, 2);
    }
}
