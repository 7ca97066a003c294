//! Deferred cursor over one source sequence.
//!
//! A `Cursor` captures an `IntoIterator` without calling `into_iter()`; the
//! source is opened on the first pull. Exhaustion releases the inner
//! iterator immediately, and dropping the cursor releases whatever is still
//! held (panic-safe, since unwinding runs `Drop`).

use std::iter::FusedIterator;
use std::mem;

use crate::trace;

enum State<S: IntoIterator> {
    Pending(S),
    Open(S::IntoIter),
    Released,
}

/// Per-source iteration handle owned by exactly one operator.
pub struct Cursor<S: IntoIterator> {
    state: State<S>,
    label: &'static str,
}

impl<S: IntoIterator> Cursor<S> {
    pub fn new(source: S) -> Self {
        Self::labeled(source, "cursor")
    }

    /// Like `new`, tagging trace events with the owning operator's name.
    pub fn labeled(source: S, label: &'static str) -> Self {
        Self {
            state: State::Pending(source),
            label,
        }
    }

    /// Open the source if it has not been opened yet.
    ///
    /// If `into_iter()` panics, the cursor is left released.
    pub fn open(&mut self) {
        match mem::replace(&mut self.state, State::Released) {
            State::Pending(source) => {
                self.state = State::Open(source.into_iter());
                trace::emit(self.label, "open", 0);
            }
            other => self.state = other,
        }
    }

    /// Pull the next element, opening the source first if needed.
    ///
    /// Returns `None` once exhausted or released; exhaustion releases.
    pub fn pull(&mut self) -> Option<S::Item> {
        self.open();
        let State::Open(inner) = &mut self.state else {
            return None;
        };
        match inner.next() {
            Some(item) => Some(item),
            None => {
                self.release();
                None
            }
        }
    }

    /// Drop the underlying iterator (or the unopened source). Idempotent.
    pub fn release(&mut self) {
        let was_open = matches!(self.state, State::Open(_));
        self.state = State::Released;
        if was_open {
            trace::emit(self.label, "release", 0);
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending(_))
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    pub fn is_released(&self) -> bool {
        matches!(self.state, State::Released)
    }

    /// Size hint of the remaining elements. Unopened sources report
    /// `(0, None)` since asking would require opening them.
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Pending(_) => (0, None),
            State::Open(inner) => inner.size_hint(),
            State::Released => (0, Some(0)),
        }
    }
}

impl<S: IntoIterator> Iterator for Cursor<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Cursor::size_hint(self)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.open();
        let State::Open(inner) = &mut self.state else {
            return None;
        };
        let item = inner.nth(n);
        if item.is_none() {
            self.release();
        }
        item
    }
}

impl<S: IntoIterator> FusedIterator for Cursor<S> {}

impl<S: IntoIterator> Drop for Cursor<S> {
    fn drop(&mut self) {
        // NOTE: only traces; the inner iterator drops with the state.
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<usize>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct Flagged {
        inner: std::vec::IntoIter<i32>,
        _flag: DropFlag,
    }

    impl Iterator for Flagged {
        type Item = i32;
        fn next(&mut self) -> Option<i32> {
            self.inner.next()
        }
    }

    #[test]
    fn opens_lazily() {
        let opened = Rc::new(Cell::new(false));
        let flag = Rc::clone(&opened);
        let src = std::iter::once(()).flat_map(move |_| {
            flag.set(true);
            vec![1, 2]
        });
        let mut c = Cursor::new(src);
        assert!(c.is_pending());
        assert!(!opened.get());
        assert_eq!(c.pull(), Some(1));
        assert!(opened.get());
    }

    #[test]
    fn exhaustion_releases() {
        let drops = Rc::new(Cell::new(0));
        let src = Flagged {
            inner: vec![1].into_iter(),
            _flag: DropFlag(Rc::clone(&drops)),
        };
        let mut c = Cursor::new(src);
        assert_eq!(c.pull(), Some(1));
        assert_eq!(drops.get(), 0);
        assert_eq!(c.pull(), None);
        assert_eq!(drops.get(), 1);
        assert!(c.is_released());
        assert_eq!(c.pull(), None);
        drop(c);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn drop_releases_open_cursor_once() {
        let drops = Rc::new(Cell::new(0));
        let src = Flagged {
            inner: vec![1, 2, 3].into_iter(),
            _flag: DropFlag(Rc::clone(&drops)),
        };
        let mut c = Cursor::new(src);
        assert_eq!(c.next(), Some(1));
        drop(c);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn nth_skips_and_releases_past_end() {
        let mut c = Cursor::new(vec![1, 2, 3, 4]);
        assert_eq!(c.nth(2), Some(3));
        assert_eq!(c.nth(5), None);
        assert!(c.is_released());
    }

    #[test]
    fn size_hint_tracks_state() {
        let mut c = Cursor::new(vec![1, 2, 3]);
        assert_eq!(c.size_hint(), (0, None));
        c.open();
        assert_eq!(c.size_hint(), (3, Some(3)));
        c.release();
        assert_eq!(c.size_hint(), (0, Some(0)));
    }
}
