//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Counters observed through a `TestingSequence`.
#[derive(Default)]
pub struct Probe {
    pub opened: Cell<usize>,
    pub released: Cell<usize>,
    pub pulled: Cell<usize>,
}

/// A sequence that records how it is opened, pulled and released.
pub struct TestingSequence<T> {
    items: Vec<T>,
    probe: Rc<Probe>,
    /// Report an exact size hint once opened.
    sized: bool,
    /// Panic instead of yielding the element at this position.
    fail_at: Option<usize>,
}

impl<T> TestingSequence<T> {
    pub fn new(items: Vec<T>) -> (Self, Rc<Probe>) {
        let probe = Rc::new(Probe::default());
        (
            Self {
                items,
                probe: Rc::clone(&probe),
                sized: true,
                fail_at: None,
            },
            probe,
        )
    }

    /// Same as `new` but with an unknown length.
    pub fn without_len(items: Vec<T>) -> (Self, Rc<Probe>) {
        let (mut seq, probe) = Self::new(items);
        seq.sized = false;
        (seq, probe)
    }

    /// Same as `without_len` but panics when asked for element `position`.
    pub fn failing_at(items: Vec<T>, position: usize) -> (Self, Rc<Probe>) {
        let (mut seq, probe) = Self::without_len(items);
        seq.fail_at = Some(position);
        (seq, probe)
    }
}

pub struct TestingCursor<T> {
    inner: std::vec::IntoIter<T>,
    probe: Rc<Probe>,
    sized: bool,
    fail_at: Option<usize>,
}

impl<T> IntoIterator for TestingSequence<T> {
    type Item = T;
    type IntoIter = TestingCursor<T>;

    fn into_iter(self) -> TestingCursor<T> {
        self.probe.opened.set(self.probe.opened.get() + 1);
        TestingCursor {
            inner: self.items.into_iter(),
            probe: self.probe,
            sized: self.sized,
            fail_at: self.fail_at,
        }
    }
}

impl<T> Iterator for TestingCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.fail_at == Some(self.probe.pulled.get()) {
            panic!("source failed at element {}", self.probe.pulled.get());
        }
        let item = self.inner.next();
        if item.is_some() {
            self.probe.pulled.set(self.probe.pulled.get() + 1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.sized {
            self.inner.size_hint()
        } else {
            (0, None)
        }
    }
}

impl<T> Drop for TestingCursor<T> {
    fn drop(&mut self) {
        self.probe.released.set(self.probe.released.get() + 1);
    }
}

/// A sequence whose `into_iter()` panics; used to prove operators defer it.
pub struct BreakingSequence<T>(std::marker::PhantomData<T>);

impl<T> BreakingSequence<T> {
    pub fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T> IntoIterator for BreakingSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        panic!("BreakingSequence was opened");
    }
}

/// A cursor that panics when pulled past `ok` elements.
pub struct PanickingAfter {
    pub ok: usize,
}

impl IntoIterator for PanickingAfter {
    type Item = i32;
    type IntoIter = Box<dyn Iterator<Item = i32>>;

    fn into_iter(self) -> Self::IntoIter {
        let ok = self.ok;
        Box::new((0..).map(move |i| {
            if i as usize >= ok {
                panic!("source failed at {i}");
            }
            i
        }))
    }
}
