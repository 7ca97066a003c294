//! Ordering and equality comparers supplied by callers.
//!
//! Operators only ever compare keys through these traits. When a caller does
//! not supply one, `Natural` (for `Ord`) or `NaturalEq` (for `Hash + Eq`) is
//! used.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Total order over `T`.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The type's own `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the wrapped comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Equivalence relation over `T` with a compatible hash: keys that compare
/// equal must hash equal.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash_of(&self, value: &T) -> u64;
}

/// The type's own `Hash + Eq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalEq;

impl<T: Hash + Eq + ?Sized> EqualityComparer<T> for NaturalEq {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash_of(&self, value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }
}

/// Equality comparer assembled from an `eq` and a `hash` closure.
#[derive(Clone)]
pub struct FnEquality<E, H> {
    eq: E,
    hash: H,
}

/// Build an `EqualityComparer` from closures.
///
/// ```
/// use seqkit_core::compare::{equality_by, EqualityComparer};
///
/// let ci = equality_by::<str, _, _>(
///     |a: &str, b: &str| a.eq_ignore_ascii_case(b),
///     |s: &str| s.to_ascii_lowercase().len() as u64,
/// );
/// assert!(ci.equals("Ab", "aB"));
/// ```
pub fn equality_by<T, E, H>(eq: E, hash: H) -> FnEquality<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    FnEquality { eq, hash }
}

impl<T: ?Sized, E, H> EqualityComparer<T> for FnEquality<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    #[inline]
    fn hash_of(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}
