//! Prefix and suffix equality checks.
//!
//! Both short-circuit to `false` without consuming anything when the two
//! sources report exact lengths and `second` is the longer one.

use std::collections::VecDeque;

use seqkit_core::config::exact_len;

/// Whether `first` ends with the elements of `second`, compared with `==`.
///
/// ```
/// use seqkit_operators::ends_with::ends_with;
///
/// assert!(ends_with(vec![1, 2, 3, 4], vec![3, 4]));
/// assert!(!ends_with(vec![1, 2], vec![1, 2, 3]));
/// ```
pub fn ends_with<A, B>(first: A, second: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    ends_with_by(first, second, |a, b| a == b)
}

/// Whether `first` ends with the elements of `second`, compared with `eq`.
pub fn ends_with_by<A, B, F>(first: A, second: B, mut eq: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut first = first.into_iter();
    let second = second.into_iter();
    let first_len = exact_len(first.size_hint());
    if let (Some(f), Some(s)) = (first_len, exact_len(second.size_hint())) {
        if s > f {
            return false;
        }
    }

    let second: Vec<B::Item> = second.collect();
    let n = second.len();
    if n == 0 {
        return true;
    }

    let tail: VecDeque<A::Item> = match first_len {
        Some(f) if n > f => return false,
        Some(f) => {
            // Known length: jump straight to the suffix window.
            if f > n && first.nth(f - n - 1).is_none() {
                return false;
            }
            first.collect()
        }
        None => {
            let mut window = VecDeque::with_capacity(n);
            for item in first {
                if window.len() == n {
                    window.pop_front();
                }
                window.push_back(item);
            }
            window
        }
    };

    tail.len() == n && tail.iter().zip(&second).all(|(a, b)| eq(a, b))
}

/// Whether `first` starts with the elements of `second`, compared with `==`.
pub fn starts_with<A, B>(first: A, second: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    starts_with_by(first, second, |a, b| a == b)
}

/// Whether `first` starts with the elements of `second`, compared with `eq`.
/// Stops pulling from both at the first mismatch.
pub fn starts_with_by<A, B, F>(first: A, second: B, mut eq: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut first = first.into_iter();
    let second = second.into_iter();
    if let (Some(f), Some(s)) = (
        exact_len(first.size_hint()),
        exact_len(second.size_hint()),
    ) {
        if s > f {
            return false;
        }
    }
    for b in second {
        match first.next() {
            Some(a) if eq(&a, &b) => {}
            _ => return false,
        }
    }
    true
}
