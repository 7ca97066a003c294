//! Corecursive generation from a seed state.

use std::iter::FusedIterator;

/// See [`unfold`]. Clone it before iterating to replay from the seed.
#[derive(Clone)]
pub struct Unfold<St, G, P, N, R> {
    state: Option<St>,
    generate: G,
    continue_if: P,
    next_state: N,
    project: R,
}

/// Builds a sequence by repeatedly stepping a state.
///
/// Each pull computes `step = generate(state)`. If `continue_if(&step)` is
/// false the sequence ends; otherwise the next state is `next_state(&step)`
/// and `project(step)` is yielded. Nothing runs until the first pull.
///
/// ```
/// use seqkit_operators::unfold::unfold;
///
/// // Fibonacci numbers below 50.
/// let fib: Vec<u32> = unfold(
///     (0u32, 1u32),
///     |(a, b): (u32, u32)| (a, b, a + b),
///     |&(a, _, _): &(u32, u32, u32)| a < 50,
///     |&(_, b, c): &(u32, u32, u32)| (b, c),
///     |(a, _, _): (u32, u32, u32)| a,
/// )
/// .collect();
/// assert_eq!(fib, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn unfold<St, T, Out, G, P, N, R>(
    seed: St,
    generate: G,
    continue_if: P,
    next_state: N,
    project: R,
) -> Unfold<St, G, P, N, R>
where
    G: FnMut(St) -> T,
    P: FnMut(&T) -> bool,
    N: FnMut(&T) -> St,
    R: FnMut(T) -> Out,
{
    Unfold {
        state: Some(seed),
        generate,
        continue_if,
        next_state,
        project,
    }
}

impl<St, T, Out, G, P, N, R> Iterator for Unfold<St, G, P, N, R>
where
    G: FnMut(St) -> T,
    P: FnMut(&T) -> bool,
    N: FnMut(&T) -> St,
    R: FnMut(T) -> Out,
{
    type Item = Out;

    fn next(&mut self) -> Option<Out> {
        let state = self.state.take()?;
        let step = (self.generate)(state);
        if !(self.continue_if)(&step) {
            return None;
        }
        self.state = Some((self.next_state)(&step));
        Some((self.project)(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            Some(_) => (0, None),
            None => (0, Some(0)),
        }
    }
}

impl<St, T, Out, G, P, N, R> FusedIterator for Unfold<St, G, P, N, R>
where
    G: FnMut(St) -> T,
    P: FnMut(&T) -> bool,
    N: FnMut(&T) -> St,
    R: FnMut(T) -> Out,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_when_predicate_fails() {
        let out: Vec<i32> = unfold(
            1,
            |s: i32| s,
            |s: &i32| *s <= 4,
            |s: &i32| s + 1,
            |s: i32| s * s,
        )
        .collect();
        assert_eq!(out, vec![1, 4, 9, 16]);
    }

    #[test]
    fn immediate_stop_is_empty() {
        let mut it = unfold(0, |s: i32| s, |_: &i32| false, |s: &i32| *s, |s: i32| s);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn infinite_is_lazy() {
        let mut calls = 0;
        let out: Vec<u64> = unfold(
            1u64,
            |s: u64| {
                calls += 1;
                s
            },
            |_: &u64| true,
            |s: &u64| s * 2,
            |s: u64| s,
        )
        .take(5)
        .collect();
        assert_eq!(out, vec![1, 2, 4, 8, 16]);
        assert_eq!(calls, 5);
    }

    #[test]
    fn clone_replays_from_seed() {
        let it = unfold(3, |s: i32| s, |s: &i32| *s > 0, |s: &i32| s - 1, |s: i32| s);
        let replay = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(replay.collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
