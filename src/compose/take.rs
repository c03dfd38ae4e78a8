//! Bounded prefix extraction.

use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::{Cursor, Traverse};

/// Create a decorator yielding at most `limit` upstream elements.
pub(crate) fn take<T>(upstream: Seq<T>, limit: usize) -> Take<T> {
    Take { upstream, limit }
}

/// Decorator that stops after `limit` elements.
///
/// Termination is guaranteed after at most `limit` upstream pulls regardless
/// of whether the upstream ever exhausts on its own; the `(limit + 1)`-th
/// upstream element is never requested.
pub(crate) struct Take<T> {
    upstream: Seq<T>,
    limit: usize,
}

impl<T: 'static> Traverse<T> for Take<T> {
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(TakeCursor {
            upstream: self.upstream.cursor(),
            remaining: self.limit,
        })
    }
}

struct TakeCursor<T> {
    upstream: Box<dyn Cursor<T>>,
    remaining: usize,
}

impl<T> Cursor<T> for TakeCursor<T> {
    fn step(&mut self) -> Pull<T> {
        if self.remaining == 0 {
            return Pull::Done;
        }
        match self.upstream.step() {
            Pull::Next(t) => {
                self.remaining -= 1;
                Pull::Next(t)
            }
            Pull::Done => {
                self.remaining = 0;
                Pull::Done
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from, from_fn};

    #[test]
    fn test_take_terminates_unbounded_source() {
        let naturals = from_fn(|| 0u64..);
        let prefix = naturals.take(1000).to_vec();
        assert_eq!(prefix.len(), 1000);
        assert_eq!(prefix[0], 0);
        assert_eq!(prefix[999], 999);
    }

    #[test]
    fn test_take_stops_at_upstream_exhaustion() {
        assert_eq!(from(vec![1, 2]).take(10).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_take_zero_yields_nothing() {
        assert!(from(vec![1, 2, 3]).take(0).is_empty());
    }

    #[test]
    fn test_take_never_pulls_past_the_limit() {
        use std::cell::Cell;
        use std::rc::Rc;

        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let seq = from_fn(|| 0u32..)
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .take(3);

        let _ = seq.to_vec();
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_take_retraversal_is_independent() {
        let seq = from_fn(|| 0u32..).take(3);
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
    }
}
