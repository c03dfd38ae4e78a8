//! Lazily dropping elements that fail a predicate.

use std::rc::Rc;

use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::{Cursor, Traverse};

/// Create a filtering decorator over `upstream`.
///
/// The predicate is shared between the decorator and every cursor it hands
/// out, so each traversal sees the same test.
pub(crate) fn filter<T>(upstream: Seq<T>, predicate: Rc<dyn Fn(&T) -> bool>) -> Filter<T> {
    Filter {
        upstream,
        predicate,
    }
}

/// Decorator that yields only elements satisfying the predicate.
pub(crate) struct Filter<T> {
    upstream: Seq<T>,
    predicate: Rc<dyn Fn(&T) -> bool>,
}

impl<T: 'static> Traverse<T> for Filter<T> {
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(FilterCursor {
            upstream: self.upstream.cursor(),
            predicate: Rc::clone(&self.predicate),
        })
    }
}

struct FilterCursor<T> {
    upstream: Box<dyn Cursor<T>>,
    predicate: Rc<dyn Fn(&T) -> bool>,
}

impl<T> Cursor<T> for FilterCursor<T> {
    fn step(&mut self) -> Pull<T> {
        // One predicate call per upstream element, in upstream order.
        loop {
            match self.upstream.step() {
                Pull::Next(t) => {
                    if (self.predicate)(&t) {
                        return Pull::Next(t);
                    }
                }
                Pull::Done => return Pull::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from, from_fn};

    #[test]
    fn test_filter_keeps_matching_elements_in_order() {
        let seq = from(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 2 == 0);
        assert_eq!(seq.to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_is_lazy() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let seq = from(0..100).filter(move |_| {
            counter.set(counter.get() + 1);
            true
        });

        assert_eq!(calls.get(), 0);
        let _ = seq.clone().take(3).to_vec();
        assert_eq!(calls.get(), 3); // only the pulled elements were tested
    }

    #[test]
    fn test_filter_over_unbounded_source() {
        let evens = from_fn(|| 0u64..).filter(|x| x % 2 == 0);
        assert_eq!(evens.take(4).to_vec(), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_filter_rejecting_everything_is_empty() {
        assert!(from(vec![1, 2, 3]).filter(|_| false).is_empty());
    }

    #[test]
    fn test_filter_retraversal_yields_same_elements() {
        let seq = from(vec![1, 2, 3, 4]).filter(|x| *x > 2);
        assert_eq!(seq.to_vec(), vec![3, 4]);
        assert_eq!(seq.to_vec(), vec![3, 4]);
    }
}
