//! Source adapters: turning ordinary values into traversable sequences.
//!
//! This module provides the entry points for building a [`Seq`]:
//!
//! - [`from(collection)`](from) - any clonable collection or range
//! - [`from_fn(factory)`](from_fn) - a cursor-factory closure, the universal
//!   adapter (and the way to wrap unbounded sources)
//! - [`single_use(iter)`](single_use) - a one-shot iterator
//! - [`empty()`](empty) - the empty sequence

use std::cell::RefCell;

use crate::seq::Seq;
use crate::traverse::{Cursor, Steps, Traverse};

/// Wrap a collection in a lazy sequence.
///
/// Accepts anything that is `IntoIterator + Clone`: vectors, arrays, ranges,
/// and most owned collections. Each traversal clones the collection and walks
/// the clone, so the sequence can be traversed any number of times.
///
/// # Examples
///
/// ```rust
/// use lazyseq::from;
///
/// let seq = from(vec![1, 2, 3]).map(|x| x * 3);
/// assert_eq!(seq.to_vec(), vec![3, 6, 9]);
/// assert_eq!(seq.to_vec(), vec![3, 6, 9]);
/// ```
pub fn from<C, T>(collection: C) -> Seq<T>
where
    C: IntoIterator<Item = T> + Clone + 'static,
    C::IntoIter: 'static,
    T: 'static,
{
    Seq::new(collected(collection))
}

/// Wrap a cursor-factory closure in a lazy sequence.
///
/// The closure is invoked once per traversal to produce a fresh iterator.
/// This is the adapter of last resort: anything that can describe how to
/// start over can be a sequence, including unbounded sources.
///
/// # Examples
///
/// ```rust
/// use lazyseq::from_fn;
///
/// let naturals = from_fn(|| 0u64..);
/// assert_eq!(naturals.take(4).to_vec(), vec![0, 1, 2, 3]);
/// ```
pub fn from_fn<F, I, T>(factory: F) -> Seq<T>
where
    F: Fn() -> I + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
    T: 'static,
{
    Seq::new(Factory { factory })
}

/// Wrap a one-shot iterator in a lazy sequence.
///
/// The first cursor drains the iterator; every later cursor is silently
/// empty. This preserves the behavior of wrapping an already-started
/// generator: the wrapper does not detect or reject re-traversal, it just
/// reflects what the source has left.
///
/// # Examples
///
/// ```rust
/// use lazyseq::single_use;
///
/// let seq = single_use(vec![1, 2, 3].into_iter());
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// assert_eq!(seq.to_vec(), Vec::<i32>::new()); // second pass is empty
/// ```
pub fn single_use<I, T>(iter: I) -> Seq<T>
where
    I: Iterator<Item = T> + 'static,
    T: 'static,
{
    Seq::new(SingleUse {
        iter: RefCell::new(Some(iter)),
    })
}

/// The empty sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::empty;
///
/// assert!(empty::<i32>().is_empty());
/// ```
pub fn empty<T: 'static>() -> Seq<T> {
    from_fn(std::iter::empty::<T>)
}

/// Build a [`Collected`] source without wrapping it in a [`Seq`].
///
/// Useful when composing sources by hand, e.g. behind an `Either`.
pub fn collected<C, T>(collection: C) -> Collected<C>
where
    C: IntoIterator<Item = T> + Clone,
{
    Collected { collection }
}

/// Source backed by a clonable collection; clones it once per cursor.
pub struct Collected<C> {
    collection: C,
}

impl<C, T> Traverse<T> for Collected<C>
where
    C: IntoIterator<Item = T> + Clone,
    C::IntoIter: 'static,
    T: 'static,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(Steps::new(self.collection.clone().into_iter()))
    }
}

struct Factory<F> {
    factory: F,
}

impl<F, I, T> Traverse<T> for Factory<F>
where
    F: Fn() -> I,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
    T: 'static,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(Steps::new((self.factory)().into_iter()))
    }
}

struct SingleUse<I> {
    iter: RefCell<Option<I>>,
}

impl<I, T> Traverse<T> for SingleUse<I>
where
    I: Iterator<Item = T> + 'static,
    T: 'static,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        match self.iter.borrow_mut().take() {
            Some(iter) => Box::new(Steps::new(iter)),
            None => Box::new(Steps::new(std::iter::empty())),
        }
    }
}
