//! Core traits for pull-based traversal.
//!
//! This module defines the two capabilities the whole engine is built on:
//!
//! - [`Cursor<T>`]: transient, per-traversal state. Each [`step`](Cursor::step)
//!   either produces the next element or reports exhaustion.
//! - [`Traverse<T>`]: the cursor-factory capability. Anything that can hand
//!   out a fresh [`Cursor`] on demand can back a [`Seq`](crate::Seq).
//!
//! A fresh cursor starts an independent traversal whose progress does not
//! depend on any prior cursor, provided the underlying original source itself
//! supports repeated traversal. The engine never caches elements to paper
//! over a single-use source.
//!
//! # Examples
//!
//! A hand-rolled source that counts down from a fixed value:
//!
//! ```rust
//! use lazyseq::{Cursor, Seq, Steps, Traverse};
//!
//! struct Countdown(u32);
//!
//! impl Traverse<u32> for Countdown {
//!     fn cursor(&self) -> Box<dyn Cursor<u32>> {
//!         Box::new(Steps::new((1..=self.0).rev()))
//!     }
//! }
//!
//! let seq = Seq::new(Countdown(3));
//! assert_eq!(seq.to_vec(), vec![3, 2, 1]);
//! assert_eq!(seq.to_vec(), vec![3, 2, 1]); // fresh cursor, fresh pass
//! ```

use std::rc::Rc;

use crate::pull::Pull;

/// Transient state of one in-progress traversal.
///
/// A cursor is created by [`Traverse::cursor`], advanced by repeated calls to
/// [`step`](Cursor::step), and simply dropped when the traversal completes or
/// is abandoned. Abandoning a cursor mid-traversal is always safe; no external
/// resources are held. Behavior of `step` after it has returned
/// [`Pull::Done`] is unspecified; drivers stop at the first `Done`.
pub trait Cursor<T> {
    /// Advance the traversal by one element.
    fn step(&mut self) -> Pull<T>;
}

/// The cursor-factory capability: produce a fresh traversal cursor on demand.
///
/// Implementors must not mutate themselves when handing out cursors (the
/// method takes `&self`); per-traversal bookkeeping lives in the cursor. The
/// one sanctioned exception is a deliberately single-use source such as
/// [`single_use`](crate::single_use), whose later cursors are silently empty.
pub trait Traverse<T> {
    /// Create a cursor positioned at the start of the sequence.
    fn cursor(&self) -> Box<dyn Cursor<T>>;
}

/// Adapts any [`Iterator`] into a [`Cursor`].
///
/// This is the inbound bridge from the std iterator world; the outbound
/// bridge is [`Iter`](crate::Iter).
///
/// # Examples
///
/// ```rust
/// use lazyseq::{Cursor, Pull, Steps};
///
/// let mut cursor = Steps::new(vec![1, 2].into_iter());
/// assert_eq!(cursor.step(), Pull::Next(1));
/// assert_eq!(cursor.step(), Pull::Next(2));
/// assert_eq!(cursor.step(), Pull::Done);
/// ```
pub struct Steps<I> {
    iter: I,
}

impl<I> Steps<I> {
    /// Wrap an iterator as a cursor.
    pub fn new(iter: I) -> Self {
        Steps { iter }
    }
}

impl<I> Cursor<I::Item> for Steps<I>
where
    I: Iterator,
{
    fn step(&mut self) -> Pull<I::Item> {
        self.iter.next().into()
    }
}

impl<T> Cursor<T> for Box<dyn Cursor<T>> {
    fn step(&mut self) -> Pull<T> {
        (**self).step()
    }
}

impl<'a, T, S> Traverse<T> for &'a S
where
    S: Traverse<T> + ?Sized,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        (**self).cursor()
    }
}

impl<T, S> Traverse<T> for Box<S>
where
    S: Traverse<T> + ?Sized,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        (**self).cursor()
    }
}

impl<T, S> Traverse<T> for Rc<S>
where
    S: Traverse<T> + ?Sized,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        (**self).cursor()
    }
}

impl<T, L, R> Traverse<T> for either::Either<L, R>
where
    L: Traverse<T>,
    R: Traverse<T>,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        match self {
            either::Either::Left(l) => l.cursor(),
            either::Either::Right(r) => r.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T>(mut cursor: Box<dyn Cursor<T>>) -> Vec<T> {
        let mut out = Vec::new();
        while let Pull::Next(t) = cursor.step() {
            out.push(t);
        }
        out
    }

    #[test]
    fn test_steps_wraps_iterator() {
        let mut cursor = Steps::new(0..3);
        assert_eq!(cursor.step(), Pull::Next(0));
        assert_eq!(cursor.step(), Pull::Next(1));
        assert_eq!(cursor.step(), Pull::Next(2));
        assert_eq!(cursor.step(), Pull::Done);
    }

    #[test]
    fn test_rc_source_hands_out_independent_cursors() {
        let source = Rc::new(crate::source::collected(vec![1, 2, 3]));
        assert_eq!(drain(source.cursor()), vec![1, 2, 3]);
        assert_eq!(drain(source.cursor()), vec![1, 2, 3]);
    }

    #[test]
    fn test_either_source_picks_active_side() {
        type Src = either::Either<
            crate::source::Collected<Vec<i32>>,
            crate::source::Collected<std::ops::Range<i32>>,
        >;
        let left: Src = either::Either::Left(crate::source::collected(vec![1, 2]));
        let right: Src = either::Either::Right(crate::source::collected(10..13));

        assert_eq!(drain(left.cursor()), vec![1, 2]);
        assert_eq!(drain(right.cursor()), vec![10, 11, 12]);
    }
}
