//! Appending trailing sequences and scalars.

use std::rc::Rc;

use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::{Cursor, Traverse};

/// A trailing argument to [`concat`](crate::Seq::concat): a single scalar
/// element or a whole sequence.
///
/// This tag is the capability check made explicit: an argument is appended
/// either as itself or element-by-element depending on its own kind, and a
/// scalar can never be misclassified as a sequence.
#[derive(Clone)]
pub enum Tail<T> {
    /// Append one scalar element.
    Item(T),
    /// Append every element of a sequence, in order.
    Seq(Seq<T>),
}

/// Create a concatenating decorator over `upstream` and its trailing args.
pub(crate) fn concat<T>(upstream: Seq<T>, tails: Vec<Tail<T>>) -> Concat<T> {
    Concat {
        upstream,
        tails: Rc::new(tails),
    }
}

/// Decorator that exhausts the upstream, then each tail left to right.
pub(crate) struct Concat<T> {
    upstream: Seq<T>,
    tails: Rc<Vec<Tail<T>>>,
}

impl<T> Traverse<T> for Concat<T>
where
    T: Clone + 'static,
{
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(ConcatCursor {
            current: Some(self.upstream.cursor()),
            tails: Rc::clone(&self.tails),
            position: 0,
        })
    }
}

struct ConcatCursor<T> {
    current: Option<Box<dyn Cursor<T>>>,
    tails: Rc<Vec<Tail<T>>>,
    position: usize,
}

impl<T> Cursor<T> for ConcatCursor<T>
where
    T: Clone + 'static,
{
    fn step(&mut self) -> Pull<T> {
        loop {
            if let Some(cursor) = &mut self.current {
                match cursor.step() {
                    Pull::Next(t) => return Pull::Next(t),
                    Pull::Done => self.current = None,
                }
            }
            let Some(tail) = self.tails.get(self.position) else {
                return Pull::Done;
            };
            self.position += 1;
            match tail {
                Tail::Item(t) => return Pull::Next(t.clone()),
                Tail::Seq(seq) => self.current = Some(seq.cursor()),
            }
        }
    }
}
