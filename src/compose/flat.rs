//! Recursive flattening of nested sequences.

use crate::node::Node;
use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::{Cursor, Traverse};

/// Create a flattening decorator over `upstream`.
///
/// `depth` of `None` flattens without bound; `Some(d)` must be `d >= 1`
/// (depth zero never builds a decorator, [`Seq::flat`](crate::Seq::flat)
/// returns the sequence unchanged instead).
pub(crate) fn flat<T>(upstream: Seq<Node<T>>, depth: Option<usize>) -> Flat<T> {
    Flat { upstream, depth }
}

/// Decorator that splices nested sequences into the element stream.
pub(crate) struct Flat<T> {
    upstream: Seq<Node<T>>,
    depth: Option<usize>,
}

impl<T: 'static> Traverse<Node<T>> for Flat<T> {
    fn cursor(&self) -> Box<dyn Cursor<Node<T>>> {
        Box::new(FlatCursor {
            upstream: self.upstream.cursor(),
            inner: None,
            depth: self.depth,
        })
    }
}

struct FlatCursor<T> {
    upstream: Box<dyn Cursor<Node<T>>>,
    /// Cursor over the nested sequence currently being spliced in, already
    /// flattened at one less level of depth.
    inner: Option<Box<dyn Cursor<Node<T>>>>,
    depth: Option<usize>,
}

impl<T: 'static> Cursor<Node<T>> for FlatCursor<T> {
    fn step(&mut self) -> Pull<Node<T>> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.step() {
                    Pull::Next(node) => return Pull::Next(node),
                    Pull::Done => self.inner = None,
                }
            }
            match self.upstream.step() {
                Pull::Done => return Pull::Done,
                Pull::Next(Node::Leaf(t)) => return Pull::Next(Node::Leaf(t)),
                Pull::Next(Node::Seq(nested)) => {
                    self.inner = Some(descend(nested, self.depth.map(|d| d - 1)));
                }
            }
        }
    }
}

/// Cursor over `nested`, flattened at the remaining depth.
fn descend<T: 'static>(nested: Seq<Node<T>>, remaining: Option<usize>) -> Box<dyn Cursor<Node<T>>> {
    match remaining {
        Some(d) => nested.flat(d).cursor(),
        None => nested.flat_deep().cursor(),
    }
}
