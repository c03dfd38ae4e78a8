//! Runtime tag for nested sequence elements.
//!
//! Flattening a sequence whose elements may themselves be sequences needs a
//! per-element answer to "is this a sequence or a scalar?". The original
//! duck-typed check becomes an explicit tag here: a [`Node`] is either a
//! [`Leaf`](Node::Leaf) scalar or a lazy [`Seq`](Node::Seq) of further nodes,
//! so nesting can go arbitrarily deep while [`flat`](crate::Seq::flat) takes
//! its depth as a plain runtime integer.

use crate::seq::Seq;
use crate::source;

/// One element of a possibly-nested sequence.
#[derive(Clone)]
pub enum Node<T> {
    /// A scalar element; passes through flattening unchanged at any depth.
    Leaf(T),
    /// A nested sequence of further nodes.
    Seq(Seq<Node<T>>),
}

impl<T> Node<T>
where
    T: Clone + 'static,
{
    /// Build a nested node from concrete child nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Node;
    ///
    /// // [1, [2, 3]]
    /// let node: Node<i32> = Node::list(vec![
    ///     Node::Leaf(1),
    ///     Node::list(vec![Node::Leaf(2), Node::Leaf(3)]),
    /// ]);
    /// ```
    pub fn list(children: impl IntoIterator<Item = Node<T>>) -> Node<T> {
        Node::Seq(source::from(children.into_iter().collect::<Vec<_>>()))
    }

    /// Build a nested node of scalar leaves.
    pub fn leaves(values: impl IntoIterator<Item = T>) -> Node<T> {
        Node::list(values.into_iter().map(Node::Leaf))
    }
}

impl<T> Node<T> {
    /// Returns the scalar value if this node is a leaf.
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Node::Leaf(t) => Some(t),
            Node::Seq(_) => None,
        }
    }

    /// Returns `true` if this node is a nested sequence.
    pub const fn is_seq(&self) -> bool {
        matches!(self, Node::Seq(_))
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::Leaf(value)
    }
}
