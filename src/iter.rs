//! Bridging cursors to std iterators.
//!
//! [`Iter`] drives a boxed [`Cursor`](crate::Cursor) as a std [`Iterator`],
//! so composed sequences drop into `for` loops and the std adapter
//! ecosystem. Obtain one with [`Seq::iter`](crate::Seq::iter) or by
//! iterating `&Seq<T>` directly.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::from;
//!
//! let seq = from(vec![1, 2, 3]).map(|x| x * 2);
//! let mut collected = Vec::new();
//! for x in &seq {
//!     collected.push(x);
//! }
//! assert_eq!(collected, vec![2, 4, 6]);
//! ```

use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::Cursor;

/// Iterator over one traversal of a sequence.
///
/// Latches after the first `Done`: further `next` calls return `None`
/// without stepping the underlying cursor again.
pub struct Iter<T> {
    state: IterState<T>,
}

enum IterState<T> {
    Active(Box<dyn Cursor<T>>),
    Exhausted,
}

impl<T> Iter<T> {
    /// Create an iterator driving the given cursor.
    pub fn new(cursor: Box<dyn Cursor<T>>) -> Self {
        Iter {
            state: IterState::Active(cursor),
        }
    }

    /// Check whether the traversal has completed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, IterState::Exhausted)
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.state {
            IterState::Active(cursor) => match cursor.step() {
                Pull::Next(item) => Some(item),
                Pull::Done => {
                    self.state = IterState::Exhausted;
                    None
                }
            },
            IterState::Exhausted => None,
        }
    }
}

impl<T: 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}
