//! Lock-step traversal of several sequences.

use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::{Cursor, Traverse};

/// Zip two sequences into a sequence of pairs.
///
/// Traversal advances both inputs in lock-step and terminates as soon as
/// either is exhausted (shortest-sequence truncation); an element already
/// pulled from the other input at that final step is discarded.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{from, zip};
///
/// let pairs = zip(from(vec!["a", "b", "c"]), from(vec![1, 2, 3]));
/// assert_eq!(pairs.to_vec(), vec![("a", 1), ("b", 2), ("c", 3)]);
/// ```
pub fn zip<A, B>(left: Seq<A>, right: Seq<B>) -> Seq<(A, B)>
where
    A: 'static,
    B: 'static,
{
    Seq::new(Zip { left, right })
}

/// Zip any number of same-typed sequences into a sequence of rows.
///
/// Each row holds one element from every input, in argument order; traversal
/// terminates at the shortest input. Zipping no sequences at all is empty.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{from, zip_all};
///
/// let rows = zip_all(vec![from(vec![1, 2, 3]), from(vec![4, 5]), from(vec![6, 7])]);
/// assert_eq!(rows.to_vec(), vec![vec![1, 4, 6], vec![2, 5, 7]]);
/// ```
pub fn zip_all<T: 'static>(sources: impl IntoIterator<Item = Seq<T>>) -> Seq<Vec<T>> {
    Seq::new(ZipAll {
        sources: sources.into_iter().collect(),
    })
}

struct Zip<A, B> {
    left: Seq<A>,
    right: Seq<B>,
}

impl<A: 'static, B: 'static> Traverse<(A, B)> for Zip<A, B> {
    fn cursor(&self) -> Box<dyn Cursor<(A, B)>> {
        Box::new(ZipCursor {
            left: self.left.cursor(),
            right: self.right.cursor(),
        })
    }
}

struct ZipCursor<A, B> {
    left: Box<dyn Cursor<A>>,
    right: Box<dyn Cursor<B>>,
}

impl<A, B> Cursor<(A, B)> for ZipCursor<A, B> {
    fn step(&mut self) -> Pull<(A, B)> {
        let Pull::Next(a) = self.left.step() else {
            return Pull::Done;
        };
        match self.right.step() {
            Pull::Next(b) => Pull::Next((a, b)),
            Pull::Done => Pull::Done,
        }
    }
}

struct ZipAll<T> {
    sources: Vec<Seq<T>>,
}

impl<T: 'static> Traverse<Vec<T>> for ZipAll<T> {
    fn cursor(&self) -> Box<dyn Cursor<Vec<T>>> {
        Box::new(ZipAllCursor {
            cursors: self.sources.iter().map(Seq::cursor).collect(),
        })
    }
}

struct ZipAllCursor<T> {
    cursors: Vec<Box<dyn Cursor<T>>>,
}

impl<T> Cursor<Vec<T>> for ZipAllCursor<T> {
    fn step(&mut self) -> Pull<Vec<T>> {
        // The degenerate zero-input row would never exhaust.
        if self.cursors.is_empty() {
            return Pull::Done;
        }
        let mut row = Vec::with_capacity(self.cursors.len());
        for cursor in &mut self.cursors {
            match cursor.step() {
                Pull::Next(t) => row.push(t),
                Pull::Done => return Pull::Done,
            }
        }
        Pull::Next(row)
    }
}

#[cfg(test)]
mod tests {
    use super::{zip, zip_all};
    use crate::source::{empty, from, from_fn};

    #[test]
    fn test_zip_pairs_in_lock_step() {
        let pairs = zip(from(vec!['a', 'b', 'c']), from(vec![1, 2, 3]));
        assert_eq!(pairs.to_vec(), vec![('a', 1), ('b', 2), ('c', 3)]);
    }

    #[test]
    fn test_zip_truncates_at_shorter_input() {
        let pairs = zip(from(vec![1, 2, 3, 4]), from(vec!["x", "y"]));
        assert_eq!(pairs.to_vec(), vec![(1, "x"), (2, "y")]);

        let flipped = zip(from(vec!["x", "y"]), from(vec![1, 2, 3, 4]));
        assert_eq!(flipped.to_vec(), vec![("x", 1), ("y", 2)]);
    }

    #[test]
    fn test_zip_with_empty_side_is_empty() {
        assert!(zip(empty::<i32>(), from(vec![1, 2])).is_empty());
        assert!(zip(from(vec![1, 2]), empty::<i32>()).is_empty());
    }

    #[test]
    fn test_zip_against_unbounded_source() {
        let pairs = zip(from(vec![10, 20]), from_fn(|| 0u32..));
        assert_eq!(pairs.to_vec(), vec![(10, 0), (20, 1)]);
    }

    #[test]
    fn test_zip_all_rows_in_argument_order() {
        let rows = zip_all(vec![from(vec![1, 2, 3]), from(vec![4, 5]), from(vec![6, 7])]);
        assert_eq!(rows.to_vec(), vec![vec![1, 4, 6], vec![2, 5, 7]]);
    }

    #[test]
    fn test_zip_all_of_nothing_is_empty() {
        assert!(zip_all(Vec::<crate::Seq<i32>>::new()).is_empty());
    }

    #[test]
    fn test_zip_retraversal() {
        let pairs = zip(from(vec![1, 2]), from(vec![3, 4]));
        assert_eq!(pairs.to_vec(), vec![(1, 3), (2, 4)]);
        assert_eq!(pairs.to_vec(), vec![(1, 3), (2, 4)]);
    }
}
