//! The sequence wrapper: the unit of composition.
//!
//! A [`Seq<T>`] is an immutable handle over a source with the cursor-factory
//! capability. Combinator methods build a new `Seq` whose source is a
//! decorator owning the upstream wrapper; terminal methods request a fresh
//! cursor and drive it to exhaustion or an early exit. Constructing or
//! composing wrappers never traverses anything.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::compose;
use crate::compose::Tail;
use crate::iter::Iter;
use crate::node::Node;
use crate::pull::Pull;
use crate::source;
use crate::traverse::{Cursor, Traverse};

/// An immutable, lazily-composed view over a traversable source.
///
/// Cloning a `Seq` is cheap (it clones a pointer to the shared source) and
/// both handles traverse independently.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{from, from_fn};
///
/// let total: i32 = from(vec![1, 2, 3])
///     .map(|x| x * 10)
///     .filter(|x| *x > 10)
///     .fold(0, |acc, x, _| acc + x);
/// assert_eq!(total, 50);
///
/// // Unbounded sources are safe under `take`.
/// let squares = from_fn(|| 0u64..).map(|x| x * x).take(4);
/// assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
/// ```
pub struct Seq<T> {
    source: Rc<dyn Traverse<T>>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seq")
    }
}

impl<T> Traverse<T> for Seq<T> {
    fn cursor(&self) -> Box<dyn Cursor<T>> {
        self.source.cursor()
    }
}

impl<T: 'static> Seq<T> {
    /// Wrap any cursor-factory source.
    ///
    /// Most callers want [`from`](crate::from) or [`from_fn`](crate::from_fn)
    /// instead; `new` is the seam for custom [`Traverse`] implementations.
    pub fn new(source: impl Traverse<T> + 'static) -> Seq<T> {
        Seq {
            source: Rc::new(source),
        }
    }

    /// Create a fresh traversal cursor over this sequence.
    ///
    /// Each cursor is an independent traversal, provided the underlying
    /// original source supports repeated traversal.
    pub fn cursor(&self) -> Box<dyn Cursor<T>> {
        self.source.cursor()
    }

    /// Iterate this sequence with a std [`Iterator`].
    ///
    /// ```rust
    /// use lazyseq::from;
    ///
    /// let seq = from(vec![1, 2, 3]);
    /// let doubled: Vec<i32> = seq.iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.cursor())
    }

    // ---- combinators -------------------------------------------------

    /// Keep only elements satisfying `predicate`, lazily.
    ///
    /// The predicate runs at most once per upstream element, in upstream
    /// order, when the element is pulled.
    pub fn filter(self, predicate: impl Fn(&T) -> bool + 'static) -> Seq<T> {
        Seq::new(compose::filter(self, Rc::new(predicate)))
    }

    /// Transform every element with `transform`, lazily.
    ///
    /// Invoked exactly once per pulled element, in upstream order.
    pub fn map<U: 'static>(self, transform: impl Fn(T) -> U + 'static) -> Seq<U> {
        Seq::new(compose::map(self, Rc::new(transform)))
    }

    /// Append trailing arguments after this sequence's elements.
    ///
    /// Arguments are consumed left to right, each fully before the next; a
    /// [`Tail::Seq`] contributes its elements, a [`Tail::Item`] contributes
    /// itself.
    ///
    /// ```rust
    /// use lazyseq::{from, Tail};
    ///
    /// let seq = from(vec![0]).concat(vec![Tail::Item(1), Tail::Seq(from(vec![2, 3]))]);
    /// assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
    /// ```
    pub fn concat(self, tails: impl IntoIterator<Item = Tail<T>>) -> Seq<T>
    where
        T: Clone,
    {
        Seq::new(compose::concat(self, tails.into_iter().collect()))
    }

    /// Yield at most `n` elements, then stop.
    ///
    /// Never requests the `(n + 1)`-th upstream element, which makes
    /// unbounded sources safe to consume. `take(0)` yields nothing.
    pub fn take(self, n: usize) -> Seq<T> {
        Seq::new(compose::take(self, n))
    }

    // ---- terminal operations -----------------------------------------
    //
    // Each drives a fresh cursor; the wrapper stays reusable.

    /// Invoke `f` on every element, in order. No-op on an empty sequence.
    pub fn for_each(&self, mut f: impl FnMut(T)) {
        let mut cursor = self.cursor();
        while let Pull::Next(item) = cursor.step() {
            f(item);
        }
    }

    /// Fold every element into an accumulator seeded with `init`.
    ///
    /// The closure receives `(accumulator, element, index)`.
    ///
    /// ```rust
    /// use lazyseq::from;
    ///
    /// let sum = from(vec![1, 2, 3]).fold(10, |acc, x, _| acc + x);
    /// assert_eq!(sum, 16);
    /// ```
    pub fn fold<A>(&self, init: A, mut f: impl FnMut(A, T, usize) -> A) -> A {
        let mut acc = init;
        let mut index = 0;
        let mut cursor = self.cursor();
        while let Pull::Next(item) = cursor.step() {
            acc = f(acc, item, index);
            index += 1;
        }
        acc
    }

    /// Fold without an initial value: the first element seeds the
    /// accumulator and folding starts from the second (index 1).
    ///
    /// Returns `None` on an empty sequence.
    pub fn reduce(&self, mut f: impl FnMut(T, T, usize) -> T) -> Option<T> {
        let mut cursor = self.cursor();
        let mut acc = match cursor.step() {
            Pull::Next(first) => first,
            Pull::Done => return None,
        };
        let mut index = 1;
        while let Pull::Next(item) = cursor.step() {
            acc = f(acc, item, index);
            index += 1;
        }
        Some(acc)
    }

    /// Materialize into a `Vec`, in traversal order.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut cursor = self.cursor();
        while let Pull::Next(item) = cursor.step() {
            out.push(item);
        }
        out
    }

    /// Materialize into a `HashSet`; duplicates collapse under equality.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        let mut out = HashSet::new();
        let mut cursor = self.cursor();
        while let Pull::Next(item) = cursor.step() {
            out.insert(item);
        }
        out
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first match; `false` on an empty sequence.
    pub fn any(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        let mut cursor = self.cursor();
        while let Pull::Next(item) = cursor.step() {
            if predicate(&item) {
                return true;
            }
        }
        false
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first counterexample; `true` on an empty sequence.
    pub fn all(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        !self.any(move |item| !predicate(item))
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any(|item| item == value)
    }

    /// Returns the first element satisfying `predicate`, if any.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let mut cursor = self.cursor();
        while let Pull::Next(item) = cursor.step() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Returns `true` if the first cursor step reports exhaustion.
    pub fn is_empty(&self) -> bool {
        self.cursor().step().is_done()
    }

    /// Count the elements by full traversal.
    ///
    /// Always O(n), even for collection-backed sources; the engine never
    /// assumes a cached size.
    pub fn len(&self) -> usize {
        self.fold(0, |count, _, _| count + 1)
    }

    /// Materialize, sort with the lexical string-conversion comparator, and
    /// return a new sequence over the sorted buffer.
    ///
    /// The default comparator converts each element to its string form and
    /// compares those, so `[23, 2, -200]` sorts as `["-200", "2", "23"]`
    /// would. Use [`sorted_by`](Seq::sorted_by) for a custom ordering.
    pub fn sorted(&self) -> Seq<T>
    where
        T: Clone + fmt::Display,
    {
        self.sorted_by(|a, b| a.to_string().cmp(&b.to_string()))
    }

    /// Materialize, sort with `compare`, and return a new sequence.
    ///
    /// The sort is stable (`Vec::sort_by`). Not lazy: the whole sequence is
    /// traversed immediately.
    pub fn sorted_by(&self, mut compare: impl FnMut(&T, &T) -> Ordering) -> Seq<T>
    where
        T: Clone,
    {
        let mut items = self.to_vec();
        items.sort_by(|a, b| compare(a, b));
        source::from(items)
    }
}

impl<T: 'static> Seq<Node<T>> {
    /// Flatten nested sequences up to `depth` levels, lazily.
    ///
    /// Nodes that are scalars ([`Node::Leaf`]) pass through unchanged at any
    /// level; nested sequences are spliced in, themselves flattened at
    /// `depth - 1`. `flat(0)` returns the sequence unchanged.
    ///
    /// ```rust
    /// use lazyseq::{from, Node};
    ///
    /// // [[1, 2], 3]
    /// let seq = from(vec![Node::leaves([1, 2]), Node::Leaf(3)]);
    /// let flat: Vec<i32> = seq.flat(1).to_vec().into_iter()
    ///     .filter_map(Node::into_leaf)
    ///     .collect();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    pub fn flat(self, depth: usize) -> Seq<Node<T>> {
        if depth == 0 {
            self
        } else {
            Seq::new(compose::flat(self, Some(depth)))
        }
    }

    /// Flatten nested sequences without a depth bound.
    ///
    /// Every nested level is recursed into; the result contains only
    /// [`Node::Leaf`] elements.
    pub fn flat_deep(self) -> Seq<Node<T>> {
        Seq::new(compose::flat(self, None))
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{empty, from, from_fn, single_use};

    #[test]
    fn test_retraversal_yields_identical_sequences() {
        let seq = from(vec![3, 1, 2]).map(|x| x * 2).filter(|x| *x > 2);
        assert_eq!(seq.to_vec(), seq.to_vec());
    }

    #[test]
    fn test_clone_handles_traverse_independently() {
        let seq = from(vec![1, 2, 3]);
        let other = seq.clone();
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(other.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        from(vec![1, 2, 3]).for_each(|x| seen.push(x));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_for_each_noop_on_empty() {
        let mut seen: Vec<i32> = Vec::new();
        empty().for_each(|x| seen.push(x));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_fold_with_initial() {
        let sum = from(vec![1, 2, 3]).fold(10, |acc, x, _| acc + x);
        assert_eq!(sum, 16);
    }

    #[test]
    fn test_fold_passes_running_index() {
        let indexed = from(vec!['a', 'b', 'c']).fold(Vec::new(), |mut acc, c, i| {
            acc.push((i, c));
            acc
        });
        assert_eq!(indexed, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn test_reduce_seeds_from_first_element() {
        let mut indexes = Vec::new();
        let sum = from(vec![1, 2, 3]).reduce(|acc, x, i| {
            indexes.push(i);
            acc + x
        });
        assert_eq!(sum, Some(6));
        assert_eq!(indexes, vec![1, 2]); // folding starts from the second element
    }

    #[test]
    fn test_reduce_on_empty_is_none() {
        assert_eq!(empty::<i32>().reduce(|acc, x, _| acc + x), None);
    }

    #[test]
    fn test_to_set_collapses_duplicates() {
        let set = from(vec![1, 2, 2, 3, 1]).to_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&2));
    }

    #[test]
    fn test_any_early_exits() {
        use std::cell::Cell;
        use std::rc::Rc;

        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let seq = from_fn(|| 0u32..).map(move |x| {
            counter.set(counter.get() + 1);
            x
        });

        assert!(seq.any(|x| *x == 2));
        assert_eq!(pulls.get(), 3); // stopped at the first match
    }

    #[test]
    fn test_any_false_on_empty() {
        assert!(!empty::<i32>().any(|_| true));
    }

    #[test]
    fn test_all_true_on_empty() {
        assert!(empty::<i32>().all(|_| false));
    }

    #[test]
    fn test_all_early_exits_on_counterexample() {
        let seq = from_fn(|| 0u32..);
        assert!(!seq.all(|x| *x < 5)); // terminates despite unbounded source
    }

    #[test]
    fn test_contains_by_value_equality() {
        let seq = from(vec!["a", "b"]);
        assert!(seq.contains(&"b"));
        assert!(!seq.contains(&"c"));
    }

    #[test]
    fn test_find_returns_first_match() {
        let seq = from(vec![1, 2, 3, 4]);
        assert_eq!(seq.find(|x| x % 2 == 0), Some(2));
        assert_eq!(seq.find(|x| *x > 10), None);
    }

    #[test]
    fn test_find_terminates_on_unbounded_source() {
        assert_eq!(from_fn(|| 0u64..).find(|x| *x == 7), Some(7));
    }

    #[test]
    fn test_is_empty() {
        assert!(empty::<i32>().is_empty());
        assert!(from(vec![1]).take(0).is_empty());
        assert!(!from(vec![1]).is_empty());
    }

    #[test]
    fn test_len_by_traversal() {
        assert_eq!(from(vec![1, 2, 3]).len(), 3);
        assert_eq!(from(0..10).filter(|x| x % 2 == 0).len(), 5);
        assert_eq!(empty::<i32>().len(), 0);
    }

    #[test]
    fn test_sorted_default_is_lexical() {
        let seq = from(vec![23, 2, 10]).sorted();
        // "10" < "2" < "23"
        assert_eq!(seq.to_vec(), vec![10, 2, 23]);
    }

    #[test]
    fn test_sorted_by_numeric_comparator() {
        let seq = from(vec![23, 2, 5, 3, 10, -200]).sorted_by(|a, b| a.cmp(b));
        assert_eq!(seq.to_vec(), vec![-200, 2, 3, 5, 10, 23]);
    }

    #[test]
    fn test_sorted_by_is_stable() {
        let seq = from(vec![(1, 'b'), (0, 'x'), (1, 'a')]).sorted_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(seq.to_vec(), vec![(0, 'x'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn test_terminal_calls_leave_wrapper_reusable() {
        let seq = from(vec![2, 1, 3]);
        assert_eq!(seq.len(), 3);
        assert!(seq.contains(&1));
        assert_eq!(seq.sorted_by(|a, b| a.cmp(b)).to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![2, 1, 3]);
    }

    #[test]
    fn test_single_use_wrapper_second_len_is_zero() {
        let seq = single_use(0..5);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.len(), 0);
    }

    #[test]
    #[should_panic(expected = "bad element")]
    fn test_callback_panic_propagates_out_of_traversal() {
        from(vec![1, 2, 3]).for_each(|x| {
            if x == 2 {
                panic!("bad element");
            }
        });
    }
}
