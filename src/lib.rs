//! # Lazyseq: Lazy Sequence Combinators
//!
//! Wrap any traversable source in a [`Seq`] and compose chainable operators
//! over it without evaluating anything until a traversal is driven.
//!
//! ## Core Pieces
//!
//! - **[`Seq<T>`]**: immutable handle over a cursor-factory source; the unit
//!   of composition
//! - **[`Traverse<T>`] / [`Cursor<T>`]**: the capability contract — produce a
//!   fresh traversal cursor on demand, each [`step`](Cursor::step) reporting
//!   [`Pull::Next`] or [`Pull::Done`]
//!
//! ## Key Properties
//!
//! - **Lazy**: combinators (`filter`, `map`, `flat`, `concat`, `take`) build
//!   decorators; one upstream element is pulled per step, on demand
//! - **Safe on unbounded sources**: `take(n)` never requests an `(n + 1)`-th
//!   upstream element
//! - **Re-traversable**: every traversal gets an independent cursor, as long
//!   as the original source supports starting over
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::{from, from_fn, zip};
//!
//! // Finite pipeline over a vector.
//! let evens = from(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6]);
//!
//! // Unbounded source, bounded consumption.
//! let squares = from_fn(|| 0u64..).map(|x| x * x).take(5);
//! assert_eq!(squares.to_vec(), vec![0, 1, 4, 9, 16]);
//!
//! // Lock-step zip with shortest-sequence truncation.
//! let pairs = zip(from(vec!["a", "b", "c"]), from(vec![1, 2]));
//! assert_eq!(pairs.to_vec(), vec![("a", 1), ("b", 2)]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from(collection)`](from) - wrap a clonable collection or range
//! - [`from_fn(factory)`](from_fn) - wrap a cursor-factory closure
//! - [`single_use(iter)`](single_use) - wrap a one-shot iterator
//! - [`zip(a, b)`](zip) / [`zip_all(sources)`](zip_all) - lock-step tuples
//!
//! **Driving Traversals:**
//! - `to_vec()`, `to_set()`, `fold()`, `reduce()`, `for_each()`
//! - `any()`, `all()`, `find()`, `contains()`, `is_empty()`, `len()`
//! - `sorted()` / `sorted_by()` - eager, stable sort into a new sequence

mod compose;
mod iter;
mod node;
pub mod prelude;
mod pull;
mod seq;
mod source;
mod traverse;

pub use compose::{zip, zip_all, Tail};
pub use iter::Iter;
pub use node::Node;
pub use pull::Pull;
pub use seq::Seq;
pub use source::{collected, empty, from, from_fn, single_use, Collected};
pub use traverse::{Cursor, Steps, Traverse};
