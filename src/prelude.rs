//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Cursor, Node, Pull, Seq, Tail, Traverse};

// Constructors
pub use crate::{empty, from, from_fn, single_use};

// Lock-step combinators
pub use crate::{zip, zip_all};

// Bridges
pub use crate::{Iter, Steps};
