//! Lazy combinator decorators.
//!
//! Each combinator is a decorator source that owns its upstream [`Seq`](crate::Seq)
//! and, per traversal, an owned upstream cursor. Nothing here does any work
//! until a cursor is stepped.

mod concat;
mod filter;
mod flat;
mod map;
mod take;
mod zip;

pub use concat::Tail;
pub(crate) use concat::concat;
pub(crate) use filter::filter;
pub(crate) use flat::flat;
pub(crate) use map::map;
pub(crate) use take::take;
pub use zip::{zip, zip_all};
