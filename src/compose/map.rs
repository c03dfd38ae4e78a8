//! Lazily transforming elements.

use std::rc::Rc;

use crate::pull::Pull;
use crate::seq::Seq;
use crate::traverse::{Cursor, Traverse};

/// Create a mapping decorator over `upstream`.
pub(crate) fn map<T, U>(upstream: Seq<T>, transform: Rc<dyn Fn(T) -> U>) -> Map<T, U> {
    Map {
        upstream,
        transform,
    }
}

/// Decorator that applies a transform to each element as it is pulled.
pub(crate) struct Map<T, U> {
    upstream: Seq<T>,
    transform: Rc<dyn Fn(T) -> U>,
}

impl<T: 'static, U: 'static> Traverse<U> for Map<T, U> {
    fn cursor(&self) -> Box<dyn Cursor<U>> {
        Box::new(MapCursor {
            upstream: self.upstream.cursor(),
            transform: Rc::clone(&self.transform),
        })
    }
}

struct MapCursor<T, U> {
    upstream: Box<dyn Cursor<T>>,
    transform: Rc<dyn Fn(T) -> U>,
}

impl<T, U> Cursor<U> for MapCursor<T, U> {
    fn step(&mut self) -> Pull<U> {
        self.upstream.step().map(|t| (self.transform)(t))
    }
}
