//! Lazy iteration over the two-level cell storage.
//!
//! Every iterator the index hands out is a thin projection of [`Cursor`], a
//! single-pass walk over `first -> second -> value` cells with one cell of
//! lookahead. Nothing is collected along the way.

use std::collections::{hash_map, HashMap};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use linkdb_core::{VertexId, VertexPair};

/// One physical cell: `(first, second, value)`.
pub(crate) type Cell<'a, T> = (VertexId, VertexId, &'a T);

/// Flattening lookahead walk over the cells of an adjacency map.
///
/// State is the outer cursor, the inner cursor of the current first vertex
/// (`None` before the first refill and after exhaustion), and the buffered
/// next cell. With `dedup` set only cells with `second > first` are produced,
/// which reports each mirrored undirected pair exactly once.
pub(crate) struct Cursor<'a, T> {
    outer: hash_map::Iter<'a, VertexId, HashMap<VertexId, T>>,
    inner: Option<(VertexId, hash_map::Iter<'a, VertexId, T>)>,
    next: Option<Cell<'a, T>>,
    dedup: bool,
    /// Logical entries not yet yielded.
    remaining: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(
        map: &'a HashMap<VertexId, HashMap<VertexId, T>>,
        len: usize,
        dedup: bool,
    ) -> Self {
        let mut cursor = Self { outer: map.iter(), inner: None, next: None, dedup, remaining: len };
        cursor.refill();
        cursor
    }

    /// Step to the next physical cell, moving to the next first vertex when
    /// the current one runs out.
    fn advance(&mut self) -> Option<Cell<'a, T>> {
        loop {
            if let Some((first, inner)) = &mut self.inner {
                if let Some((second, value)) = inner.next() {
                    return Some((*first, *second, value));
                }
            }
            match self.outer.next() {
                Some((first, inner)) => self.inner = Some((*first, inner.iter())),
                None => {
                    self.inner = None;
                    return None;
                }
            }
        }
    }

    fn refill(&mut self) {
        self.next = loop {
            match self.advance() {
                Some((first, second, _)) if self.dedup && second <= first => continue,
                cell => break cell,
            }
        };
    }

    /// The cell the next call to `next` will return.
    pub(crate) fn peek(&self) -> Option<Cell<'a, T>> {
        self.next
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = Cell<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.refill();
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

/// Iterator over `(key, &value)` entries of an adjacency map.
pub struct Iter<'a, C, T> {
    cursor: Cursor<'a, T>,
    _pair: PhantomData<C>,
}

impl<'a, C: VertexPair, T> Iter<'a, C, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor, _pair: PhantomData }
    }

    /// Look at the next entry without consuming it.
    pub fn peek(&self) -> Option<(C, &'a T)> {
        self.cursor.peek().map(|(first, second, value)| (C::from_ids(first, second), value))
    }
}

impl<'a, C: VertexPair, T> Iterator for Iter<'a, C, T> {
    type Item = (C, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|(first, second, value)| (C::from_ids(first, second), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C: VertexPair, T> ExactSizeIterator for Iter<'_, C, T> {}

impl<C: VertexPair, T> FusedIterator for Iter<'_, C, T> {}

/// Iterator over the keys of an adjacency map.
pub struct Keys<'a, C, T> {
    cursor: Cursor<'a, T>,
    _pair: PhantomData<C>,
}

impl<'a, C: VertexPair, T> Keys<'a, C, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor, _pair: PhantomData }
    }

    /// Look at the next key without consuming it.
    pub fn peek(&self) -> Option<C> {
        self.cursor.peek().map(|(first, second, _)| C::from_ids(first, second))
    }
}

impl<C: VertexPair, T> Iterator for Keys<'_, C, T> {
    type Item = C;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|(first, second, _)| C::from_ids(first, second))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C: VertexPair, T> ExactSizeIterator for Keys<'_, C, T> {}

impl<C: VertexPair, T> FusedIterator for Keys<'_, C, T> {}

/// Iterator over the values of an adjacency map.
///
/// Undirected maps yield each edge's value once, not once per stored direction.
pub struct Values<'a, C, T> {
    cursor: Cursor<'a, T>,
    _pair: PhantomData<C>,
}

impl<'a, C, T> Values<'a, C, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor, _pair: PhantomData }
    }

    /// Look at the next value without consuming it.
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.peek().map(|(_, _, value)| value)
    }
}

impl<'a, C, T> Iterator for Values<'a, C, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|(_, _, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C, T> ExactSizeIterator for Values<'_, C, T> {}

impl<C, T> FusedIterator for Values<'_, C, T> {}
