//! Pair keys addressing a cell of an adjacency index.
//!
//! A pair key names two vertices. [`Arc`] is directed: `3 -> 7` and `7 -> 3`
//! are different keys. [`Edge`] is undirected: `{3, 7}` and `{7, 3}` compare,
//! hash, and order identically, so either can be used to look up the other.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use linkdb_core::{Edge, VertexId};
//!
//! let mut seen = HashSet::new();
//! seen.insert(Edge::new(VertexId::new(9), VertexId::new(2)));
//!
//! assert!(seen.contains(&Edge::new(VertexId::new(2), VertexId::new(9))));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::VertexId;

/// A key made of two vertex IDs.
///
/// Adjacency indexes store a cell under `first()` and then `second()`, and
/// use [`VertexPair::from_ids`] to rebuild keys while iterating.
/// [`VertexPair::SYMMETRIC`] selects whether the index keeps a mirrored copy
/// of every cell.
pub trait VertexPair: Copy + Eq + Hash + fmt::Debug {
    /// Whether `(a, b)` and `(b, a)` name the same logical entry.
    const SYMMETRIC: bool;

    /// Build a key from a raw `(outer, inner)` pair.
    fn from_ids(first: VertexId, second: VertexId) -> Self;

    /// The first vertex, in construction order.
    fn first(&self) -> VertexId;

    /// The second vertex, in construction order.
    fn second(&self) -> VertexId;
}

/// A directed pair key, from `source` to `target`.
///
/// The name collides with [`std::sync::Arc`] when both are imported. Use the
/// [`ArcKey`] alias, or a path such as `linkdb_core::Arc`, in modules that need
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Arc {
    source: VertexId,
    target: VertexId,
}

/// Alias of [`Arc`] that does not clash with [`std::sync::Arc`].
pub type ArcKey = Arc;

impl Arc {
    /// Create an arc from `source` to `target`.
    #[inline]
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// The vertex the arc leaves.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> VertexId {
        self.source
    }

    /// The vertex the arc enters.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> VertexId {
        self.target
    }

    /// The arc going the other way.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self { source: self.target, target: self.source }
    }
}

impl VertexPair for Arc {
    const SYMMETRIC: bool = false;

    #[inline]
    fn from_ids(first: VertexId, second: VertexId) -> Self {
        Self::new(first, second)
    }

    #[inline]
    fn first(&self) -> VertexId {
        self.source
    }

    #[inline]
    fn second(&self) -> VertexId {
        self.target
    }
}

impl From<(i32, i32)> for Arc {
    fn from((source, target): (i32, i32)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(target))
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}

/// An undirected pair key.
///
/// Equality, hashing, and ordering only look at the unordered pair, but
/// [`first`](VertexPair::first) and [`second`](VertexPair::second) return the
/// vertices in the order the edge was built with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    first: VertexId,
    second: VertexId,
}

impl Edge {
    /// Create an edge between `first` and `second`.
    #[inline]
    #[must_use]
    pub const fn new(first: VertexId, second: VertexId) -> Self {
        Self { first, second }
    }

    /// The two vertices as `(min, max)`.
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Whether both ends are the same vertex.
    #[inline]
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }

    /// Whether `vertex` is one of the two ends.
    #[inline]
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.first == vertex || self.second == vertex
    }
}

impl VertexPair for Edge {
    const SYMMETRIC: bool = true;

    #[inline]
    fn from_ids(first: VertexId, second: VertexId) -> Self {
        Self::new(first, second)
    }

    #[inline]
    fn first(&self) -> VertexId {
        self.first
    }

    #[inline]
    fn second(&self) -> VertexId {
        self.second
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl From<(i32, i32)> for Edge {
    fn from((first, second): (i32, i32)) -> Self {
        Self::new(VertexId::new(first), VertexId::new(second))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
