//! Two-level pair-keyed adjacency map.
//!
//! Cells live in `HashMap<first, HashMap<second, T>>`. Two invariants hold
//! after every public operation:
//!
//! - a first vertex is present only while its inner map is non-empty;
//! - in an undirected map, `a -> b` and `b -> a` are present together and
//!   hold equal values.
//!
//! `len` counts logical entries, so an undirected edge counts once even though
//! it occupies two cells.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use linkdb_core::{Arc, Edge, VertexId, VertexPair};
use tracing::{debug, trace, warn};

use super::config::AdjacencyConfig;
use super::cursor::{Cursor, Iter, Keys, Values};
use super::view::{EntrySet, KeySet, ValueCollection};
use crate::error::{GraphError, GraphResult};

/// Adjacency map from a directed pair ([`Arc`]) to a value.
pub type ArcMap<T> = AdjacencyMap<Arc, T>;

/// Adjacency map from an undirected pair ([`Edge`]) to a value.
pub type EdgeMap<T> = AdjacencyMap<Edge, T>;

/// A map from a pair of vertices to a value.
///
/// `C` selects the flavor. With [`Arc`] keys each entry is one cell and
/// `(a, b)` is independent of `(b, a)`. With [`Edge`] keys each entry is
/// stored under both directions, either direction finds it, and iteration
/// reports it once as the direction whose second vertex is larger.
///
/// # Example
///
/// ```
/// use linkdb_core::{Arc, VertexId};
/// use linkdb_graph::ArcMap;
///
/// let mut arcs = ArcMap::new();
/// arcs.insert(Arc::from((1, 2)), 0.5)?;
///
/// assert_eq!(arcs.get(&Arc::from((1, 2))), Some(&0.5));
/// assert_eq!(arcs.get(&Arc::from((2, 1))), None);
///
/// // A vertex seen only as a target is still a vertex
/// assert!(arcs.vertices().contains(&VertexId::new(2)));
/// # Ok::<(), linkdb_graph::GraphError>(())
/// ```
#[derive(Clone)]
pub struct AdjacencyMap<C, T> {
    map: HashMap<VertexId, HashMap<VertexId, T>>,
    len: usize,
    config: AdjacencyConfig,
    _pair: PhantomData<C>,
}

impl<C: VertexPair, T> Default for AdjacencyMap<C, T> {
    fn default() -> Self {
        Self::with_config(AdjacencyConfig::default())
    }
}

impl<C: VertexPair, T> AdjacencyMap<C, T> {
    /// Create an empty map with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map sized by `config`.
    #[must_use]
    pub fn with_config(config: AdjacencyConfig) -> Self {
        Self {
            map: HashMap::with_capacity(config.outer_capacity),
            len: 0,
            config,
            _pair: PhantomData,
        }
    }

    /// The configuration this map was created with.
    #[inline]
    pub fn config(&self) -> &AdjacencyConfig {
        &self.config
    }

    /// Number of logical entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the value stored for `key`.
    pub fn get(&self, key: &C) -> Option<&T> {
        self.map.get(&key.first())?.get(&key.second())
    }

    /// Whether an entry exists for `key`.
    pub fn contains_key(&self, key: &C) -> bool {
        self.get(key).is_some()
    }

    /// Whether any entry holds a value equal to `value`.
    ///
    /// This is a linear scan over the logical entries.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Remove the entry for `key`, returning its value.
    ///
    /// Removing a key that has no entry is a no-op that returns `None`. For
    /// undirected maps both stored directions are removed.
    pub fn remove(&mut self, key: &C) -> Option<T> {
        let (first, second) = (key.first(), key.second());
        let value = self.remove_cell(first, second)?;
        if C::SYMMETRIC {
            let mirror = self.remove_cell(second, first);
            debug_assert!(mirror.is_some(), "edge {first} {second} was stored in one direction");
        }
        self.len -= 1;
        Some(value)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        debug!(entries = self.len, vertices = self.map.len(), "clearing adjacency map");
        self.map.clear();
        self.len = 0;
    }

    /// Keep only the entries for which `keep` returns `true`.
    ///
    /// Returns the number of entries removed. The doomed keys are found by
    /// walking the map's own key iterator and are then removed one by one, so
    /// both directions of an undirected edge always go together.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&C, &T) -> bool,
    {
        let doomed: Vec<C> =
            self.iter().filter(|(key, value)| !keep(key, *value)).map(|(key, _)| key).collect();
        for key in &doomed {
            self.remove(key);
        }
        if !doomed.is_empty() {
            debug!(removed = doomed.len(), remaining = self.len, "retained adjacency entries");
        }
        doomed.len()
    }

    /// All vertices that take part in at least one entry.
    ///
    /// For directed maps this includes vertices that only appear as a target.
    pub fn vertices(&self) -> HashSet<VertexId> {
        let mut vertices: HashSet<VertexId> = self.map.keys().copied().collect();
        if !C::SYMMETRIC {
            for inner in self.map.values() {
                vertices.extend(inner.keys().copied());
            }
        }
        vertices
    }

    /// The cells stored under `vertex` as first vertex, keyed by second vertex.
    ///
    /// For directed maps these are the outgoing arcs; for undirected maps,
    /// every incident edge.
    pub fn neighbors(&self, vertex: VertexId) -> Option<&HashMap<VertexId, T>> {
        self.map.get(&vertex)
    }

    /// Number of cells under `vertex` (out-degree for directed maps).
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.map.get(&vertex).map_or(0, HashMap::len)
    }

    /// Iterate over `(key, &value)` entries in unspecified order.
    pub fn iter(&self) -> Iter<'_, C, T> {
        Iter::new(self.cursor())
    }

    /// Iterate over keys in unspecified order.
    pub fn keys(&self) -> Keys<'_, C, T> {
        Keys::new(self.cursor())
    }

    /// Iterate over values in unspecified order.
    pub fn values(&self) -> Values<'_, C, T> {
        Values::new(self.cursor())
    }

    /// Read-only live view of the keys.
    pub fn key_set(&self) -> KeySet<&Self> {
        KeySet::new(self)
    }

    /// Live view of the keys that can remove entries.
    pub fn key_set_mut(&mut self) -> KeySet<&mut Self> {
        KeySet::new(self)
    }

    /// Read-only live view of the values.
    pub fn value_collection(&self) -> ValueCollection<&Self> {
        ValueCollection::new(self)
    }

    /// Live view of the values that can remove entries.
    pub fn value_collection_mut(&mut self) -> ValueCollection<&mut Self> {
        ValueCollection::new(self)
    }

    /// Read-only live view of the entries.
    pub fn entry_set(&self) -> EntrySet<&Self> {
        EntrySet::new(self)
    }

    /// Live view of the entries that can remove entries.
    pub fn entry_set_mut(&mut self) -> EntrySet<&mut Self> {
        EntrySet::new(self)
    }

    fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.map, self.len, C::SYMMETRIC)
    }

    /// Write a single cell. Undirected inserts call this once per direction.
    fn insert_cell(&mut self, first: VertexId, second: VertexId, value: T) -> Option<T> {
        match self.map.entry(first) {
            Entry::Occupied(mut inner) => inner.get_mut().insert(second, value),
            Entry::Vacant(slot) => {
                trace!(vertex = %first, "creating inner map");
                let mut inner = HashMap::with_capacity(self.config.inner_capacity);
                inner.insert(second, value);
                slot.insert(inner);
                None
            }
        }
    }

    /// Remove a single cell, dropping the inner map once it empties.
    fn remove_cell(&mut self, first: VertexId, second: VertexId) -> Option<T> {
        let inner = self.map.get_mut(&first)?;
        let value = inner.remove(&second)?;
        if inner.is_empty() {
            trace!(vertex = %first, "dropping empty inner map");
            self.map.remove(&first);
        }
        Some(value)
    }
}

impl<T> AdjacencyMap<Arc, T> {
    /// Insert `value` for `arc`, returning the previous value.
    ///
    /// Directed inserts cannot be rejected; the `Result` keeps the signature
    /// shared with [`EdgeMap::insert`].
    ///
    /// # Errors
    ///
    /// None.
    pub fn insert(&mut self, arc: Arc, value: T) -> GraphResult<Option<T>> {
        let previous = self.insert_cell(arc.source(), arc.target(), value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Get a mutable reference to the value stored for `arc`.
    ///
    /// Only directed maps offer this: changing one direction of an undirected
    /// edge would desynchronize its two cells.
    pub fn get_mut(&mut self, arc: &Arc) -> Option<&mut T> {
        self.map.get_mut(&arc.source())?.get_mut(&arc.target())
    }

    /// Insert every `(arc, value)` pair.
    ///
    /// # Errors
    ///
    /// None.
    pub fn extend_from<I>(&mut self, entries: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (Arc, T)>,
    {
        for (arc, value) in entries {
            self.insert(arc, value)?;
        }
        Ok(())
    }
}

impl<T> Extend<(Arc, T)> for AdjacencyMap<Arc, T> {
    fn extend<I: IntoIterator<Item = (Arc, T)>>(&mut self, entries: I) {
        for (arc, value) in entries {
            if self.insert_cell(arc.source(), arc.target(), value).is_none() {
                self.len += 1;
            }
        }
    }
}

impl<T> FromIterator<(Arc, T)> for AdjacencyMap<Arc, T> {
    fn from_iter<I: IntoIterator<Item = (Arc, T)>>(entries: I) -> Self {
        let mut arcs = Self::new();
        arcs.extend(entries);
        arcs
    }
}

impl<T: Clone> AdjacencyMap<Edge, T> {
    /// Insert `value` for `edge`, returning the previous value.
    ///
    /// Both directions are written with the same value. The returned value is
    /// the one previously stored in `edge`'s own direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for a self-loop, which the
    /// deduplicating iterators could never report. The map is left unchanged.
    pub fn insert(&mut self, edge: Edge, value: T) -> GraphResult<Option<T>> {
        if edge.is_self_loop() {
            warn!(vertex = %edge.first(), "rejecting self-loop edge");
            return Err(GraphError::InvalidArgument(format!(
                "self-loop edge {edge} cannot be stored in an undirected map"
            )));
        }

        let (first, second) = (edge.first(), edge.second());
        let previous = self.insert_cell(first, second, value.clone());
        self.insert_cell(second, first, value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Insert every `(edge, value)` pair, stopping at the first rejected one.
    ///
    /// Pairs before the rejected one stay inserted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if a self-loop is encountered.
    pub fn extend_from<I>(&mut self, entries: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (Edge, T)>,
    {
        for (edge, value) in entries {
            self.insert(edge, value)?;
        }
        Ok(())
    }

    /// Build a map from `(edge, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if a self-loop is encountered.
    pub fn try_from_iter<I>(entries: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (Edge, T)>,
    {
        let mut edges = Self::new();
        edges.extend_from(entries)?;
        Ok(edges)
    }
}

impl<C: VertexPair, T> Index<&C> for AdjacencyMap<C, T> {
    type Output = T;

    /// Returns the value stored for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the map holds no entry for `key`. Use [`AdjacencyMap::get`]
    /// for a non-panicking lookup.
    fn index(&self, key: &C) -> &T {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

impl<'a, C: VertexPair, T> IntoIterator for &'a AdjacencyMap<C, T> {
    type Item = (C, &'a T);
    type IntoIter = Iter<'a, C, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two maps are equal when they hold the same logical entries.
impl<C: VertexPair, T: PartialEq> PartialEq for AdjacencyMap<C, T> {
    fn eq(&self, other: &Self) -> bool {
        // Empty inner maps never linger, so cell storage is canonical.
        self.len == other.len && self.map == other.map
    }
}

impl<C: VertexPair, T: Eq> Eq for AdjacencyMap<C, T> {}

impl<C: VertexPair, T: fmt::Debug> fmt::Debug for AdjacencyMap<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
