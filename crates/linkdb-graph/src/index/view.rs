//! Live views over an adjacency map.
//!
//! [`KeySet`], [`ValueCollection`], and [`EntrySet`] hold nothing but a
//! reference to the map. Every query reads the map's current state and every
//! removal writes straight through to it. Built from `&AdjacencyMap` a view is
//! read-only; built from `&mut AdjacencyMap` it can also remove entries.
//!
//! No view can insert: a bare key or value does not say how to lay the entry
//! out in the map, so `add` and `add_all` always return
//! [`GraphError::Unsupported`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasher;
use std::ops::{Deref, DerefMut};

use linkdb_core::VertexPair;

use super::adjacency::AdjacencyMap;
use super::cursor::{Iter, Keys, Values};
use crate::error::{GraphError, GraphResult};

/// Live set of the keys of an adjacency map.
pub struct KeySet<M> {
    map: M,
}

impl<M> KeySet<M> {
    pub(crate) fn new(map: M) -> Self {
        Self { map }
    }
}

impl<M, C, T> KeySet<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    /// Number of keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `key` has an entry.
    pub fn contains(&self, key: &C) -> bool {
        self.map.contains_key(key)
    }

    /// Whether every key in `keys` has an entry.
    pub fn contains_all<'k, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k C>,
        C: 'k,
    {
        keys.into_iter().all(|key| self.map.contains_key(key))
    }

    /// Iterate over the keys.
    pub fn iter<'a>(&'a self) -> Keys<'a, C, T>
    where
        C: 'a,
        T: 'a,
    {
        self.map.keys()
    }

    /// Copy the keys out into a vector.
    pub fn to_vec(&self) -> Vec<C> {
        let mut keys = Vec::with_capacity(self.map.len());
        keys.extend(self.map.keys());
        keys
    }
}

impl<M, C, T> KeySet<M>
where
    M: DerefMut<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    /// Always fails: keys cannot be added without a value.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::Unsupported`].
    pub fn add(&mut self, _key: C) -> GraphResult<bool> {
        Err(GraphError::Unsupported("add to key set"))
    }

    /// Always fails: keys cannot be added without a value.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::Unsupported`].
    pub fn add_all<I>(&mut self, _keys: I) -> GraphResult<bool>
    where
        I: IntoIterator<Item = C>,
    {
        Err(GraphError::Unsupported("add all to key set"))
    }

    /// Remove the entry for `key`. Returns whether the map changed.
    pub fn remove(&mut self, key: &C) -> bool {
        self.map.remove(key).is_some()
    }

    /// Remove the entries for every key in `keys`. Returns whether the map changed.
    pub fn remove_all<'k, I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k C>,
        C: 'k,
    {
        keys.into_iter().fold(false, |changed, key| self.map.remove(key).is_some() || changed)
    }

    /// Remove every entry whose key is not in `keep`. Returns whether the map changed.
    pub fn retain_all<S: BuildHasher>(&mut self, keep: &HashSet<C, S>) -> bool {
        self.map.retain(|key, _| keep.contains(key)) > 0
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<'v, M, C, T> IntoIterator for &'v KeySet<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair + 'v,
    T: 'v,
{
    type Item = C;
    type IntoIter = Keys<'v, C, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M, C, T> fmt::Debug for KeySet<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Live collection of the values of an adjacency map.
///
/// An undirected edge contributes its value once.
pub struct ValueCollection<M> {
    map: M,
}

impl<M> ValueCollection<M> {
    pub(crate) fn new(map: M) -> Self {
        Self { map }
    }
}

impl<M, C, T> ValueCollection<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    /// Number of values, one per logical entry.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether some entry holds `value`. Linear in the number of entries.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.map.contains_value(value)
    }

    /// Whether every value in `values` is held by some entry.
    pub fn contains_all<'t, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'t T>,
        T: PartialEq + 't,
    {
        values.into_iter().all(|value| self.map.contains_value(value))
    }

    /// Iterate over the values.
    pub fn iter<'a>(&'a self) -> Values<'a, C, T>
    where
        C: 'a,
        T: 'a,
    {
        self.map.values()
    }

    /// Clone the values out into a vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.map.len());
        values.extend(self.map.values().cloned());
        values
    }
}

impl<M, C, T> ValueCollection<M>
where
    M: DerefMut<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    /// Always fails: values cannot be added without a key.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::Unsupported`].
    pub fn add(&mut self, _value: T) -> GraphResult<bool> {
        Err(GraphError::Unsupported("add to value collection"))
    }

    /// Always fails: values cannot be added without a key.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::Unsupported`].
    pub fn add_all<I>(&mut self, _values: I) -> GraphResult<bool>
    where
        I: IntoIterator<Item = T>,
    {
        Err(GraphError::Unsupported("add all to value collection"))
    }

    /// Remove the first entry, in iteration order, holding `value`.
    /// Returns whether the map changed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self.map.iter().find(|(_, v)| *v == value).map(|(key, _)| key);
        match found {
            Some(key) => self.map.remove(&key).is_some(),
            None => false,
        }
    }

    /// Remove every entry whose value appears in `values`.
    /// Returns whether the map changed.
    pub fn remove_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.map.retain(|_, value| !values.contains(value)) > 0
    }

    /// Remove every entry whose value does not appear in `values`.
    /// Returns whether the map changed.
    pub fn retain_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.map.retain(|_, value| values.contains(value)) > 0
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<'v, M, C, T> IntoIterator for &'v ValueCollection<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair + 'v,
    T: 'v,
{
    type Item = &'v T;
    type IntoIter = Values<'v, C, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M, C, T> fmt::Debug for ValueCollection<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Live set of the `(key, value)` entries of an adjacency map.
pub struct EntrySet<M> {
    map: M,
}

impl<M> EntrySet<M> {
    pub(crate) fn new(map: M) -> Self {
        Self { map }
    }
}

impl<M, C, T> EntrySet<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `key` is present and holds `value`.
    pub fn contains(&self, key: &C, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.map.get(key) == Some(value)
    }

    /// Whether every `(key, value)` in `entries` is present.
    pub fn contains_all<'e, I>(&self, entries: I) -> bool
    where
        I: IntoIterator<Item = (&'e C, &'e T)>,
        C: 'e,
        T: PartialEq + 'e,
    {
        entries.into_iter().all(|(key, value)| self.contains(key, value))
    }

    /// Iterate over the entries.
    pub fn iter<'a>(&'a self) -> Iter<'a, C, T>
    where
        C: 'a,
        T: 'a,
    {
        self.map.iter()
    }

    /// Clone the entries out into a vector.
    pub fn to_vec(&self) -> Vec<(C, T)>
    where
        T: Clone,
    {
        let mut entries = Vec::with_capacity(self.map.len());
        entries.extend(self.map.iter().map(|(key, value)| (key, value.clone())));
        entries
    }
}

impl<M, C, T> EntrySet<M>
where
    M: DerefMut<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
{
    /// Always fails: entries go through the map's own `insert`.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::Unsupported`].
    pub fn add(&mut self, _key: C, _value: T) -> GraphResult<bool> {
        Err(GraphError::Unsupported("add to entry set"))
    }

    /// Always fails: entries go through the map's own `insert`.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::Unsupported`].
    pub fn add_all<I>(&mut self, _entries: I) -> GraphResult<bool>
    where
        I: IntoIterator<Item = (C, T)>,
    {
        Err(GraphError::Unsupported("add all to entry set"))
    }

    /// Remove `key` if it holds `value`. Returns whether the map changed.
    pub fn remove(&mut self, key: &C, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(key, value) && self.map.remove(key).is_some()
    }

    /// Remove every matching `(key, value)` in `entries`.
    /// Returns whether the map changed.
    pub fn remove_all<'e, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (&'e C, &'e T)>,
        C: 'e,
        T: PartialEq + 'e,
    {
        entries.into_iter().fold(false, |changed, (key, value)| self.remove(key, value) || changed)
    }

    /// Remove every entry that `keep` does not hold with an equal value.
    /// Returns whether the map changed.
    pub fn retain_all<S: BuildHasher>(&mut self, keep: &HashMap<C, T, S>) -> bool
    where
        T: PartialEq,
    {
        self.map.retain(|key, value| keep.get(key) == Some(value)) > 0
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<'v, M, C, T> IntoIterator for &'v EntrySet<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair + 'v,
    T: 'v,
{
    type Item = (C, &'v T);
    type IntoIter = Iter<'v, C, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M, C, T> fmt::Debug for EntrySet<M>
where
    M: Deref<Target = AdjacencyMap<C, T>>,
    C: VertexPair,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
