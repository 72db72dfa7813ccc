//! Sizing configuration for adjacency maps.

use serde::{Deserialize, Serialize};

/// Default initial capacity of the outer (first vertex) map.
pub const DEFAULT_OUTER_CAPACITY: usize = 0;

/// Default initial capacity of each inner (second vertex) map.
///
/// Contact graphs are sparse; most vertices have a handful of neighbors.
pub const DEFAULT_INNER_CAPACITY: usize = 4;

/// Configuration for an [`AdjacencyMap`](super::AdjacencyMap).
///
/// # Example
///
/// ```
/// use linkdb_graph::{AdjacencyConfig, ArcMap};
///
/// let config = AdjacencyConfig::new().with_outer_capacity(1024).with_inner_capacity(8);
/// let arcs: ArcMap<u32> = ArcMap::with_config(config);
/// assert!(arcs.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyConfig {
    /// Number of first vertices to reserve room for up front.
    /// Default: 0
    pub outer_capacity: usize,

    /// Number of second vertices to reserve room for whenever a vertex gets
    /// its first cell.
    /// Default: 4
    pub inner_capacity: usize,
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self { outer_capacity: DEFAULT_OUTER_CAPACITY, inner_capacity: DEFAULT_INNER_CAPACITY }
    }
}

impl AdjacencyConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial outer capacity.
    #[must_use]
    pub const fn with_outer_capacity(mut self, capacity: usize) -> Self {
        self.outer_capacity = capacity;
        self
    }

    /// Set the initial capacity of each inner map.
    #[must_use]
    pub const fn with_inner_capacity(mut self, capacity: usize) -> Self {
        self.inner_capacity = capacity;
        self
    }
}
