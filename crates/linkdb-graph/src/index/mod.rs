//! Pair-keyed adjacency indexes.
//!
//! This module provides an in-memory map from a pair of vertices to a value,
//! in a directed and an undirected flavor, plus lazy iterators and live views
//! over it.
//!
//! # Overview
//!
//! - [`AdjacencyMap`] - The two-level map, with [`ArcMap`] and [`EdgeMap`] aliases
//! - [`AdjacencyConfig`] - Initial sizing
//! - [`Iter`], [`Keys`], [`Values`] - Lazy iterators sharing one cursor
//! - [`KeySet`], [`ValueCollection`], [`EntrySet`] - Live views
//!
//! # Storage Layout
//!
//! Cells are stored as `first -> (second -> value)`:
//!
//! - directed: `(a, b)` occupies the cell `a -> b`
//! - undirected: `{a, b}` occupies both `a -> b` and `b -> a`
//!
//! This enables:
//! - O(1) lookups in either direction
//! - O(1) access to every cell under one vertex via
//!   [`AdjacencyMap::neighbors`]
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use linkdb_core::Edge;
//! use linkdb_graph::EdgeMap;
//!
//! let mut edges = EdgeMap::new();
//! edges.insert(Edge::from((1, 2)), "a")?;
//! edges.insert(Edge::from((2, 3)), "b")?;
//!
//! // Keep only the edge {2, 3}, removing through the key view
//! let keep: HashSet<Edge> = [Edge::from((3, 2))].into_iter().collect();
//! edges.key_set_mut().retain_all(&keep);
//!
//! assert_eq!(edges.len(), 1);
//! assert!(edges.contains_key(&Edge::from((2, 3))));
//! # Ok::<(), linkdb_graph::GraphError>(())
//! ```

mod adjacency;
mod config;
mod cursor;
mod view;

pub use adjacency::{AdjacencyMap, ArcMap, EdgeMap};
pub use config::{AdjacencyConfig, DEFAULT_INNER_CAPACITY, DEFAULT_OUTER_CAPACITY};
pub use cursor::{Iter, Keys, Values};
pub use view::{EntrySet, KeySet, ValueCollection};
