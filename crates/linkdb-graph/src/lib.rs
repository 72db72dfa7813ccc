//! `LinkDB` Graph
//!
//! This crate provides in-memory adjacency indexes: maps from a pair of vertex
//! IDs to an arbitrary value, for directed graphs ([`ArcMap`]) and undirected
//! graphs ([`EdgeMap`]).
//!
//! # Modules
//!
//! - [`index`] - The adjacency map, its iterators, and its live views
//! - [`error`] - Error types ([`GraphError`])
//!
//! # Example
//!
//! ```
//! use linkdb_core::Edge;
//! use linkdb_graph::EdgeMap;
//!
//! let mut contacts: EdgeMap<&str> = EdgeMap::new();
//! contacts.insert(Edge::from((3, 7)), "bluetooth")?;
//! contacts.insert(Edge::from((9, 2)), "wifi")?;
//!
//! // Either direction finds the same entry
//! assert_eq!(contacts.get(&Edge::from((7, 3))), Some(&"bluetooth"));
//!
//! // Each edge is reported once, smaller vertex first
//! let mut keys: Vec<_> = contacts.keys().map(|e| e.canonical()).collect();
//! keys.sort();
//! assert_eq!(keys.len(), 2);
//! # Ok::<(), linkdb_graph::GraphError>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod index;

pub use error::{GraphError, GraphResult};
pub use index::{AdjacencyConfig, AdjacencyMap, ArcMap, EdgeMap};
