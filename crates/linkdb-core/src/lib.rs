//! `LinkDB` Core
//!
//! This crate provides the fundamental types shared by the LinkDB adjacency
//! indexes: vertex identifiers, the two pair-key variants, and the binary
//! encoding contract for values stored alongside them.
//!
//! # Overview
//!
//! - **Identifiers**: [`VertexId`] for referencing graph vertices
//! - **Pair keys**: [`Arc`] (directed, order-significant) and [`Edge`]
//!   (undirected, order-insensitive), both implementing [`VertexPair`]
//! - **Encoding**: [`Encoder`](encoding::Encoder) and
//!   [`Decoder`](encoding::Decoder) for byte-oriented serialization
//!
//! # Example
//!
//! ```
//! use linkdb_core::{Arc, Edge, VertexId, VertexPair};
//!
//! let a = VertexId::new(3);
//! let b = VertexId::new(7);
//!
//! // Arcs are ordered: 3 -> 7 is not 7 -> 3
//! assert_ne!(Arc::new(a, b), Arc::new(b, a));
//!
//! // Edges are not: {3, 7} is {7, 3}
//! assert_eq!(Edge::new(a, b), Edge::new(b, a));
//!
//! // Both keep the order they were built with
//! let edge = Edge::new(b, a);
//! assert_eq!(edge.first(), b);
//! assert_eq!(edge.second(), a);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`VertexId`], [`Arc`], [`Edge`])
//! - [`encoding`] - Serialization utilities
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{Arc, ArcKey, Edge, VertexId, VertexPair};
