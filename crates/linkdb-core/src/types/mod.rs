//! Core data types for `LinkDB`.
//!
//! This module defines the vertex identifier and the pair keys that address
//! cells in an adjacency index.

mod id;
mod pair;

pub use id::VertexId;
pub use pair::{Arc, ArcKey, Edge, VertexPair};
