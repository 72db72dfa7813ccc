//! Serialization of `LinkDB` types to bytes.
//!
//! This module provides the byte-level codec contract used by anything that
//! persists or transmits keys and values kept in an adjacency index.
//!
//! # Encoding Traits
//!
//! - [`Encoder`] - Append a type's encoding to a byte buffer
//! - [`Decoder`] - Read a type back from a byte cursor
//!
//! # Type Encoding
//!
//! Implementations are provided for:
//! - [`VertexId`](crate::types::VertexId) - 4 bytes big-endian
//! - [`Arc`](crate::types::Arc) and [`Edge`](crate::types::Edge) - versioned,
//!   tagged pair of vertex IDs
//!
//! Value types stored in an index may implement the same traits; the index
//! itself never requires them.
//!
//! # Example
//!
//! ```
//! use linkdb_core::encoding::{Decoder, Encoder};
//! use linkdb_core::Edge;
//!
//! let edge = Edge::from((9, 2));
//! let bytes = edge.encode()?;
//!
//! let decoded = Edge::decode(&bytes)?;
//! assert_eq!(decoded, edge);
//! # Ok::<(), linkdb_core::CoreError>(())
//! ```

pub mod pair;
mod traits;


pub use traits::{Decoder, Encoder, FORMAT_VERSION};
