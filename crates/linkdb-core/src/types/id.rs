//! Unique identifiers for vertices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a vertex in the graph.
///
/// Vertex IDs are plain integers with no range constraint. They are only ever
/// used as map keys and are never resolved against external state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(i32);

impl VertexId {
    /// Create a new `VertexId` from a raw i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw i32 value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for VertexId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl From<VertexId> for i32 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
