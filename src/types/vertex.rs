//! Vertex identity and the core vertex struct.

use std::fmt;

/// Identifier of a vertex within its owning graph's arena.
///
/// Ids are assigned sequentially by [`MeshGraph::create_vertex`] and stay
/// valid for the lifetime of the graph; the arena never reuses them. Two
/// vertices are distinct entities even if their values compare equal —
/// identity is the id, not the payload.
///
/// [`MeshGraph::create_vertex`]: crate::graph::MeshGraph::create_vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    /// The raw numeric id.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u64)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A labeled node: a caller-supplied value plus its adjacency list.
///
/// The adjacency list stores ids rather than references, so no ownership
/// cycles can form between mutually connected vertices. It behaves as an
/// insertion-ordered set: unique membership is enforced on insert, and
/// iteration order is the order edges were added. A self-edge puts the
/// vertex's own id in the list, at most once.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    /// Arena id of this vertex.
    pub(crate) id: VertexId,
    /// Opaque caller payload, never interpreted by the graph.
    pub value: V,
    /// Ids of adjacent vertices, in edge insertion order.
    pub(crate) adjacent: Vec<VertexId>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: VertexId, value: V) -> Self {
        Self {
            id,
            value,
            adjacent: Vec::new(),
        }
    }

    /// This vertex's id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Adjacent vertex ids, in edge insertion order.
    pub fn adjacent(&self) -> &[VertexId] {
        &self.adjacent
    }

    /// Whether `other` is in this vertex's adjacency list.
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Insert `other` into the adjacency list if not already present.
    pub(crate) fn link(&mut self, other: VertexId) {
        if !self.adjacent.contains(&other) {
            self.adjacent.push(other);
        }
    }

    /// Remove `other` from the adjacency list. No-op if absent.
    pub(crate) fn unlink(&mut self, other: VertexId) {
        self.adjacent.retain(|&id| id != other);
    }
}
