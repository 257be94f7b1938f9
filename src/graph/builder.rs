//! Fluent API for building MeshGraph instances.

use crate::types::{MeshResult, VertexId};

use super::MeshGraph;

/// Fluent builder for constructing a MeshGraph.
///
/// Every vertex created through the builder becomes a member of the built
/// graph; recorded edges are applied after all vertices exist. Edge ids
/// refer to vertices created through this builder.
pub struct GraphBuilder<V> {
    values: Vec<V>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<V> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex with the given value, returning the id it will have
    /// in the built graph.
    pub fn vertex(&mut self, value: V) -> VertexId {
        let id = VertexId::from_index(self.values.len());
        self.values.push(value);
        id
    }

    /// Record an undirected edge between two vertices.
    pub fn edge(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final MeshGraph.
    pub fn build(self) -> MeshResult<MeshGraph<V>> {
        let mut graph = MeshGraph::new();
        for value in self.values {
            let id = graph.create_vertex(value);
            graph.add_vertex(id)?;
        }
        for (a, b) in self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
