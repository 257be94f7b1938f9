//! Core graph structure — a vertex arena plus an ordered membership set.

use crate::types::{MeshError, MeshResult, Vertex, VertexId};

/// An in-memory undirected graph.
///
/// Vertices live in an arena owned by the graph and are addressed by
/// [`VertexId`]; adjacency lists hold ids, never references. Creating a
/// vertex ([`create_vertex`]) and registering it as a member of the graph
/// ([`add_vertex`]) are separate steps: a vertex can carry edges and appear
/// in other vertices' adjacency lists without being a member, and the
/// structure does not enforce referential closure between the two.
///
/// Adjacency is kept symmetric by every mutating operation, with one
/// documented exception: [`remove_vertex`] sweeps only the adjacency lists
/// of current members, so a non-member vertex may retain a dangling
/// reference to the removed vertex.
///
/// The graph has no internal locking. Callers that need concurrent access
/// must synchronize externally.
///
/// [`create_vertex`]: MeshGraph::create_vertex
/// [`add_vertex`]: MeshGraph::add_vertex
/// [`remove_vertex`]: MeshGraph::remove_vertex
#[derive(Debug, Clone)]
pub struct MeshGraph<V> {
    /// Every vertex ever created through this graph, indexed by id.
    vertices: Vec<Vertex<V>>,
    /// Member vertex ids, in insertion order. The `nodes` set.
    members: Vec<VertexId>,
}

impl<V> MeshGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Number of member vertices.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of undirected edges across the whole arena.
    ///
    /// Each unordered pair is counted once by scanning every vertex's list
    /// for entries with an id not below its own; a self-loop counts once,
    /// and so does a one-sided entry left dangling by a membership sweep.
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|v| v.adjacent.iter().filter(|&&n| n >= v.id).count())
            .sum()
    }

    /// Member vertex ids, in the order they were added.
    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    /// Whether the given vertex is currently a member.
    pub fn is_member(&self, id: VertexId) -> bool {
        self.members.contains(&id)
    }

    /// Get a vertex by id, or `None` if the id is not from this graph.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(id.index())
    }

    /// Get a vertex's value (immutable).
    pub fn value(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.index()).map(|v| &v.value)
    }

    /// Get a vertex's value (mutable).
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(id.index()).map(|v| &mut v.value)
    }

    /// Adjacent vertex ids in edge insertion order.
    ///
    /// Returns an empty slice for an id that is not from this graph.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertices
            .get(id.index())
            .map(|v| v.adjacent())
            .unwrap_or(&[])
    }

    /// Allocate a new vertex in the arena, returning its id.
    ///
    /// The vertex starts with an empty adjacency list and is NOT yet a
    /// member of the graph; call [`add_vertex`] to register it.
    ///
    /// [`add_vertex`]: MeshGraph::add_vertex
    pub fn create_vertex(&mut self, value: V) -> VertexId {
        let id = VertexId::from_index(self.vertices.len());
        self.vertices.push(Vertex::new(id, value));
        id
    }

    /// Register a vertex as a member of the graph.
    ///
    /// Idempotent: adding a vertex that is already a member is a no-op.
    pub fn add_vertex(&mut self, id: VertexId) -> MeshResult<()> {
        self.check_id(id)?;
        if !self.members.contains(&id) {
            self.members.push(id);
        }
        Ok(())
    }

    /// Register each vertex in the slice as a member, in order.
    ///
    /// Stops at the first id that is not from this graph.
    pub fn add_vertices(&mut self, ids: &[VertexId]) -> MeshResult<()> {
        for &id in ids {
            self.add_vertex(id)?;
        }
        Ok(())
    }

    /// Add an undirected edge between two vertices.
    ///
    /// Inserts each id into the other's adjacency list; idempotent if the
    /// edge already exists. Neither endpoint is required to be a member —
    /// only arena validity is checked. A self-edge (`a == b`) is permitted
    /// and puts the vertex in its own list once.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> MeshResult<()> {
        self.check_id(a)?;
        self.check_id(b)?;
        self.vertices[a.index()].link(b);
        self.vertices[b.index()].link(a);
        Ok(())
    }

    /// Remove the undirected edge between two vertices.
    ///
    /// Silent no-op when the edge does not exist.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> MeshResult<()> {
        self.check_id(a)?;
        self.check_id(b)?;
        self.vertices[a.index()].unlink(b);
        self.vertices[b.index()].unlink(a);
        Ok(())
    }

    /// Remove a vertex from the membership set and from every remaining
    /// member's adjacency list.
    ///
    /// No-op on the membership set if the vertex was not a member; the
    /// sweep still runs. Adjacency lists of non-member vertices are not
    /// touched, so they may keep a dangling reference to the removed
    /// vertex — an accepted limitation of the membership model.
    pub fn remove_vertex(&mut self, id: VertexId) -> MeshResult<()> {
        self.check_id(id)?;
        self.members.retain(|&m| m != id);
        for &m in &self.members {
            self.vertices[m.index()].unlink(id);
        }
        log::debug!(
            "removed {} from membership, swept {} remaining members",
            id,
            self.members.len()
        );
        Ok(())
    }

    fn check_id(&self, id: VertexId) -> MeshResult<()> {
        if id.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(MeshError::VertexNotFound(id))
        }
    }
}

impl<V> Default for MeshGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
