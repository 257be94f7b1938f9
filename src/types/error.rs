//! Error types for the meshgraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the meshgraph library.
///
/// Structural no-ops (adding a vertex twice, removing a missing edge) are
/// deliberately not errors; only ids that were never created in a graph's
/// arena fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// Vertex id was never created in this graph's arena.
    #[error("Vertex {0} not found in this graph")]
    VertexNotFound(VertexId),
}

/// Convenience result type for meshgraph operations.
pub type MeshResult<T> = Result<T, MeshError>;
