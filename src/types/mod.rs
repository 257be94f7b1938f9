//! All data types for the meshgraph library.

pub mod error;
pub mod vertex;

pub use error::{MeshError, MeshResult};
pub use vertex::{Vertex, VertexId};
