//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod mesh_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use mesh_graph::MeshGraph;
pub use traversal::{breadth_first, depth_first, shortest_path};
