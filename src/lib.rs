//! meshgraph — in-memory undirected graph with unweighted traversal queries.
//!
//! Vertices carry an opaque caller value and live in an arena owned by the
//! graph; adjacency lists hold vertex ids, keeping the structure free of
//! ownership cycles. On top of the mutation operations the crate provides
//! four traversal queries: depth-first order, breadth-first order, and
//! single-target shortest path with path reconstruction.
//!
//! ```
//! use meshgraph::{GraphBuilder, MeshResult};
//!
//! fn main() -> MeshResult<()> {
//!     let mut builder = GraphBuilder::new();
//!     let a = builder.vertex("a");
//!     let b = builder.vertex("b");
//!     let c = builder.vertex("c");
//!     builder.edge(a, b).edge(b, c);
//!     let graph = builder.build()?;
//!
//!     assert_eq!(graph.breadth_first(a)?, vec![&"a", &"b", &"c"]);
//!     assert_eq!(graph.shortest_path(a, c)?, Some(vec![a, b, c]));
//!     Ok(())
//! }
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{breadth_first, depth_first, shortest_path, GraphBuilder, MeshGraph};
pub use types::{MeshError, MeshResult, Vertex, VertexId};
