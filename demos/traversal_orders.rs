//! Shows how DFS and BFS order the same graph differently.

use meshgraph::{GraphBuilder, MeshResult};

fn main() -> MeshResult<()> {
    // A star: s connected to a, b, c in that order
    let mut builder = GraphBuilder::new();
    let s = builder.vertex("s");
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    builder.edge(s, a).edge(s, b).edge(s, c);
    let graph = builder.build()?;

    // BFS visits siblings in the order their edges were added
    println!("BFS: {:?}", graph.breadth_first(s)?);

    // DFS pops a stack, so siblings come out reversed
    println!("DFS: {:?}", graph.depth_first(s)?);

    Ok(())
}
