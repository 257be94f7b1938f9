//! Basic create -> connect -> query flow.

use meshgraph::{GraphBuilder, MeshResult};

fn main() -> MeshResult<()> {
    // Build a small friendship mesh
    let mut builder = GraphBuilder::new();
    let ada = builder.vertex("Ada");
    let grace = builder.vertex("Grace");
    let alan = builder.vertex("Alan");
    let edsger = builder.vertex("Edsger");

    builder.edge(ada, grace).edge(grace, alan).edge(alan, edsger);
    let graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.member_count(),
        graph.edge_count()
    );

    // Who can Ada reach, breadth-first?
    let reachable = graph.breadth_first(ada)?;
    println!("Breadth-first from Ada: {:?}", reachable);

    // Shortest chain of introductions from Ada to Edsger
    match graph.shortest_path(ada, edsger)? {
        Some(path) => {
            let names: Vec<&&str> = path.iter().filter_map(|&id| graph.value(id)).collect();
            println!("Shortest path Ada -> Edsger: {:?}", names);
        }
        None => println!("Ada cannot reach Edsger"),
    }

    Ok(())
}
