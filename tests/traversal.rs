//! Traversal tests: DFS/BFS orderings and shortest paths.

use meshgraph::{breadth_first, depth_first, shortest_path, GraphBuilder, MeshError, MeshGraph};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== DFS / BFS Order Tests ====================

#[test]
fn test_isolated_vertex() {
    let mut graph = MeshGraph::new();
    let a = graph.create_vertex("a");
    graph.add_vertex(a).unwrap();

    assert_eq!(graph.depth_first(a).unwrap(), vec![&"a"]);
    assert_eq!(graph.breadth_first(a).unwrap(), vec![&"a"]);
}

#[test]
fn test_star_orders_differ() {
    // S connected to A, B, C, edges added in that order
    let mut builder = GraphBuilder::new();
    let s = builder.vertex("s");
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    builder.edge(s, a).edge(s, b).edge(s, c);
    let graph = builder.build().unwrap();

    // BFS dequeues from the front: siblings in adjacency order
    assert_eq!(graph.breadth_first(s).unwrap(), vec![&"s", &"a", &"b", &"c"]);
    // DFS pops last-pushed first: siblings in reverse adjacency order
    assert_eq!(graph.depth_first(s).unwrap(), vec![&"s", &"c", &"b", &"a"]);
}

#[test]
fn test_dfs_descends_before_siblings() {
    // s - a, s - b, a - c
    let mut builder = GraphBuilder::new();
    let s = builder.vertex("s");
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    builder.edge(s, a).edge(s, b).edge(a, c);
    let graph = builder.build().unwrap();

    // Stack after s: [a, b]; b pops first, then a, then a's child c
    assert_eq!(graph.depth_first(s).unwrap(), vec![&"s", &"b", &"a", &"c"]);
    assert_eq!(graph.breadth_first(s).unwrap(), vec![&"s", &"a", &"b", &"c"]);
}

#[test]
fn test_traversal_visits_component_once() {
    init_logs();
    // Component {s, a, b} with a cycle, plus an unreachable pair {x, y}
    let mut builder = GraphBuilder::new();
    let s = builder.vertex(0);
    let a = builder.vertex(1);
    let b = builder.vertex(2);
    let x = builder.vertex(3);
    let y = builder.vertex(4);
    builder.edge(s, a).edge(a, b).edge(b, s).edge(x, y);
    let graph = builder.build().unwrap();

    for result in [graph.depth_first(s).unwrap(), graph.breadth_first(s).unwrap()] {
        assert_eq!(result.len(), 3, "must visit the reachable component exactly once");
        for value in [&0, &1, &2] {
            assert!(result.contains(&value));
        }
        assert!(!result.contains(&&3));
        assert!(!result.contains(&&4));
    }
}

#[test]
fn test_self_edge_terminates() {
    let mut graph = MeshGraph::new();
    let a = graph.create_vertex("a");
    graph.add_vertex(a).unwrap();
    graph.add_edge(a, a).unwrap();

    assert_eq!(graph.depth_first(a).unwrap(), vec![&"a"]);
    assert_eq!(graph.breadth_first(a).unwrap(), vec![&"a"]);
}

#[test]
fn test_traversal_unknown_start() {
    let mut other = MeshGraph::new();
    other.create_vertex(0);
    let foreign = other.create_vertex(1);

    let mut graph = MeshGraph::new();
    graph.create_vertex(0);

    match depth_first(&graph, foreign).unwrap_err() {
        MeshError::VertexNotFound(id) => assert_eq!(id, foreign),
    }
    match breadth_first(&graph, foreign).unwrap_err() {
        MeshError::VertexNotFound(id) => assert_eq!(id, foreign),
    }
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_path_chain() {
    // a - b - c - d
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    let d = builder.vertex("d");
    builder.edge(a, b).edge(b, c).edge(c, d);
    let graph = builder.build().unwrap();

    assert_eq!(graph.shortest_path(a, d).unwrap(), Some(vec![a, b, c, d]));
    assert_eq!(graph.shortest_path(d, a).unwrap(), Some(vec![d, c, b, a]));
}

#[test]
fn test_shortest_path_takes_discovery_order() {
    // 4-cycle: a-b, a-c, b-d, c-d. Both a->b->d and a->c->d have length 3;
    // b is discovered before c, so the b route wins.
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    let d = builder.vertex("d");
    builder.edge(a, b).edge(a, c).edge(b, d).edge(c, d);
    let graph = builder.build().unwrap();

    assert_eq!(graph.shortest_path(a, d).unwrap(), Some(vec![a, b, d]));
}

#[test]
fn test_shortest_path_prefers_fewer_edges() {
    // Long way around (a-b-c-d) versus direct a-d
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    let d = builder.vertex("d");
    builder.edge(a, b).edge(b, c).edge(c, d).edge(a, d);
    let graph = builder.build().unwrap();

    assert_eq!(graph.shortest_path(a, d).unwrap(), Some(vec![a, d]));
}

#[test]
fn test_shortest_path_disconnected() {
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let x = builder.vertex("x");
    builder.edge(a, b);
    let graph = builder.build().unwrap();

    assert_eq!(graph.shortest_path(a, x).unwrap(), None);
}

#[test]
fn test_shortest_path_source_is_target() {
    // Defined boundary: the zero-length path exists even with no edges
    let mut graph = MeshGraph::new();
    let a = graph.create_vertex("a");
    graph.add_vertex(a).unwrap();

    assert_eq!(graph.shortest_path(a, a).unwrap(), Some(vec![a]));
}

#[test]
fn test_shortest_path_adjacent_pair() {
    let mut graph = MeshGraph::new();
    let a = graph.create_vertex("a");
    let b = graph.create_vertex("b");
    graph.add_vertices(&[a, b]).unwrap();
    graph.add_edge(a, b).unwrap();

    assert_eq!(graph.shortest_path(a, b).unwrap(), Some(vec![a, b]));
}

#[test]
fn test_shortest_path_after_edge_removal() {
    // Removing the shortcut forces the long route
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a");
    let b = builder.vertex("b");
    let c = builder.vertex("c");
    builder.edge(a, b).edge(b, c).edge(a, c);
    let mut graph = builder.build().unwrap();

    assert_eq!(graph.shortest_path(a, c).unwrap(), Some(vec![a, c]));
    graph.remove_edge(a, c).unwrap();
    assert_eq!(graph.shortest_path(a, c).unwrap(), Some(vec![a, b, c]));
}

#[test]
fn test_shortest_path_unknown_endpoints() {
    let mut other = MeshGraph::new();
    other.create_vertex(0);
    let foreign = other.create_vertex(1);

    let mut graph = MeshGraph::new();
    let a = graph.create_vertex(0);

    match shortest_path(&graph, foreign, a).unwrap_err() {
        MeshError::VertexNotFound(id) => assert_eq!(id, foreign),
    }
    match shortest_path(&graph, a, foreign).unwrap_err() {
        MeshError::VertexNotFound(id) => assert_eq!(id, foreign),
    }
}
