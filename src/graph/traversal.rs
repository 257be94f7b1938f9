//! Graph traversal algorithms (DFS, BFS, shortest path).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{MeshError, MeshResult, VertexId};

use super::MeshGraph;

/// Depth-first traversal from a starting vertex, returning values in
/// visitation order.
///
/// Iterative, with an explicit stack and a mark-on-push seen set: a vertex
/// is marked the moment it is pushed, never when popped, so it can only be
/// scheduled once no matter how many paths reach it. Neighbors are pushed
/// in adjacency (edge insertion) order, and since a stack pops last-pushed
/// first, siblings are visited in the *reverse* of that order. A start
/// vertex with no neighbors yields just its own value.
pub fn depth_first<V>(graph: &MeshGraph<V>, start: VertexId) -> MeshResult<Vec<&V>> {
    if graph.vertex(start).is_none() {
        return Err(MeshError::VertexNotFound(start));
    }

    let mut result = Vec::new();
    let mut stack = vec![start];
    let mut seen: HashSet<VertexId> = HashSet::new();
    seen.insert(start);

    while let Some(current) = stack.pop() {
        let vertex = match graph.vertex(current) {
            Some(v) => v,
            None => continue,
        };
        result.push(&vertex.value);

        for &neighbor in vertex.adjacent() {
            if seen.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(result)
}

/// Breadth-first traversal from a starting vertex, returning values in
/// visitation order.
///
/// Same shape as [`depth_first`] with a FIFO queue in place of the stack
/// and the same mark-on-enqueue policy. Dequeuing from the front means
/// siblings are visited in adjacency (edge insertion) order, not reversed
/// — a distinct, observable ordering from DFS on any branching graph.
pub fn breadth_first<V>(graph: &MeshGraph<V>, start: VertexId) -> MeshResult<Vec<&V>> {
    if graph.vertex(start).is_none() {
        return Err(MeshError::VertexNotFound(start));
    }

    let mut result = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut seen: HashSet<VertexId> = HashSet::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let vertex = match graph.vertex(current) {
            Some(v) => v,
            None => continue,
        };
        result.push(&vertex.value);

        for &neighbor in vertex.adjacent() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(result)
}

/// Shortest path between two vertices by edge count.
///
/// BFS with parent tracking and a single-target early exit: the search
/// stops the moment `target` is discovered and reconstructs the path by
/// walking the parent map backward. No distances or paths to other
/// vertices are computed.
///
/// Returns `Ok(None)` when the queue drains without reaching `target`
/// (disconnected pair) — absence of a path is a result, not an error.
/// `source == target` short-circuits to `Ok(Some(vec![source]))` before
/// the search begins; the zero-length path always exists.
pub fn shortest_path<V>(
    graph: &MeshGraph<V>,
    source: VertexId,
    target: VertexId,
) -> MeshResult<Option<Vec<VertexId>>> {
    if graph.vertex(source).is_none() {
        return Err(MeshError::VertexNotFound(source));
    }
    if graph.vertex(target).is_none() {
        return Err(MeshError::VertexNotFound(target));
    }
    if source == target {
        return Ok(Some(vec![source]));
    }

    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut parents: HashMap<VertexId, Option<VertexId>> = HashMap::new();
    visited.insert(source);
    parents.insert(source, None);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            parents.insert(neighbor, Some(current));

            if neighbor == target {
                let path = construct_path(&parents, target);
                log::trace!(
                    "shortest path {} -> {} found, {} vertices",
                    source,
                    target,
                    path.len()
                );
                return Ok(Some(path));
            }
            queue.push_back(neighbor);
        }
    }

    log::trace!("no path from {} to {}", source, target);
    Ok(None)
}

/// Walk backward from `target` through the parent map, then reverse into
/// source-to-target order.
fn construct_path(
    parents: &HashMap<VertexId, Option<VertexId>>,
    target: VertexId,
) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(id) = current {
        path.push(id);
        current = parents.get(&id).copied().flatten();
    }

    path.reverse();
    path
}

impl<V> MeshGraph<V> {
    /// See [`depth_first`].
    pub fn depth_first(&self, start: VertexId) -> MeshResult<Vec<&V>> {
        depth_first(self, start)
    }

    /// See [`breadth_first`].
    pub fn breadth_first(&self, start: VertexId) -> MeshResult<Vec<&V>> {
        breadth_first(self, start)
    }

    /// See [`shortest_path`].
    pub fn shortest_path(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> MeshResult<Option<Vec<VertexId>>> {
        shortest_path(self, source, target)
    }
}
