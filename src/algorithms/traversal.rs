//! Breadth-first and depth-first traversal over a `Graph`.
//!
//! BFS explores level by level with a FIFO queue, so the first time it
//! reaches a node it has done so along a fewest-edges path. DFS follows one
//! branch as deep as it goes before backtracking; it makes no distance
//! guarantee and is the cheaper choice for reachability, component discovery
//! and cycle-style questions.
//!
//! All traversals return node indices in visit order, each node at most once.
//! Every call owns its own visited set and queue/stack.

use crate::error::{Result, SearchError};
use crate::graph::Graph;
use crate::strategy::DepthFirstStrategy;
use std::collections::VecDeque;

fn check_start(graph: &Graph, start: usize) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(SearchError::InvalidStart {
            node: start.to_string(),
        })
    }
}

/// Breadth-first traversal from `start`.
///
/// Nodes are marked visited when enqueued, not when dequeued, so no node is
/// ever queued twice.
///
/// Time: O(V + E). Space: O(V).
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn breadth_first(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    check_start(graph, start)?;

    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        tracing::trace!(node = v, "visit");
        order.push(v);
        for &w in graph.neighbors(v) {
            if !visited[w] {
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }

    tracing::debug!(visited = order.len(), "breadth-first traversal complete");
    Ok(order)
}

/// Depth-first traversal from `start` using the chosen strategy.
///
/// Both strategies visit the same set of nodes; the order can differ.
pub fn depth_first(
    graph: &Graph,
    start: usize,
    strategy: DepthFirstStrategy,
) -> Result<Vec<usize>> {
    match strategy {
        DepthFirstStrategy::Recursive => depth_first_recursive(graph, start),
        DepthFirstStrategy::Iterative => depth_first_iterative(graph, start),
    }
}

/// Recursive depth-first traversal.
///
/// Recursion depth equals the longest simple path explored, so a long chain
/// can overflow the call stack. Prefer `depth_first_iterative` for
/// untrusted or deep inputs.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn depth_first_recursive(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    check_start(graph, start)?;

    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    dfs_visit(graph, start, &mut visited, &mut order);

    tracing::debug!(visited = order.len(), "recursive depth-first traversal complete");
    Ok(order)
}

fn dfs_visit(graph: &Graph, v: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[v] = true;
    tracing::trace!(node = v, "visit");
    order.push(v);

    for &w in graph.neighbors(v) {
        if !visited[w] {
            dfs_visit(graph, w, visited, order);
        }
    }
}

/// Depth-first traversal with an explicit LIFO stack.
///
/// A node may sit on the stack more than once but is expanded only the
/// first time it is popped.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn depth_first_iterative(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    check_start(graph, start)?;

    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        tracing::trace!(node = v, "visit");
        order.push(v);

        for &w in graph.neighbors(v) {
            if !visited[w] {
                stack.push(w);
            }
        }
    }

    tracing::debug!(visited = order.len(), "iterative depth-first traversal complete");
    Ok(order)
}

/// Number of edges on a shortest path from `start` to `end`.
///
/// Returns `Some(0)` when `start == end` and `None` when `end` is
/// unreachable. Stops as soon as `end` shows up as a neighbour instead of
/// finishing the traversal.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn shortest_path_length(graph: &Graph, start: usize, end: usize) -> Result<Option<usize>> {
    check_start(graph, start)?;
    if start == end {
        return Ok(Some(0));
    }

    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back((start, 0usize));

    while let Some((v, dist)) = queue.pop_front() {
        for &w in graph.neighbors(v) {
            if w == end {
                tracing::debug!(distance = dist + 1, "path found");
                return Ok(Some(dist + 1));
            }
            if !visited[w] {
                visited[w] = true;
                queue.push_back((w, dist + 1));
            }
        }
    }

    tracing::debug!("no path");
    Ok(None)
}

/// Nodes along one shortest path from `start` to `end`, both included.
///
/// Same early exit and error policy as `shortest_path_length`. When several
/// shortest paths exist, the one whose nodes were discovered first wins.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn shortest_path(graph: &Graph, start: usize, end: usize) -> Result<Option<Vec<usize>>> {
    check_start(graph, start)?;
    if start == end {
        return Ok(Some(vec![start]));
    }

    // parent[w] = node w was discovered from
    let mut parent: Vec<Option<usize>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        for &w in graph.neighbors(v) {
            if w == end {
                let mut path = vec![end, v];
                let mut cur = v;
                while let Some(p) = parent[cur] {
                    path.push(p);
                    cur = p;
                }
                path.reverse();
                tracing::debug!(distance = path.len() - 1, "path found");
                return Ok(Some(path));
            }
            if !visited[w] {
                visited[w] = true;
                parent[w] = Some(v);
                queue.push_back(w);
            }
        }
    }

    Ok(None)
}

/// Connected components by repeated BFS, seeded in node index order.
///
/// Follows edges as stored, so for a directed graph a "component" is the
/// set reachable from its seed that no earlier seed reached.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn connected_components(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(v) = queue.pop_front() {
            component.push(v);
            for &w in graph.neighbors(v) {
                if !visited[w] {
                    visited[w] = true;
                    queue.push_back(w);
                }
            }
        }
        components.push(component);
    }

    tracing::debug!(components = components.len(), "components found");
    components
}
