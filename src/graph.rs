//! Adjacency-list graph with string node ids.

use crate::error::{Result, SearchError};
use crate::strategy::{parse_or_default, DepthFirstStrategy};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use wasm_bindgen::prelude::*;

/// Graph stored as adjacency lists over dense node indices.
///
/// Edges are directed; an undirected edge is two reciprocal entries
/// (see `add_undirected_edge`). Neighbour order is insertion order.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Graph {
    /// Node ID strings
    nodes: Vec<String>,

    /// Reverse lookup: ID string -> index
    node_index: HashMap<String, usize>,

    /// adj[u] = neighbours of u, in the order they were added
    adj: Vec<Vec<usize>>,

    /// Directed edge count
    edge_count: usize,
}

/// Serializable graph snapshot for import/export.
#[derive(Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<(usize, usize)>,
}

#[wasm_bindgen]
impl Graph {
    /// Create an empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Graph {
        Graph {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            adj: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create a graph with pre-allocated node capacity.
    #[wasm_bindgen(js_name = withCapacity)]
    pub fn with_capacity(node_capacity: usize) -> Graph {
        Graph {
            nodes: Vec::with_capacity(node_capacity),
            node_index: HashMap::with_capacity(node_capacity),
            adj: Vec::with_capacity(node_capacity),
            edge_count: 0,
        }
    }

    /// Add a node, returns its index. Idempotent - returns existing index if already present.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        self.adj.push(Vec::new());
        idx
    }

    /// Add a directed edge from -> to. Idempotent; out-of-range indices are ignored.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if from >= self.nodes.len() || to >= self.nodes.len() {
            return;
        }
        if self.adj[from].contains(&to) {
            return;
        }
        self.adj[from].push(to);
        self.edge_count += 1;
    }

    /// Add both a -> b and b -> a.
    #[wasm_bindgen(js_name = addUndirectedEdge)]
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// Number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (an undirected edge counts twice).
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get node ID by index.
    #[wasm_bindgen(js_name = nodeId)]
    pub fn node_id(&self, idx: usize) -> Option<String> {
        self.nodes.get(idx).cloned()
    }

    /// Get node index by ID.
    #[wasm_bindgen(js_name = nodeIdx)]
    pub fn node_idx(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    /// All node IDs in index order.
    #[wasm_bindgen(js_name = nodeIds)]
    pub fn node_ids(&self) -> js_sys::Array {
        self.nodes.iter().map(|id| JsValue::from_str(id)).collect()
    }

    /// Neighbour IDs of a node, in insertion order.
    #[wasm_bindgen(js_name = neighbors)]
    pub fn neighbors_js(&self, id: &str) -> std::result::Result<js_sys::Array, JsError> {
        let node = self.require(id)?;
        Ok(self.ids_array(self.neighbors(node)))
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        let snapshot = GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges().collect(),
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Import graph from JSON snapshot.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> std::result::Result<Graph, JsError> {
        Ok(Graph::from_snapshot_str(json)?)
    }

    /// Build from a plain object mapping node id -> array of neighbour ids.
    /// Keys are inserted in sorted order; each listed neighbour becomes a directed edge.
    #[wasm_bindgen(js_name = fromAdjacency)]
    pub fn from_adjacency_js(value: JsValue) -> std::result::Result<Graph, JsError> {
        let map: BTreeMap<String, Vec<String>> =
            serde_wasm_bindgen::from_value(value).map_err(SearchError::from)?;
        Ok(Graph::from_adjacency(map))
    }

    /// Node IDs reachable from `start`, in breadth-first visit order.
    #[wasm_bindgen(js_name = breadthFirst)]
    pub fn breadth_first_js(&self, start: &str) -> std::result::Result<js_sys::Array, JsError> {
        use crate::algorithms::traversal::breadth_first;
        let order = breadth_first(self, self.require(start)?)?;
        Ok(self.ids_array(&order))
    }

    /// Node IDs reachable from `start`, in depth-first visit order.
    /// `strategy` is "iterative" (default) or "recursive".
    #[wasm_bindgen(js_name = depthFirst)]
    pub fn depth_first_js(
        &self,
        start: &str,
        strategy: Option<String>,
    ) -> std::result::Result<js_sys::Array, JsError> {
        use crate::algorithms::traversal::depth_first;
        let strategy: DepthFirstStrategy = parse_or_default(strategy)?;
        let order = depth_first(self, self.require(start)?, strategy)?;
        Ok(self.ids_array(&order))
    }

    /// Number of edges on a shortest path, 0 when start == end, -1 when unreachable.
    /// An unknown `end` is unreachable; an unknown `start` is an error.
    #[wasm_bindgen(js_name = shortestPathLength)]
    pub fn shortest_path_length_js(
        &self,
        start: &str,
        end: &str,
    ) -> std::result::Result<i32, JsError> {
        use crate::algorithms::traversal::shortest_path_length;
        let start = self.require(start)?;
        let Some(end) = self.node_idx(end) else {
            return Ok(-1);
        };
        Ok(shortest_path_length(self, start, end)?.map_or(-1, |d| d as i32))
    }

    /// Node IDs along one shortest path, or null when unreachable.
    #[wasm_bindgen(js_name = shortestPath)]
    pub fn shortest_path_js(
        &self,
        start: &str,
        end: &str,
    ) -> std::result::Result<Option<js_sys::Array>, JsError> {
        use crate::algorithms::traversal::shortest_path;
        let start = self.require(start)?;
        let Some(end) = self.node_idx(end) else {
            return Ok(None);
        };
        Ok(shortest_path(self, start, end)?.map(|path| self.ids_array(&path)))
    }

    /// Connected components as string[][] of node IDs, in discovery order.
    #[wasm_bindgen(js_name = connectedComponents)]
    pub fn connected_components_js(&self) -> js_sys::Array {
        use crate::algorithms::traversal::connected_components;
        connected_components(self)
            .iter()
            .map(|component| JsValue::from(self.ids_array(component)))
            .collect()
    }
}

// Internal methods (not exposed to WASM)
impl Graph {
    /// Build a graph from (node, neighbours) entries. Each neighbour becomes a
    /// directed edge; undirected graphs list each edge from both ends.
    pub fn from_adjacency<I, K, N>(entries: I) -> Graph
    where
        I: IntoIterator<Item = (K, N)>,
        K: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (node, neighbors) in entries {
            let from = graph.add_node(node.as_ref());
            for neighbor in neighbors {
                let to = graph.add_node(neighbor.as_ref());
                graph.add_edge(from, to);
            }
        }
        graph
    }

    /// Build an undirected graph from an edge list of node IDs.
    pub fn undirected<'a, I>(edges: I) -> Graph
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Graph::new();
        for (a, b) in edges {
            let a = graph.add_node(a);
            let b = graph.add_node(b);
            graph.add_undirected_edge(a, b);
        }
        graph
    }

    /// Parse a JSON snapshot produced by `to_json`.
    ///
    /// Edge indices refer to positions in `nodes`, so duplicate IDs and
    /// out-of-range edges are rejected rather than collapsed.
    pub fn from_snapshot_str(json: &str) -> Result<Graph> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        let mut graph = Graph::with_capacity(snapshot.nodes.len());
        for (pos, id) in snapshot.nodes.iter().enumerate() {
            if graph.add_node(id) != pos {
                return Err(SearchError::invalid_argument(format!(
                    "snapshot lists node {id:?} more than once"
                )));
            }
        }
        for (from, to) in snapshot.edges {
            if !graph.contains(from) || !graph.contains(to) {
                return Err(SearchError::invalid_argument(format!(
                    "snapshot edge ({from}, {to}) out of range for {} nodes",
                    graph.len()
                )));
            }
            graph.add_edge(from, to);
        }
        Ok(graph)
    }

    /// Neighbours of a node (empty for unknown indices).
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adj.get(node).map_or(&[], |v| v.as_slice())
    }

    /// Whether `node` is a valid index.
    pub fn contains(&self, node: usize) -> bool {
        node < self.nodes.len()
    }

    /// Look up an ID, failing with `InvalidStart` when absent.
    pub fn require(&self, id: &str) -> Result<usize> {
        self.node_idx(id).ok_or_else(|| SearchError::InvalidStart {
            node: id.to_string(),
        })
    }

    /// Map indices back to their IDs.
    pub fn ids(&self, indices: &[usize]) -> Vec<&str> {
        indices
            .iter()
            .filter_map(|&i| self.nodes.get(i).map(String::as_str))
            .collect()
    }

    /// Iterate over all directed edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| (from, to)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn ids_array(&self, indices: &[usize]) -> js_sys::Array {
        self.ids(indices).into_iter().map(JsValue::from_str).collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
