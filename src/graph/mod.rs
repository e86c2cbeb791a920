/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Graph data structures for the diagram editor.
//!
//! Core structures:
//! - `Graph`: diagram container backed by petgraph::StableGraph
//! - `Node`: typed, labeled vertex with a user-visible identifier and a
//!   canvas-space position
//! - `EdgeData`: directed edge weight carrying the edge label
//!
//! Boundary: topology mutators are `pub(crate)` — hosts mutate through
//! `DiagramEditor`, the single write path.

use euclid::default::Point2D;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use std::collections::HashMap;
use std::fmt;

use crate::persistence::types::{DiagramSnapshot, PersistedEdge, PersistedNode};

/// Stable node handle (petgraph NodeIndex — survives other deletions)
pub type NodeKey = NodeIndex;

/// Stable edge handle (petgraph EdgeIndex)
pub type EdgeKey = EdgeIndex;

/// A diagram node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// User-visible identifier. Unique across live nodes; renaming re-keys
    /// the id index.
    pub id: String,

    /// Free-text node type; no semantic constraint.
    pub node_type: String,

    /// Display label.
    pub label: String,

    /// Position in canvas space.
    pub position: Point2D<f32>,
}

/// Directed edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    /// Display label.
    pub label: String,
}

/// Read-only view of a live edge, in creation order.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub key: EdgeKey,
    pub from: NodeKey,
    pub to: NodeKey,
    pub label: &'a str,
}

/// Record of an edge removed by an explicit delete or an endpoint cascade.
///
/// Endpoint identifiers are captured at removal time so callers can react
/// after the nodes themselves are gone.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedEdge {
    pub key: EdgeKey,
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Errors from graph mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Add or rename collided with a live identifier.
    DuplicateId(String),
    /// Operation targeted a stale or removed handle.
    NotFound,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateId(id) => write!(f, "node ID '{id}' already exists"),
            GraphError::NotFound => write!(f, "no such node or edge"),
        }
    }
}

/// Main diagram structure backed by petgraph::StableGraph.
#[derive(Clone)]
pub struct Graph {
    /// The underlying petgraph stable graph.
    inner: StableGraph<Node, EdgeData, Directed>,

    /// User-visible identifier to node mapping.
    id_to_node: HashMap<String, NodeKey>,

    /// Live edge keys in creation order. Authoritative for serialization
    /// and ordered iteration; StableGraph index order is not, since freed
    /// indices are reused.
    edge_order: Vec<EdgeKey>,

    /// Source for generated node identifiers. Bumped on every add attempt
    /// and never rolled back, so generated ids are strictly increasing and
    /// may show gaps after a rejected add.
    node_counter: u64,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: StableGraph::new(),
            id_to_node: HashMap::new(),
            edge_order: Vec::new(),
            node_counter: 1,
        }
    }

    // Single-write-path boundary: topology mutators are crate-internal.
    // Callers outside `DiagramEditor` are invariant violations.

    /// Add a node. A `None` or empty id resolves to `"N" + counter`.
    pub(crate) fn add_node(
        &mut self,
        id: Option<String>,
        node_type: String,
        label: String,
        position: Point2D<f32>,
    ) -> Result<NodeKey, GraphError> {
        let resolved = match id {
            Some(id) if !id.is_empty() => id,
            _ => format!("N{}", self.node_counter),
        };
        self.node_counter += 1;

        if self.id_to_node.contains_key(&resolved) {
            return Err(GraphError::DuplicateId(resolved));
        }

        let key = self.inner.add_node(Node {
            id: resolved.clone(),
            node_type,
            label,
            position,
        });
        self.id_to_node.insert(resolved, key);
        Ok(key)
    }

    /// Rename a node, re-keying the id index. Renaming to the current id is
    /// a no-op success; all incident edges are preserved.
    pub(crate) fn rename_node(&mut self, key: NodeKey, new_id: &str) -> Result<(), GraphError> {
        let current = match self.inner.node_weight(key) {
            Some(node) => node.id.clone(),
            None => return Err(GraphError::NotFound),
        };
        if new_id == current {
            return Ok(());
        }
        if self.id_to_node.contains_key(new_id) {
            return Err(GraphError::DuplicateId(new_id.to_string()));
        }

        self.id_to_node.remove(&current);
        self.id_to_node.insert(new_id.to_string(), key);
        if let Some(node) = self.inner.node_weight_mut(key) {
            node.id = new_id.to_string();
        }
        Ok(())
    }

    /// Replace a node's type and label in place.
    pub(crate) fn update_node(
        &mut self,
        key: NodeKey,
        node_type: String,
        label: String,
    ) -> Result<(), GraphError> {
        let node = self.inner.node_weight_mut(key).ok_or(GraphError::NotFound)?;
        node.node_type = node_type;
        node.label = label;
        Ok(())
    }

    /// Drag-tick position update.
    pub(crate) fn set_position(
        &mut self,
        key: NodeKey,
        position: Point2D<f32>,
    ) -> Result<(), GraphError> {
        let node = self.inner.node_weight_mut(key).ok_or(GraphError::NotFound)?;
        node.position = position;
        Ok(())
    }

    /// Remove a node and all its incident edges (both directions).
    ///
    /// Returns the removed edges so callers (selection, renderer) can react.
    pub(crate) fn remove_node(&mut self, key: NodeKey) -> Result<Vec<RemovedEdge>, GraphError> {
        if !self.inner.contains_node(key) {
            return Err(GraphError::NotFound);
        }

        let incident = self.incident_edges(key);
        let removed: Vec<RemovedEdge> = incident
            .iter()
            .filter_map(|&edge_key| self.edge_record(edge_key))
            .collect();
        self.edge_order.retain(|edge_key| !incident.contains(edge_key));

        if let Some(node) = self.inner.remove_node(key) {
            self.id_to_node.remove(&node.id);
        }
        Ok(removed)
    }

    /// Add a directed edge between two live nodes.
    ///
    /// Self-loops and parallel edges are permitted and remain independent
    /// entities.
    pub(crate) fn add_edge(
        &mut self,
        from: NodeKey,
        to: NodeKey,
        label: String,
    ) -> Result<EdgeKey, GraphError> {
        if !self.inner.contains_node(from) || !self.inner.contains_node(to) {
            return Err(GraphError::NotFound);
        }
        let key = self.inner.add_edge(from, to, EdgeData { label });
        self.edge_order.push(key);
        Ok(key)
    }

    /// Replace an edge's label.
    pub(crate) fn update_edge_label(
        &mut self,
        key: EdgeKey,
        label: String,
    ) -> Result<(), GraphError> {
        let edge = self.inner.edge_weight_mut(key).ok_or(GraphError::NotFound)?;
        edge.label = label;
        Ok(())
    }

    /// Capture a removal record for a live edge.
    fn edge_record(&self, key: EdgeKey) -> Option<RemovedEdge> {
        let (from, to) = self.inner.edge_endpoints(key)?;
        let label = self.inner.edge_weight(key)?.label.clone();
        Some(RemovedEdge {
            key,
            from: self.inner[from].id.clone(),
            to: self.inner[to].id.clone(),
            label,
        })
    }

    /// Remove an edge from the ordered list and the adjacency.
    pub(crate) fn remove_edge(&mut self, key: EdgeKey) -> Result<RemovedEdge, GraphError> {
        let record = self.edge_record(key).ok_or(GraphError::NotFound)?;
        self.edge_order.retain(|edge_key| *edge_key != key);
        let _ = self.inner.remove_edge(key);
        Ok(record)
    }

    /// Drop all nodes and edges and reset the id counter.
    pub(crate) fn clear(&mut self) {
        self.inner.clear();
        self.id_to_node.clear();
        self.edge_order.clear();
        self.node_counter = 1;
    }

    /// Get a node by key.
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.inner.node_weight(key)
    }

    /// Get a node's user-visible identifier.
    pub fn node_id(&self, key: NodeKey) -> Option<&str> {
        self.inner.node_weight(key).map(|node| node.id.as_str())
    }

    /// Get a node key by user-visible identifier.
    pub fn get_node_key_by_id(&self, id: &str) -> Option<NodeKey> {
        self.id_to_node.get(id).copied()
    }

    /// Iterate over all nodes as (key, node) pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.inner
            .node_indices()
            .map(move |idx| (idx, &self.inner[idx]))
    }

    /// Iterate over all edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.edge_order.iter().filter_map(move |&key| {
            let (from, to) = self.inner.edge_endpoints(key)?;
            let data = self.inner.edge_weight(key)?;
            Some(EdgeView {
                key,
                from,
                to,
                label: data.label.as_str(),
            })
        })
    }

    /// Endpoints of a live edge.
    pub fn edge_endpoints(&self, key: EdgeKey) -> Option<(NodeKey, NodeKey)> {
        self.inner.edge_endpoints(key)
    }

    /// Label of a live edge.
    pub fn edge_label(&self, key: EdgeKey) -> Option<&str> {
        self.inner.edge_weight(key).map(|data| data.label.as_str())
    }

    /// All edge keys incident to a node, in either direction. A self-loop
    /// appears once.
    pub fn incident_edges(&self, key: NodeKey) -> Vec<EdgeKey> {
        let mut keys: Vec<EdgeKey> = self
            .inner
            .edges_directed(key, Direction::Outgoing)
            .map(|edge| edge.id())
            .collect();
        for edge in self.inner.edges_directed(key, Direction::Incoming) {
            if !keys.contains(&edge.id()) {
                keys.push(edge.id());
            }
        }
        keys
    }

    /// Count of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Count of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Serialize the graph to a persistable snapshot.
    pub fn to_snapshot(&self) -> DiagramSnapshot {
        let nodes = self
            .nodes()
            .map(|(_, node)| PersistedNode {
                id: node.id.clone(),
                node_type: node.node_type.clone(),
                label: node.label.clone(),
                x: node.position.x,
                y: node.position.y,
            })
            .collect();

        let edges = self
            .edges()
            .map(|edge| PersistedEdge {
                from: self
                    .node_id(edge.from)
                    .map(str::to_string)
                    .unwrap_or_default(),
                to: self.node_id(edge.to).map(str::to_string).unwrap_or_default(),
                label: edge.label.to_string(),
            })
            .collect();

        DiagramSnapshot { nodes, edges }
    }

    /// Rebuild a graph from a persisted snapshot.
    ///
    /// Nodes are inserted directly in listed order — no placement policy and
    /// no duplicate-id rejection: a later entry with a repeated id replaces
    /// the earlier node. Edges are reconnected by id; an edge naming an
    /// unknown endpoint is dropped with a warning rather than rejected.
    pub fn from_snapshot(snapshot: &DiagramSnapshot) -> Self {
        let mut graph = Graph::new();

        for pnode in &snapshot.nodes {
            if let Some(&stale) = graph.id_to_node.get(&pnode.id) {
                let _ = graph.inner.remove_node(stale);
            }
            let key = graph.inner.add_node(Node {
                id: pnode.id.clone(),
                node_type: pnode.node_type.clone(),
                label: pnode.label.clone(),
                position: Point2D::new(pnode.x, pnode.y),
            });
            graph.id_to_node.insert(pnode.id.clone(), key);
        }

        for pedge in &snapshot.edges {
            let from = graph.get_node_key_by_id(&pedge.from);
            let to = graph.get_node_key_by_id(&pedge.to);
            if let (Some(from), Some(to)) = (from, to) {
                let key = graph.inner.add_edge(
                    from,
                    to,
                    EdgeData {
                        label: pedge.label.clone(),
                    },
                );
                graph.edge_order.push(key);
            } else {
                log::warn!(
                    "dropping edge '{}' -> '{}': unknown endpoint id",
                    pedge.from,
                    pedge.to
                );
            }
        }

        graph
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn add(graph: &mut Graph, id: &str) -> NodeKey {
        graph
            .add_node(
                Some(id.to_string()),
                "task".to_string(),
                id.to_string(),
                Point2D::new(0.0, 0.0),
            )
            .unwrap()
    }

    /// Structural consistency: live edges have live endpoints, the ordered
    /// edge list matches the adjacency, and the id index is exact.
    fn check_consistency(graph: &Graph) {
        for edge in graph.edges() {
            assert!(graph.get_node(edge.from).is_some());
            assert!(graph.get_node(edge.to).is_some());
        }
        assert_eq!(graph.edges().count(), graph.edge_count());
        assert_eq!(graph.nodes().count(), graph.node_count());
        for (key, node) in graph.nodes() {
            assert_eq!(graph.get_node_key_by_id(&node.id), Some(key));
        }
        assert_eq!(graph.id_to_node.len(), graph.node_count());
    }

    #[test]
    fn test_graph_new() {
        let graph = Graph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_explicit_id() {
        let mut graph = Graph::new();
        let key = graph
            .add_node(
                Some("A".to_string()),
                "person".to_string(),
                "Alice".to_string(),
                Point2D::new(10.0, 20.0),
            )
            .unwrap();

        let node = graph.get_node(key).unwrap();
        assert_eq!(node.id, "A");
        assert_eq!(node.node_type, "person");
        assert_eq!(node.label, "Alice");
        assert_eq!(node.position.x, 10.0);
        assert_eq!(node.position.y, 20.0);
        assert_eq!(graph.get_node_key_by_id("A"), Some(key));
    }

    #[test]
    fn test_add_node_generated_ids_increase() {
        let mut graph = Graph::new();
        let k1 = graph
            .add_node(None, String::new(), String::new(), Point2D::new(0.0, 0.0))
            .unwrap();
        let k2 = graph
            .add_node(
                Some(String::new()),
                String::new(),
                String::new(),
                Point2D::new(0.0, 0.0),
            )
            .unwrap();
        assert_eq!(graph.node_id(k1), Some("N1"));
        assert_eq!(graph.node_id(k2), Some("N2"));
    }

    #[test]
    fn test_add_node_duplicate_id_rejected() {
        let mut graph = Graph::new();
        add(&mut graph, "A");
        let err = graph
            .add_node(
                Some("A".to_string()),
                String::new(),
                String::new(),
                Point2D::new(0.0, 0.0),
            )
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateId("A".to_string()));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_counter_not_rolled_back_on_collision() {
        let mut graph = Graph::new();
        // Explicit add consumes counter value 1; the generated id "N2" then
        // collides, consuming 2; the next generated id is "N3".
        add(&mut graph, "N2");
        let err = graph
            .add_node(None, String::new(), String::new(), Point2D::new(0.0, 0.0))
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateId("N2".to_string()));
        let key = graph
            .add_node(None, String::new(), String::new(), Point2D::new(0.0, 0.0))
            .unwrap();
        assert_eq!(graph.node_id(key), Some("N3"));
    }

    #[test]
    fn test_rename_node() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        graph.add_edge(a, b, "x".to_string()).unwrap();
        graph.add_edge(b, a, "y".to_string()).unwrap();

        graph.rename_node(a, "C").unwrap();

        assert_eq!(graph.node_id(a), Some("C"));
        assert_eq!(graph.get_node_key_by_id("A"), None);
        assert_eq!(graph.get_node_key_by_id("C"), Some(a));
        // All incident edges survive the rename.
        assert_eq!(graph.incident_edges(a).len(), 2);
        check_consistency(&graph);
    }

    #[test]
    fn test_rename_node_to_same_id_is_noop() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        graph.rename_node(a, "A").unwrap();
        assert_eq!(graph.get_node_key_by_id("A"), Some(a));
    }

    #[test]
    fn test_rename_node_duplicate_rejected() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        add(&mut graph, "B");
        let err = graph.rename_node(a, "B").unwrap_err();
        assert_eq!(err, GraphError::DuplicateId("B".to_string()));
        assert_eq!(graph.node_id(a), Some("A"));
    }

    #[test]
    fn test_rename_stale_handle() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        graph.remove_node(a).unwrap();
        assert_eq!(graph.rename_node(a, "B"), Err(GraphError::NotFound));
    }

    #[test]
    fn test_update_node() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        graph
            .update_node(a, "actor".to_string(), "renamed".to_string())
            .unwrap();
        let node = graph.get_node(a).unwrap();
        assert_eq!(node.node_type, "actor");
        assert_eq!(node.label, "renamed");
        assert_eq!(node.id, "A");
    }

    #[test]
    fn test_remove_node_cascades_incident_edges() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let c = add(&mut graph, "C");
        graph.add_edge(a, b, "ab".to_string()).unwrap();
        graph.add_edge(c, a, "ca".to_string()).unwrap();
        graph.add_edge(b, c, "bc".to_string()).unwrap();

        let removed = graph.remove_node(a).unwrap();

        assert_eq!(removed.len(), 2);
        assert!(removed.iter().any(|e| e.from == "A" && e.to == "B"));
        assert!(removed.iter().any(|e| e.from == "C" && e.to == "A"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges().all(|e| e.label == "bc"));
        check_consistency(&graph);
    }

    #[test]
    fn test_remove_node_with_self_loop() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        graph.add_edge(a, a, "loop".to_string()).unwrap();

        let removed = graph.remove_node(a).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(graph.edge_count(), 0);
        check_consistency(&graph);
    }

    #[test]
    fn test_remove_stale_node() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        graph.remove_node(a).unwrap();
        assert_eq!(graph.remove_node(a), Err(GraphError::NotFound));
    }

    #[test]
    fn test_parallel_edges_are_independent() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let e1 = graph.add_edge(a, b, "one".to_string()).unwrap();
        let e2 = graph.add_edge(a, b, "two".to_string()).unwrap();
        assert_ne!(e1, e2);

        graph.remove_edge(e1).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_label(e2), Some("two"));
    }

    #[test]
    fn test_edges_iterate_in_creation_order() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let c = add(&mut graph, "C");
        graph.add_edge(a, b, "first".to_string()).unwrap();
        let middle = graph.add_edge(b, c, "second".to_string()).unwrap();
        graph.add_edge(c, a, "third".to_string()).unwrap();
        graph.remove_edge(middle).unwrap();
        graph.add_edge(a, c, "fourth".to_string()).unwrap();

        let labels: Vec<&str> = graph.edges().map(|e| e.label).collect();
        assert_eq!(labels, vec!["first", "third", "fourth"]);
    }

    #[test]
    fn test_update_edge_label() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let e = graph.add_edge(a, b, "old".to_string()).unwrap();
        graph.update_edge_label(e, "new".to_string()).unwrap();
        assert_eq!(graph.edge_label(e), Some("new"));
    }

    #[test]
    fn test_remove_edge_twice_fails() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let e = graph.add_edge(a, b, String::new()).unwrap();
        graph.remove_edge(e).unwrap();
        assert_eq!(graph.remove_edge(e), Err(GraphError::NotFound));
    }

    #[test]
    fn test_add_edge_stale_endpoint() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        graph.remove_node(b).unwrap();
        assert_eq!(
            graph.add_edge(a, b, String::new()),
            Err(GraphError::NotFound)
        );
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut graph = Graph::new();
        graph
            .add_node(None, String::new(), String::new(), Point2D::new(0.0, 0.0))
            .unwrap();
        graph.clear();
        assert_eq!(graph.node_count(), 0);
        let key = graph
            .add_node(None, String::new(), String::new(), Point2D::new(0.0, 0.0))
            .unwrap();
        assert_eq!(graph.node_id(key), Some("N1"));
    }

    #[test]
    fn test_incident_edges_both_directions() {
        let mut graph = Graph::new();
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let ab = graph.add_edge(a, b, String::new()).unwrap();
        let ba = graph.add_edge(b, a, String::new()).unwrap();

        let incident = graph.incident_edges(a);
        assert_eq!(incident.len(), 2);
        assert!(incident.contains(&ab));
        assert!(incident.contains(&ba));
    }

    /// Mutation script for the consistency property below.
    #[derive(Debug, Clone)]
    enum Op {
        AddNode(u8),
        AddEdge(u8, u8),
        RemoveNode(u8),
        RemoveEdge(u8),
        RenameNode(u8, u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::AddNode),
            (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Op::AddEdge(a, b)),
            any::<u8>().prop_map(Op::RemoveNode),
            any::<u8>().prop_map(Op::RemoveEdge),
            (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Op::RenameNode(a, b)),
        ]
    }

    fn pick<T: Copy>(items: &[T], seed: u8) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[seed as usize % items.len()])
        }
    }

    proptest! {
        #[test]
        fn test_consistency_holds_under_any_mutation_sequence(
            ops in proptest::collection::vec(op_strategy(), 0..64)
        ) {
            let mut graph = Graph::new();
            let mut node_keys: Vec<NodeKey> = Vec::new();
            let mut edge_keys: Vec<EdgeKey> = Vec::new();

            for op in ops {
                match op {
                    Op::AddNode(seed) => {
                        let id = (seed % 8 != 0).then(|| format!("node-{seed}"));
                        if let Ok(key) = graph.add_node(
                            id,
                            "t".to_string(),
                            "l".to_string(),
                            Point2D::new(f32::from(seed), 0.0),
                        ) {
                            node_keys.push(key);
                        }
                    }
                    Op::AddEdge(a, b) => {
                        if let (Some(from), Some(to)) =
                            (pick(&node_keys, a), pick(&node_keys, b))
                            && let Ok(key) = graph.add_edge(from, to, "e".to_string())
                        {
                            edge_keys.push(key);
                        }
                    }
                    Op::RemoveNode(seed) => {
                        if let Some(key) = pick(&node_keys, seed)
                            && let Ok(removed) = graph.remove_node(key)
                        {
                            node_keys.retain(|k| *k != key);
                            edge_keys.retain(|k| !removed.iter().any(|e| e.key == *k));
                        }
                    }
                    Op::RemoveEdge(seed) => {
                        if let Some(key) = pick(&edge_keys, seed)
                            && graph.remove_edge(key).is_ok()
                        {
                            edge_keys.retain(|k| *k != key);
                        }
                    }
                    Op::RenameNode(seed, name) => {
                        if let Some(key) = pick(&node_keys, seed) {
                            let _ = graph.rename_node(key, &format!("renamed-{name}"));
                        }
                    }
                }
                check_consistency(&graph);
            }
        }
    }
}
