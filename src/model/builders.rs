// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::graph::{Edge, Graph, Node, Position, Shape};
use super::ids::{EdgeId, NodeId};
use crate::layout::grid::grid_position;

/// Source of fresh node/edge ids for user-added elements.
///
/// Ids combine a millisecond timestamp with a per-mint atomic counter, so
/// concurrent mints within the same millisecond still come out distinct.
#[derive(Debug, Default)]
pub struct IdMint {
    counter: AtomicU64,
}

impl IdMint {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_serial(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }

    fn timestamp_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
    }

    /// Fresh node id, e.g. `n18f3a9c21d4_0`. Letters, digits, and underscores
    /// only, so minted ids stay grammar-legal Mermaid identifiers.
    pub fn node_id(&self) -> NodeId {
        let value = format!("n{:x}_{:x}", Self::timestamp_millis(), self.next_serial());
        NodeId::new(value).expect("minted node id is non-empty")
    }

    /// Fresh edge id derived from its endpoints plus a disambiguator.
    pub fn edge_id(&self, source: &NodeId, target: &NodeId) -> EdgeId {
        let value = format!("e{}_{}_{:x}", source, target, self.next_serial());
        EdgeId::new(value).expect("minted edge id is non-empty")
    }

    /// A rectangle node with a fresh id at the given position.
    pub fn fresh_node(&self, label: impl Into<String>, position: Position) -> Node {
        Node::new_with(self.node_id(), label, Shape::default(), position)
    }

    /// An unlabeled plain edge with a fresh id.
    pub fn fresh_edge(&self, source: NodeId, target: NodeId) -> Edge {
        let id = self.edge_id(&source, &target);
        Edge::new(id, source, target)
    }
}

/// Canned Start → Process → End seed graph for "new diagram" initialization.
pub fn starter_graph(mint: &IdMint) -> Graph {
    let mut graph = Graph::default();

    let start = Node::new_with(mint.node_id(), "Start", Shape::Rounded, grid_position(0));
    let process = Node::new_with(mint.node_id(), "Process", Shape::Rectangle, grid_position(1));
    let end = Node::new_with(mint.node_id(), "End", Shape::Rounded, grid_position(2));

    let start_id = start.id().clone();
    let process_id = process.id().clone();
    let end_id = end.id().clone();

    graph.insert_node(start);
    graph.insert_node(process);
    graph.insert_node(end);

    graph.push_edge(mint.fresh_edge(start_id, process_id.clone()));
    graph.push_edge(mint.fresh_edge(process_id, end_id));

    graph
}
