// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG, no clock).

use flowpad::model::{Edge, EdgeId, Graph, Node, NodeId, Position, Shape};

fn node_id(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn edge_id(index: usize) -> EdgeId {
    EdgeId::new(format!("e:{index:04}")).expect("edge id")
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    LargeLongLabels,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeLongLabels => "large_long_labels",
        }
    }
}

pub fn fixture(case: Case) -> Graph {
    match case {
        Case::Small => graph(4, 1, "N"),
        Case::MediumDense => graph(32, 4, "N"),
        Case::LargeLongLabels => graph(256, 2, "NodeWithAFairlyLongDescriptiveLabel"),
    }
}

/// `count` nodes, each with `fanout` outgoing edges to deterministic targets.
fn graph(count: usize, fanout: usize, label_stem: &str) -> Graph {
    let mut graph = Graph::default();

    for i in 0..count {
        let id = node_id(&format!("n{i}"));
        let shape = match i % 4 {
            0 => Shape::Rectangle,
            1 => Shape::Rounded,
            2 => Shape::Diamond,
            _ => Shape::Circle,
        };
        graph.insert_node(Node::new_with(
            id,
            format!("{label_stem}{i}"),
            shape,
            Position::new((i % 3) as i32 * 250, (i / 3) as i32 * 120),
        ));
    }

    let mut index = 0usize;
    for i in 0..count {
        for j in 1..=fanout {
            let target = (i * 7 + j * 3 + 1) % count;
            index += 1;
            let mut edge = Edge::new(
                edge_id(index),
                node_id(&format!("n{i}")),
                node_id(&format!("n{target}")),
            );
            if j % 2 == 0 {
                edge.set_label(Some(format!("hop{j}")));
            }
            edge.set_animated(i % 5 == 0);
            edge.set_emphasized(i % 7 == 0);
            graph.push_edge(edge);
        }
    }

    graph
}

pub fn checksum(graph: &Graph) -> u64 {
    let mut sum = graph.direction().as_str().len() as u64;
    for (node_id, node) in graph.nodes() {
        sum = sum
            .wrapping_mul(31)
            .wrapping_add(node_id.as_str().len() as u64)
            .wrapping_add(node.label().len() as u64);
    }
    for edge in graph.edges() {
        sum = sum
            .wrapping_mul(31)
            .wrapping_add(edge.source().as_str().len() as u64)
            .wrapping_add(edge.label().map_or(0, str::len) as u64);
    }
    sum
}
