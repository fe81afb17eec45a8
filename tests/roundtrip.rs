// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use flowpad::format::mermaid::{generate_flowchart, parse_flowchart};
use flowpad::model::{Direction, Graph, NodeId, Shape};

type SemanticView = (
    BTreeMap<String, (String, Shape)>,
    BTreeMap<(String, String, Option<String>), usize>,
);

fn semantic_view(graph: &Graph) -> SemanticView {
    let nodes = graph
        .nodes()
        .iter()
        .map(|(node_id, node)| {
            (
                node_id.as_str().to_owned(),
                (node.label().to_owned(), node.shape()),
            )
        })
        .collect();

    let mut edges = BTreeMap::new();
    for edge in graph.edges() {
        *edges
            .entry((
                edge.source().as_str().to_owned(),
                edge.target().as_str().to_owned(),
                edge.label().map(str::to_owned),
            ))
            .or_insert(0usize) += 1;
    }

    (nodes, edges)
}

#[test]
fn editor_round_trip_example() {
    let input = "flowchart LR\n  Start(Begin) --> Check{OK?}\n  Check -->|yes| Done((Finish))\n";

    let graph = parse_flowchart(input);
    assert_eq!(graph.direction(), Direction::Lr);
    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.edges().len(), 2);

    let node = |id: &str| {
        graph
            .node(&NodeId::new(id).expect("node id"))
            .unwrap_or_else(|| panic!("expected node {id}"))
    };
    assert_eq!(node("Start").shape(), Shape::Rounded);
    assert_eq!(node("Start").label(), "Begin");
    assert_eq!(node("Check").shape(), Shape::Diamond);
    assert_eq!(node("Check").label(), "OK?");
    assert_eq!(node("Done").shape(), Shape::Circle);
    assert_eq!(node("Done").label(), "Finish");

    assert_eq!(graph.edges()[0].label(), None);
    assert_eq!(graph.edges()[1].label(), Some("yes"));

    let reparsed = parse_flowchart(&generate_flowchart(&graph));
    assert_eq!(semantic_view(&reparsed), semantic_view(&graph));
    assert_eq!(reparsed.direction(), Direction::Lr);
}

#[test]
fn round_trips_are_stable_across_sample_diagrams() {
    let cases = [
        "flowchart TD\nA --> B\n",
        "graph BT\nA[Start] --> B{Decide}\nB -->|yes| C((Done))\nB -->|no| A\n",
        "flowchart\nsubgraph grouped\nA --> B\nend\nstyle A fill:#f9f\n",
        "flowchart RL\nfirst -.-> second ==> third\nalone(By itself)\n",
        "no header here --> at all\n",
        "flowchart LR\nA --> B\nA --> B\nA --> B\n",
    ];

    for case in cases {
        let graph = parse_flowchart(case);
        let once = generate_flowchart(&graph);
        let reparsed = parse_flowchart(&once);

        assert_eq!(
            semantic_view(&reparsed),
            semantic_view(&graph),
            "round trip changed semantics for: {case}"
        );
        assert_eq!(
            generate_flowchart(&reparsed),
            once,
            "regeneration drifted for: {case}"
        );
    }
}
