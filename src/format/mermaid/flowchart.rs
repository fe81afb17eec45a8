// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use super::ident::is_mermaid_ident;

use crate::layout::grid::grid_position;
use crate::model::graph::{Direction, Edge, Graph, Node, Shape};
use crate::model::ids::{EdgeId, NodeId};

fn edge_id_from_index(index: usize) -> EdgeId {
    EdgeId::new(format!("e:{index:04}")).expect("valid edge id")
}

fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("%%")
}

fn is_subgraph_boundary(trimmed: &str) -> bool {
    trimmed.starts_with("subgraph") || trimmed == "end"
}

/// Styling directives are recognized-but-ignored syntax, not errors, so they
/// are dropped without any diagnostics. Only consulted once a line has failed
/// the edge pattern: a line that parses as an edge stays an edge even when
/// its left token happens to be `style` or `class`.
fn is_styling_directive(trimmed: &str) -> bool {
    trimmed.starts_with("style ")
        || trimmed.starts_with("class ")
        || trimmed.starts_with("classDef ")
        || trimmed.starts_with("linkStyle ")
        || trimmed.starts_with("click ")
}

fn is_stroke_char(ch: char) -> bool {
    matches!(ch, '-' | '=' | '.')
}

fn is_arrow_char(ch: char) -> bool {
    matches!(ch, '-' | '=' | '.' | '>')
}

/// A connector needs at least two stroke characters (`-->`, `---`, `-.->`,
/// `==>`, `===`, and their long variants); a lone `-` or `.` is just
/// punctuation inside a malformed token.
fn is_probable_arrow(op: &str) -> bool {
    op.chars().filter(|ch| is_stroke_char(*ch)).count() >= 2
}

/// Split `line` at its first arrow operator found outside bracketed labels,
/// returning `(lhs, op, rhs)`.
fn split_once_arrow(line: &str) -> Option<(&str, &str, &str)> {
    let mut in_label: Option<char> = None;
    let mut op_start: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        if let Some(close) = in_label {
            if ch == close {
                in_label = None;
            }
            continue;
        }

        match ch {
            '[' => in_label = Some(']'),
            '(' => in_label = Some(')'),
            '{' => in_label = Some('}'),
            _ => {}
        }

        if in_label.is_some() {
            continue;
        }

        if is_stroke_char(ch) {
            op_start = Some(idx);
            break;
        }
    }

    let start = op_start?;
    let mut end = line.len();
    for (idx, ch) in line[start..].char_indices() {
        if !is_arrow_char(ch) {
            end = start + idx;
            break;
        }
    }

    let lhs = &line[..start];
    let op = &line[start..end];
    let rhs = &line[end..];
    if lhs.trim().is_empty() || !is_probable_arrow(op) {
        return None;
    }

    Some((lhs, op, rhs))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeSpec {
    id: String,
    label: Option<String>,
    shape: Option<Shape>,
}

fn match_shaped(token: &str, shape: Shape) -> Option<NodeSpec> {
    let (open, close) = shape.delimiters();
    let open_idx = token.find(open)?;
    let id = token[..open_idx].trim_end();
    if !is_mermaid_ident(id) {
        return None;
    }
    let body = &token[open_idx + open.len()..];
    let label = body.strip_suffix(close)?;
    Some(NodeSpec {
        id: id.to_owned(),
        label: Some(label.trim().to_owned()),
        shape: Some(shape),
    })
}

/// Resolve a node token against the shape grammar, most specific first
/// (circle's two-character delimiters must win over rounded's). A token that
/// matches nothing becomes its own id and label, so resolution is total.
fn parse_node_spec(token: &str) -> NodeSpec {
    let trimmed = token.trim();

    for shape in [Shape::Circle, Shape::Diamond, Shape::Rounded, Shape::Rectangle] {
        if let Some(spec) = match_shaped(trimmed, shape) {
            return spec;
        }
    }

    // Bare identifier and raw-token fallback collapse to the same spec: the
    // token is its own id and default label.
    NodeSpec {
        id: trimmed.to_owned(),
        label: None,
        shape: None,
    }
}

/// Upsert a node into the graph arena.
///
/// A node first seen as a bare reference (label equal to its id) is upgraded
/// in place once a more specific declaration arrives; after that, later
/// conflicting declarations keep the first specific definition. New nodes take
/// the next seed grid slot in order of first appearance.
fn ensure_node(graph: &mut Graph, spec: NodeSpec) -> NodeId {
    let NodeSpec { id, label, shape } = spec;
    let node_id = NodeId::new(id.clone()).expect("node tokens are trimmed and non-empty");

    let desired_label = label.unwrap_or_else(|| id.clone());
    let desired_shape = shape.unwrap_or_default();

    let existing = graph
        .node(&node_id)
        .map(|node| (node.label().to_owned(), node.position()));
    match existing {
        None => {
            let position = grid_position(graph.nodes().len());
            graph.insert_node(Node::new_with(
                node_id.clone(),
                desired_label,
                desired_shape,
                position,
            ));
        }
        Some((existing_label, position)) => {
            if existing_label == node_id.as_str() && desired_label != id {
                graph.insert_node(Node::new_with(
                    node_id.clone(),
                    desired_label,
                    desired_shape,
                    position,
                ));
            }
        }
    }

    node_id
}

/// Parse the editor's Mermaid `flowchart` subset into a graph.
///
/// Supported:
/// - optional `flowchart`/`graph` header with a direction (`TD`, `TB`, `BT`,
///   `LR`, `RL`, case-insensitive; anything else leaves the `TD` default)
/// - comment lines starting with `%%`
/// - node declarations: `<id>`, `<id>[<label>]`, `<id>(<label>)`,
///   `<id>{<label>}`, `<id>((<label>))`
/// - edges with plain (`-->`, `---`), dotted (`-.->`, `-.-`), and thick
///   (`==>`, `===`) connectors plus long variants, optional `|<label>|`
///   after the arrow, and chains (`a --> b --> c`)
/// - `subgraph`/`end` boundaries and `style`/`class`/`classDef`/`linkStyle`/
///   `click` directives are recognized and discarded
///
/// The input is live editor text, so this never fails: unclassifiable tokens
/// degrade into raw-text nodes instead of raising an error.
pub fn parse_flowchart(input: &str) -> Graph {
    let mut graph = Graph::default();
    let mut saw_first_line = false;
    let mut edge_index = 0usize;

    for raw_line in input.lines() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || is_comment_line(trimmed) {
            continue;
        }

        if !saw_first_line {
            saw_first_line = true;
            let mut parts = trimmed.split_whitespace();
            let keyword = parts.next().unwrap_or_default();
            if matches!(keyword, "flowchart" | "graph") {
                if let Some(direction) = parts.next().and_then(Direction::from_token) {
                    graph.set_direction(direction);
                }
                // The declaration line is consumed even when its direction
                // token is unrecognized.
                continue;
            }
        }

        if is_subgraph_boundary(trimmed) {
            continue;
        }

        let Some((first_raw, first_op, tail)) = split_once_arrow(trimmed) else {
            if !is_styling_directive(trimmed) {
                ensure_node(&mut graph, parse_node_spec(trimmed));
            }
            continue;
        };

        let mut current = parse_node_spec(first_raw);
        let mut op = first_op;
        let mut rest = tail;
        let mut emitted_any = false;

        loop {
            let mut edge_label: Option<String> = None;
            let mut rhs_and_more = rest.trim_start();
            if let Some(after) = rhs_and_more.strip_prefix('|') {
                if let Some(end_idx) = after.find('|') {
                    let label = after[..end_idx].trim();
                    if !label.is_empty() {
                        edge_label = Some(label.to_owned());
                    }
                    rhs_and_more = after[end_idx + 1..].trim_start();
                }
                // An unterminated label pipe stays on the right-hand side and
                // degrades into a raw node below.
            }

            let (rhs_raw, next) = match split_once_arrow(rhs_and_more) {
                Some((rhs_raw, next_op, next_rest)) => (rhs_raw, Some((next_op, next_rest))),
                None => (rhs_and_more, None),
            };

            if rhs_raw.trim().is_empty() {
                if !emitted_any {
                    // Dangling arrow with no right-hand side: the line fails
                    // the edge pattern, so it counts as one node declaration.
                    ensure_node(&mut graph, parse_node_spec(trimmed));
                }
                break;
            }

            let rhs_spec = parse_node_spec(rhs_raw);
            let source = ensure_node(&mut graph, current.clone());
            let target = ensure_node(&mut graph, rhs_spec.clone());

            edge_index += 1;
            graph.push_edge(Edge::new_with(
                edge_id_from_index(edge_index),
                source,
                target,
                edge_label,
                op.contains('.'),
                op.contains('='),
            ));
            emitted_any = true;

            let Some((next_op, next_rest)) = next else {
                break;
            };
            current = rhs_spec;
            op = next_op;
            rest = next_rest;
        }
    }

    graph
}

fn arrow_token(edge: &Edge) -> &'static str {
    if edge.animated() {
        "-.->"
    } else if edge.emphasized() {
        "==>"
    } else {
        "-->"
    }
}

/// Full shaped syntax for a node, with one exception: a rectangle whose label
/// equals its id is emitted as the bare id. That is how bare references and
/// degenerate fallback nodes (raw source text as id) regenerate
/// byte-for-byte.
fn node_syntax(node: &Node) -> String {
    if node.shape() == Shape::Rectangle && node.label() == node.id().as_str() {
        return node.id().as_str().to_owned();
    }
    let (open, close) = node.shape().delimiters();
    format!("{}{}{}{}", node.id(), open, node.label(), close)
}

/// Edge labels ride between pipe delimiters on a single line. Parser-produced
/// labels never contain the reserved characters, but externally built graphs
/// can; replace them so the emitted text re-parses to the emitted label.
fn sanitize_edge_label(label: &str) -> String {
    label
        .chars()
        .map(|ch| match ch {
            '|' => '/',
            '\n' | '\r' => ' ',
            _ => ch,
        })
        .collect()
}

fn endpoint_syntax<'a>(node: &'a Node, defined: &mut BTreeSet<&'a NodeId>) -> String {
    if defined.insert(node.id()) {
        node_syntax(node)
    } else {
        node.id().as_str().to_owned()
    }
}

/// Serialize a graph back into flowchart text.
///
/// Total and deterministic: equal graphs (including edge order) produce
/// byte-identical output. Each endpoint's full syntax is emitted on first
/// use, bare id after; orphan nodes follow the edges in node-map order. Edge
/// styling is preserved in the arrow token (`-.->` for animated, `==>` for
/// emphasized; animated wins if an externally built edge carries both).
pub fn generate_flowchart(graph: &Graph) -> String {
    let mut lines = Vec::with_capacity(graph.edges().len() + graph.nodes().len() + 1);
    lines.push(format!("flowchart {}", graph.direction().as_str()));

    let mut defined = BTreeSet::<&NodeId>::new();
    for edge in graph.edges() {
        let (Some(source), Some(target)) = (graph.node(edge.source()), graph.node(edge.target()))
        else {
            // Only externally built graphs can dangle; drop the edge rather
            // than emit references the parser cannot resolve.
            continue;
        };

        let source_part = endpoint_syntax(source, &mut defined);
        let target_part = endpoint_syntax(target, &mut defined);

        let mut arrow = arrow_token(edge).to_owned();
        if let Some(label) = edge.label() {
            arrow.push('|');
            arrow.push_str(&sanitize_edge_label(label));
            arrow.push('|');
        }

        lines.push(format!("  {source_part} {arrow} {target_part}"));
    }

    for (node_id, node) in graph.nodes() {
        if !defined.contains(node_id) {
            lines.push(format!("  {}", node_syntax(node)));
        }
    }

    lines.join("\n")
}
