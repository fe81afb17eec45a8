// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};

/// Layout flow axis declared by the diagram header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TD")]
    Td,
    #[serde(rename = "TB")]
    Tb,
    #[serde(rename = "BT")]
    Bt,
    #[serde(rename = "LR")]
    Lr,
    #[serde(rename = "RL")]
    Rl,
}

impl Direction {
    /// Case-insensitive parse of a header direction token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "TD" => Some(Self::Td),
            "TB" => Some(Self::Tb),
            "BT" => Some(Self::Bt),
            "LR" => Some(Self::Lr),
            "RL" => Some(Self::Rl),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Td => "TD",
            Self::Tb => "TB",
            Self::Bt => "BT",
            Self::Lr => "LR",
            Self::Rl => "RL",
        }
    }
}

/// Node shape, each with its own Mermaid delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rectangle,
    Rounded,
    Diamond,
    Circle,
}

impl Shape {
    /// Opening/closing delimiter pair.
    ///
    /// Single source of truth for the shape grammar; consulted by both the
    /// parser and the generator so a `{x}` parse regenerates as `{x}`.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Rectangle => ("[", "]"),
            Self::Rounded => ("(", ")"),
            Self::Diamond => ("{", "}"),
            Self::Circle => ("((", "))"),
        }
    }
}

/// Advisory screen coordinates; never semantically meaningful to parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A labeled, shaped vertex in the flowchart graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    label: String,
    #[serde(default)]
    shape: Shape,
    #[serde(default)]
    position: Position,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            shape: Shape::default(),
            position: Position::default(),
        }
    }

    pub fn new_with(id: NodeId, label: impl Into<String>, shape: Shape, position: Position) -> Self {
        Self {
            id,
            label: label.into(),
            shape,
            position,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// A directed connection between two nodes, optionally labeled and styled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    animated: bool,
    #[serde(default)]
    emphasized: bool,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            label: None,
            animated: false,
            emphasized: false,
        }
    }

    pub fn new_with(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        label: Option<String>,
        animated: bool,
        emphasized: bool,
    ) -> Self {
        Self {
            id,
            source,
            target,
            label,
            animated,
            emphasized,
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn emphasized(&self) -> bool {
        self.emphasized
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    pub fn set_emphasized(&mut self, emphasized: bool) {
        self.emphasized = emphasized;
    }
}

/// Node set plus ordered edge list plus layout direction.
///
/// Node insertion order carries no meaning (the map keeps them sorted by id,
/// which also gives the generator a deterministic orphan order); edge order is
/// preserved because it drives generated line order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    #[serde(default)]
    direction: Direction,
}

impl Graph {
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Insert a node keyed by its own id, replacing any previous entry.
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id().clone(), node);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}
