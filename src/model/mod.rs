// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

//! Graph data model shared by the parser, the generator, and the editor.

pub mod builders;
pub mod graph;
pub mod ids;

pub use builders::{starter_graph, IdMint};
pub use graph::{Direction, Edge, Graph, Node, Position, Shape};
pub use ids::{EdgeId, Id, IdError, NodeId};
