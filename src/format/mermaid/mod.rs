// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

//! The Mermaid flowchart dialect the editor reads and writes.

pub mod flowchart;
mod ident;

pub use flowchart::{generate_flowchart, parse_flowchart};
