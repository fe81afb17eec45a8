// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

//! Flowpad core — bidirectional converter between Mermaid flowchart text and
//! the node/edge graph edited interactively in the note editor.
//!
//! The editor's text box feeds [`format::mermaid::parse_flowchart`], the
//! resulting [`model::Graph`] is edited visually, and
//! [`format::mermaid::generate_flowchart`] serializes it back into the note.

pub mod format;
pub mod layout;
pub mod model;
