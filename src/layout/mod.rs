// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

//! Seed placement for freshly discovered nodes.
//!
//! Final on-screen coordinates belong to the editor's own layout engine; this
//! module only hands out deterministic starting positions.

pub mod grid;
