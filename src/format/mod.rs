// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

//! Diagram text format parsing/generation.

pub mod mermaid;
