// SPDX-FileCopyrightText: 2026 Flowpad Contributors
// SPDX-License-Identifier: MIT

use crate::model::graph::Position;

pub const GRID_COLUMNS: usize = 3;
pub const GRID_COLUMN_SPACING: i32 = 250;
pub const GRID_ROW_SPACING: i32 = 120;

/// Deterministic seed placement: nodes fill a three-column grid in order of
/// first appearance.
pub fn grid_position(index: usize) -> Position {
    let column = (index % GRID_COLUMNS) as i32;
    let row = (index / GRID_COLUMNS) as i32;
    Position::new(column * GRID_COLUMN_SPACING, row * GRID_ROW_SPACING)
}
