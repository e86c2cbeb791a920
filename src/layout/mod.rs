/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Initial placement for newly created nodes.
//!
//! The canvas is partitioned into a coarse grid sized so one node fits per
//! cell with padding; a new node takes the first cell no existing node
//! occupies, scanning row-major from the top-left.

use euclid::default::Point2D;
use std::collections::HashSet;

use crate::geometry::NODE_RADIUS;

/// Spacing between grid cells (and from the canvas edge).
pub const PLACEMENT_PAD: f32 = 20.0;

/// Pick a canvas position for a new node.
///
/// `existing` supplies the positions of all current nodes. The grid is at
/// least one column and one row regardless of how small the canvas is. When
/// every scanned cell is occupied the first cell is returned anyway —
/// overlapping placement is an accepted degenerate outcome, not an error.
pub fn place_new_node(
    existing: impl Iterator<Item = Point2D<f32>>,
    canvas_width: f32,
    canvas_height: f32,
) -> Point2D<f32> {
    let cell = 2.0 * NODE_RADIUS + PLACEMENT_PAD;
    let max_cols = (((canvas_width - PLACEMENT_PAD) / cell) as i32).max(1);
    let max_rows = (((canvas_height - PLACEMENT_PAD) / cell) as i32).max(1);

    let occupied: HashSet<(i32, i32)> = existing
        .map(|pos| ((pos.x / cell) as i32, (pos.y / cell) as i32))
        .collect();

    let (mut col, mut row) = (0, 0);
    'scan: for r in 0..max_rows {
        for c in 0..max_cols {
            if !occupied.contains(&(c, r)) {
                col = c;
                row = r;
                break 'scan;
            }
        }
    }

    Point2D::new(
        PLACEMENT_PAD + col as f32 * cell + NODE_RADIUS,
        PLACEMENT_PAD + row as f32 * cell + NODE_RADIUS,
    )
}
