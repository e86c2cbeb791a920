/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Pure edge-geometry derivation.
//!
//! Everything a renderer needs to draw a directed edge between two circular
//! nodes: endpoints trimmed to the circle boundaries, a label anchor offset
//! perpendicular from the line, and the two arrowhead wing points. Stateless;
//! recomputed on demand whenever an endpoint moves or an edge is created.

use euclid::default::{Point2D, Vector2D};

/// Radius of a drawn node circle, in canvas units.
pub const NODE_RADIUS: f32 = 25.0;

/// Perpendicular distance from the edge line to its label anchor.
pub const LABEL_OFFSET: f32 = 12.0;

/// Length of each arrowhead wing.
pub const ARROW_LENGTH: f32 = 10.0;

/// Half-angle of the arrowhead "V", in radians.
pub const ARROW_HALF_ANGLE: f32 = 25.0 * std::f32::consts::PI / 180.0;

/// Derived render geometry for one directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    /// Line start, on the source node's boundary.
    pub start: Point2D<f32>,

    /// Line end, on the destination node's boundary. Also the arrowhead tip.
    pub end: Point2D<f32>,

    /// Anchor for the edge label: midpoint of the untrimmed centers,
    /// displaced perpendicular to the line.
    pub label_anchor: Point2D<f32>,

    /// Arrowhead wing endpoints. Each wing is a segment from `end`.
    pub arrow_left: Point2D<f32>,
    pub arrow_right: Point2D<f32>,
}

/// Compute edge geometry from the two node centers.
///
/// Coincident centers leave the direction undefined; the fixed unit
/// direction (1, 0) is substituted so every output stays finite.
pub fn edge_geometry(from: Point2D<f32>, to: Point2D<f32>, radius: f32) -> EdgeGeometry {
    let delta = to - from;
    let len = delta.length();
    let unit = if len == 0.0 {
        Vector2D::new(1.0, 0.0)
    } else {
        delta / len
    };

    let start = from + unit * radius;
    let end = to - unit * radius;

    // Label hangs off the midpoint of the centers, not of the trimmed line.
    let normal = Vector2D::new(-unit.y, unit.x);
    let label_anchor = from.lerp(to, 0.5) + normal * LABEL_OFFSET;

    let angle = unit.y.atan2(unit.x);
    let arrow_left = Point2D::new(
        end.x - ARROW_LENGTH * (angle - ARROW_HALF_ANGLE).cos(),
        end.y - ARROW_LENGTH * (angle - ARROW_HALF_ANGLE).sin(),
    );
    let arrow_right = Point2D::new(
        end.x - ARROW_LENGTH * (angle + ARROW_HALF_ANGLE).cos(),
        end.y - ARROW_LENGTH * (angle + ARROW_HALF_ANGLE).sin(),
    );

    EdgeGeometry {
        start,
        end,
        label_anchor,
        arrow_left,
        arrow_right,
    }
}

/// Drawn origin for text centered on `anchor`.
///
/// Applies to node labels (anchor = node center) and edge labels (anchor =
/// [`EdgeGeometry::label_anchor`]); recompute whenever the text or its font
/// metrics change, not only on position changes.
pub fn text_origin(anchor: Point2D<f32>, text_width: f32, text_height: f32) -> Point2D<f32> {
    Point2D::new(anchor.x - text_width / 2.0, anchor.y + text_height / 4.0)
}
