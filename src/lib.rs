/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Framework-agnostic node-link diagram editor core.
//!
//! Core structures:
//! - [`Graph`]: diagram container backed by petgraph::StableGraph — typed,
//!   labeled nodes with mutable unique identifiers; directed, labeled edges
//! - [`SelectionController`]: bounded two-node + one-edge selection protocol
//!   gating which commands are valid
//! - [`DiagramEditor`]: the command surface and single write path, combining
//!   selection and graph mutation
//! - [`EdgeGeometry`]: derived render geometry — endpoints trimmed to the
//!   node boundary, perpendicular label anchor, arrowhead wings
//!
//! The rendering surface, input handling, and file dialogs are external
//! collaborators: hosts feed clicks, drag ticks, and commands in, and read
//! positions, labels, and geometry back out. Persistence is a single JSON
//! document of nodes and edges, reconnected by node identifier on load.

pub mod editor;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod persistence;
pub mod selection;

pub use editor::{DiagramEditor, EditorError};
pub use geometry::{EdgeGeometry, edge_geometry, text_origin};
pub use graph::{EdgeKey, EdgeView, Graph, GraphError, Node, NodeKey, RemovedEdge};
pub use persistence::PersistError;
pub use selection::{NodeSelection, SelectionController, SelectionError};
