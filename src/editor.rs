/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Editor command surface.
//!
//! Owns the graph and the selection controller and is the single write path
//! to both: hosts feed it clicks, drag ticks, and commands, and read back
//! positions, labels, and derived edge geometry. Every command either
//! completes or rejects with the model unchanged and a displayable error.

use euclid::default::Point2D;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::geometry::{self, EdgeGeometry};
use crate::graph::{EdgeKey, Graph, GraphError, NodeKey, RemovedEdge};
use crate::layout;
use crate::persistence::{self, PersistError};
use crate::selection::{NodeSelection, SelectionController, SelectionError};

/// Errors from editor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    Graph(GraphError),
    Selection(SelectionError),
    Persist(PersistError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Graph(e) => write!(f, "{e}"),
            EditorError::Selection(e) => write!(f, "{e}"),
            EditorError::Persist(e) => write!(f, "{e}"),
        }
    }
}

impl From<GraphError> for EditorError {
    fn from(e: GraphError) -> Self {
        EditorError::Graph(e)
    }
}

impl From<SelectionError> for EditorError {
    fn from(e: SelectionError) -> Self {
        EditorError::Selection(e)
    }
}

impl From<PersistError> for EditorError {
    fn from(e: PersistError) -> Self {
        EditorError::Persist(e)
    }
}

/// Interactive diagram editor: graph, selection, and the current file.
#[derive(Default)]
pub struct DiagramEditor {
    graph: Graph,
    selection: SelectionController,
    current_path: Option<PathBuf>,
}

impl DiagramEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Read access to the selection.
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// File the diagram was last saved to or loaded from.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Display title for the host: the current file name, if any.
    pub fn title(&self) -> String {
        self.current_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Create a node, placed on the first free grid cell of the canvas.
    ///
    /// An empty or absent id gets a generated one; a duplicate id rejects
    /// the command without side effects on the graph.
    pub fn add_node(
        &mut self,
        id: Option<String>,
        node_type: &str,
        label: &str,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Result<NodeKey, EditorError> {
        let position = layout::place_new_node(
            self.graph.nodes().map(|(_, node)| node.position),
            canvas_width,
            canvas_height,
        );
        let key = self
            .graph
            .add_node(id, node_type.to_string(), label.to_string(), position)?;
        info!("node '{}' added", self.graph.node_id(key).unwrap_or_default());
        Ok(key)
    }

    /// Forward a node click to the selection protocol.
    pub fn click_node(&mut self, key: NodeKey) -> NodeSelection {
        self.selection.click_node(key)
    }

    /// Forward an edge click. The renderer maps any visual sub-part of an
    /// edge (line, arrowhead, label) to this one operation.
    pub fn click_edge(&mut self, key: EdgeKey) {
        self.selection.click_edge(key);
    }

    /// Connect the selected pair with a new directed edge, consuming the
    /// selection.
    pub fn connect_selected(&mut self, label: &str) -> Result<EdgeKey, EditorError> {
        let (from, to) = self.selection.take_pair()?;
        let key = self.graph.add_edge(from, to, label.to_string())?;
        info!(
            "edge created from '{}' to '{}'",
            self.graph.node_id(from).unwrap_or_default(),
            self.graph.node_id(to).unwrap_or_default()
        );
        Ok(key)
    }

    /// Rename and retype the primary selected node.
    pub fn update_selected_node(
        &mut self,
        new_id: &str,
        node_type: &str,
        label: &str,
    ) -> Result<(), EditorError> {
        let key = self.selection.primary().ok_or_else(|| {
            SelectionError::InvalidSelection("no node selected to update".to_string())
        })?;
        self.graph.rename_node(key, new_id)?;
        self.graph
            .update_node(key, node_type.to_string(), label.to_string())?;
        info!("node '{new_id}' updated");
        Ok(())
    }

    /// Relabel the selected edge.
    pub fn update_selected_edge_label(&mut self, label: &str) -> Result<(), EditorError> {
        let key = self.selection.selected_edge().ok_or_else(|| {
            SelectionError::InvalidSelection("no edge selected".to_string())
        })?;
        self.graph.update_edge_label(key, label.to_string())?;
        info!("edge label updated");
        Ok(())
    }

    /// Delete the primary selected node, cascading to its incident edges.
    ///
    /// Selection slots referencing the node or any removed edge are reset.
    pub fn delete_selected_node(&mut self) -> Result<Vec<RemovedEdge>, EditorError> {
        let key = self.selection.primary().ok_or_else(|| {
            SelectionError::InvalidSelection("no node selected".to_string())
        })?;
        let removed = self.graph.remove_node(key)?;
        self.selection.note_node_removed(key);
        for edge in &removed {
            self.selection.note_edge_removed(edge.key);
        }
        info!("node deleted with {} incident edges", removed.len());
        Ok(removed)
    }

    /// Delete the selected edge.
    pub fn delete_selected_edge(&mut self) -> Result<RemovedEdge, EditorError> {
        let key = self.selection.selected_edge().ok_or_else(|| {
            SelectionError::InvalidSelection("no edge selected".to_string())
        })?;
        let removed = self.graph.remove_edge(key)?;
        self.selection.note_edge_removed(key);
        info!("edge deleted");
        Ok(removed)
    }

    /// Drag tick: move a node. Incident edge geometry is derived on demand
    /// afterwards.
    pub fn move_node(&mut self, key: NodeKey, position: Point2D<f32>) -> Result<(), EditorError> {
        self.graph.set_position(key, position)?;
        Ok(())
    }

    /// Render geometry for one edge.
    pub fn edge_geometry(&self, key: EdgeKey) -> Option<EdgeGeometry> {
        let (from, to) = self.graph.edge_endpoints(key)?;
        let from = self.graph.get_node(from)?.position;
        let to = self.graph.get_node(to)?.position;
        Some(geometry::edge_geometry(from, to, geometry::NODE_RADIUS))
    }

    /// Render geometry for every edge touching a node — the recompute set
    /// for a drag tick.
    pub fn incident_edge_geometries(&self, key: NodeKey) -> Vec<(EdgeKey, EdgeGeometry)> {
        self.graph
            .incident_edges(key)
            .into_iter()
            .filter_map(|edge_key| self.edge_geometry(edge_key).map(|geom| (edge_key, geom)))
            .collect()
    }

    /// Drop the whole diagram and start over.
    pub fn new_diagram(&mut self) {
        self.graph.clear();
        self.selection.clear();
        self.current_path = None;
        info!("new diagram started");
    }

    /// Save the diagram to a file and adopt it as the current file.
    pub fn save_to_path(&mut self, path: &Path) -> Result<(), EditorError> {
        persistence::save_to_path(&self.graph, path)?;
        self.current_path = Some(path.to_path_buf());
        info!("diagram saved to {}", path.display());
        Ok(())
    }

    /// Load a diagram from a file.
    ///
    /// The file is parsed into a staging graph first; the live graph and
    /// selection are only replaced on success.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), EditorError> {
        let staged = persistence::load_from_path(path)?;
        self.graph = staged;
        self.selection.clear();
        self.current_path = Some(path.to_path_buf());
        info!("diagram loaded from {}", path.display());
        Ok(())
    }
}
