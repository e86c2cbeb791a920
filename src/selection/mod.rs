/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Bounded selection protocol for the diagram editor.
//!
//! Node selection holds zero, one, or two nodes and gates edge creation;
//! the edge slot is independent and always holds the most recently clicked
//! edge. Clicking an already-selected node, or any node while two are
//! selected, cycles the whole selection back to empty instead of replacing
//! a slot.

use std::fmt;

use crate::graph::{EdgeKey, NodeKey};

/// Node-selection state, bounded at two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSelection {
    Empty,
    One(NodeKey),
    Two(NodeKey, NodeKey),
}

/// Errors from selection-gated commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Command requires a selection state not currently held.
    InvalidSelection(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidSelection(msg) => write!(f, "invalid selection: {msg}"),
        }
    }
}

/// Canonical selection state.
///
/// Wraps the selected slots with a monotonic revision so consumers can
/// reason about selection changes deterministically. Holds only stable
/// handles, never entity ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    first: Option<NodeKey>,
    second: Option<NodeKey>,
    edge: Option<EdgeKey>,
    revision: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic revision incremented whenever the selection changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current node-selection state.
    pub fn state(&self) -> NodeSelection {
        match (self.first, self.second) {
            (Some(a), Some(b)) => NodeSelection::Two(a, b),
            (Some(a), None) => NodeSelection::One(a),
            _ => NodeSelection::Empty,
        }
    }

    /// First selected node — the target of update/delete commands.
    pub fn primary(&self) -> Option<NodeKey> {
        self.first
    }

    /// Currently selected edge, if any.
    pub fn selected_edge(&self) -> Option<EdgeKey> {
        self.edge
    }

    /// Apply a node click and return the resulting state.
    pub fn click_node(&mut self, key: NodeKey) -> NodeSelection {
        match (self.first, self.second) {
            (None, _) => {
                self.first = Some(key);
            }
            (Some(first), None) if first != key => {
                self.second = Some(key);
            }
            // Re-click of a selected node, or a third click: full reset,
            // edge slot included.
            _ => {
                self.first = None;
                self.second = None;
                self.edge = None;
            }
        }
        self.revision = self.revision.saturating_add(1);
        self.state()
    }

    /// Apply an edge click: the edge slot always takes the clicked edge,
    /// independent of node-selection state.
    pub fn click_edge(&mut self, key: EdgeKey) {
        self.edge = Some(key);
        self.revision = self.revision.saturating_add(1);
    }

    /// Consume the selected pair for edge creation.
    ///
    /// Only valid with exactly two nodes selected; success resets the whole
    /// selection back to empty.
    pub fn take_pair(&mut self) -> Result<(NodeKey, NodeKey), SelectionError> {
        match (self.first, self.second) {
            (Some(from), Some(to)) => {
                self.first = None;
                self.second = None;
                self.edge = None;
                self.revision = self.revision.saturating_add(1);
                Ok((from, to))
            }
            _ => Err(SelectionError::InvalidSelection(
                "edge creation requires two selected nodes".to_string(),
            )),
        }
    }

    /// Reset every slot.
    pub fn clear(&mut self) {
        if self.first.is_none() && self.second.is_none() && self.edge.is_none() {
            return;
        }
        self.first = None;
        self.second = None;
        self.edge = None;
        self.revision = self.revision.saturating_add(1);
    }

    /// Drop a deleted node from whichever slot holds it. A surviving second
    /// selection shifts into the first slot so the state machine stays
    /// well-formed.
    pub fn note_node_removed(&mut self, key: NodeKey) {
        let mut changed = false;
        if self.second == Some(key) {
            self.second = None;
            changed = true;
        }
        if self.first == Some(key) {
            self.first = self.second.take();
            changed = true;
        }
        if changed {
            self.revision = self.revision.saturating_add(1);
        }
    }

    /// Drop a deleted edge from the edge slot.
    pub fn note_edge_removed(&mut self, key: EdgeKey) {
        if self.edge == Some(key) {
            self.edge = None;
            self.revision = self.revision.saturating_add(1);
        }
    }
}
