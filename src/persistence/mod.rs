/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Diagram persistence as a single JSON document.
//!
//! Architecture:
//! - The graph converts to/from a `DiagramSnapshot` of plain serde types
//! - The codec renders the snapshot as pretty-printed JSON
//! - File load parses the whole document into a staging graph before any
//!   caller commits it; a parse failure leaves the prior graph untouched

pub mod types;

use std::fmt;
use std::path::Path;

use crate::graph::Graph;
use types::DiagramSnapshot;

/// Errors from the persistence codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// File read or write failed.
    Io(String),
    /// Input failed structural parsing.
    Malformed(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "I/O error: {e}"),
            PersistError::Malformed(e) => write!(f, "malformed diagram file: {e}"),
        }
    }
}

/// Serialize a graph to pretty-printed JSON.
pub fn to_json(graph: &Graph) -> Result<String, PersistError> {
    serde_json::to_string_pretty(&graph.to_snapshot())
        .map_err(|e| PersistError::Malformed(format!("{e}")))
}

/// Parse JSON into a fresh graph. The input is staged as a snapshot first;
/// nothing is constructed from a document that fails to parse.
pub fn from_json(text: &str) -> Result<Graph, PersistError> {
    let snapshot: DiagramSnapshot =
        serde_json::from_str(text).map_err(|e| PersistError::Malformed(format!("{e}")))?;
    Ok(Graph::from_snapshot(&snapshot))
}

/// Write a graph to a file.
pub fn save_to_path(graph: &Graph, path: &Path) -> Result<(), PersistError> {
    let json = to_json(graph)?;
    std::fs::write(path, json).map_err(|e| PersistError::Io(format!("{e}")))
}

/// Read a graph from a file.
pub fn load_from_path(path: &Path) -> Result<Graph, PersistError> {
    let text = std::fs::read_to_string(path).map_err(|e| PersistError::Io(format!("{e}")))?;
    from_json(&text)
}
