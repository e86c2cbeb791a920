/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Serializable types for diagram persistence.

use serde::{Deserialize, Serialize};

/// Persisted node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersistedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

/// Persisted edge. Endpoints are node identifiers, reconnected on load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersistedEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Full diagram snapshot: nodes, then edges in creation order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagramSnapshot {
    pub nodes: Vec<PersistedNode>,
    pub edges: Vec<PersistedEdge>,
}
