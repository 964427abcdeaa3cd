// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::edge::Edge;
use super::node::Node;
use super::validate::{validate_state, ValidationError};

/// Pan/zoom camera of the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// The whole persisted diagram: nodes, edges and viewport.
///
/// Node and edge order is display order and is preserved through storage and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramState {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

impl Default for DiagramState {
    fn default() -> Self {
        Self::empty()
    }
}

impl DiagramState {
    /// The state reported when nothing has been saved yet.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            viewport: Some(Viewport::default()),
        }
    }

    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            viewport: None,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Shape-checks an untrusted JSON document and converts it, filling in defaults.
    pub fn from_json_value(value: Value) -> Result<Self, ValidationError> {
        let value = validate_state(value)?;
        serde_json::from_value(value).map_err(|err| ValidationError::new("$", err.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
