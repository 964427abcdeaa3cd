// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_EDGE_TYPE: &str = "smoothstep";

/// A directed connection between two nodes.
///
/// `source` and `target` are not checked against the node list; a dangling edge is stored and
/// exported as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default = "default_edge_type")]
    pub kind: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub style: Option<Map<String, Value>>,
}

fn default_edge_type() -> String {
    DEFAULT_EDGE_TYPE.to_owned()
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind: default_edge_type(),
            animated: false,
            style: None,
        }
    }
}
