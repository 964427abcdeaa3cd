// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const DEFAULT_OPACITY: u8 = 90;
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// A vertex of the diagram as the editor sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Editor coordinates. Kept verbatim; only presence is checked.
    pub position: Map<String, Value>,
    pub data: NodeData,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position: Map::new(),
            data,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position.insert("x".to_owned(), Value::from(x));
        self.position.insert("y".to_owned(), Value::from(y));
        self
    }
}

/// Display attributes of a node.
///
/// Known keys are typed; anything else the editor attaches lands in `extra` so a save/load cycle
/// hands it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Percent as the editor sends it. Any JSON number is kept verbatim.
    #[serde(default = "default_opacity")]
    pub opacity: Number,
    #[serde(default = "default_font_size")]
    pub font_size: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_opacity() -> Number {
    Number::from(DEFAULT_OPACITY)
}

fn default_font_size() -> Number {
    Number::from(DEFAULT_FONT_SIZE)
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            label: None,
            node_type: None,
            color: None,
            category: None,
            description: None,
            metadata: None,
            border_color: None,
            opacity: default_opacity(),
            font_size: default_font_size(),
            extra: Map::new(),
        }
    }
}

impl NodeData {
    pub fn new(label: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            node_type: Some(node_type.into()),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The text shown inside the node: the label, else the node type, else `"Node"`.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .or(self.node_type.as_deref())
            .unwrap_or("Node")
    }

    /// The fill color, if one is set and non-empty.
    pub fn fill_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|color| !color.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeData, DEFAULT_FONT_SIZE, DEFAULT_OPACITY};
    use serde_json::{json, Number};

    #[test]
    fn missing_optional_data_fields_take_defaults() {
        let data: NodeData = serde_json::from_value(json!({ "label": "API" })).expect("node data");
        assert_eq!(data.label.as_deref(), Some("API"));
        assert_eq!(data.node_type, None);
        assert_eq!(data.opacity, Number::from(DEFAULT_OPACITY));
        assert_eq!(data.font_size, Number::from(DEFAULT_FONT_SIZE));
        assert!(data.extra.is_empty());
    }

    #[test]
    fn unknown_data_keys_survive_a_round_trip() {
        let raw = json!({
            "label": "Cache",
            "nodeType": "Redis",
            "borderColor": "#000",
            "icon": "redis.svg",
            "tags": ["hot", "ephemeral"],
        });
        let data: NodeData = serde_json::from_value(raw).expect("node data");
        assert_eq!(data.border_color.as_deref(), Some("#000"));
        assert_eq!(data.extra.get("icon"), Some(&json!("redis.svg")));

        let back = serde_json::to_value(&data).expect("serialize");
        assert_eq!(back["icon"], json!("redis.svg"));
        assert_eq!(back["tags"], json!(["hot", "ephemeral"]));
        assert_eq!(back["nodeType"], json!("Redis"));
        assert_eq!(back["opacity"], json!(90));
        assert_eq!(back["fontSize"], json!(14));
    }

    #[test]
    fn numeric_styling_is_kept_verbatim() {
        let raw = json!({ "opacity": 87.5, "fontSize": 100000 });
        let data: NodeData = serde_json::from_value(raw.clone()).expect("node data");
        assert_eq!(data.opacity.as_f64(), Some(87.5));

        let back = serde_json::to_value(&data).expect("serialize");
        assert_eq!(back, raw);
    }

    #[test]
    fn display_label_falls_back_to_node_type_then_placeholder() {
        let mut data = NodeData::new("", "Router");
        assert_eq!(data.display_label(), "Router");

        data.node_type = None;
        assert_eq!(data.display_label(), "Node");

        data.label = Some("Gateway".to_owned());
        assert_eq!(data.display_label(), "Gateway");
    }

    #[test]
    fn empty_color_is_not_a_fill() {
        let data = NodeData::new("A", "default").with_color("");
        assert_eq!(data.fill_color(), None);
        assert_eq!(data.with_color("#fff").fill_color(), Some("#fff"));
    }

    #[test]
    fn node_type_field_serializes_as_type() {
        let node = Node::new("n1", "custom", NodeData::new("A", "default")).with_position(1.0, 2.0);
        let value = serde_json::to_value(&node).expect("serialize");
        assert_eq!(value["type"], json!("custom"));
        assert_eq!(value["position"], json!({ "x": 1.0, "y": 2.0 }));
    }
}
