// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ident::sanitize_mermaid_id;
use crate::model::DiagramState;

pub const FLOWCHART_HEADER: &str = "graph LR";
const INDENT: &str = "    ";

/// Mermaid node shape, chosen by exact match on the node's `nodeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// `[(label)]`, for data stores.
    Cylinder,
    /// `{{label}}`, for model-ish components.
    Hexagon,
    /// `{label}`, for decision points.
    Rhombus,
    /// `(label)`, everything else.
    Rounded,
}

impl NodeShape {
    pub fn for_node_type(node_type: Option<&str>) -> Self {
        match node_type {
            Some("PostgreSQL" | "MySQL" | "MongoDB" | "Redis" | "Snowflake") => Self::Cylinder,
            Some("LLM" | "VectorDB" | "ModelTraining") => Self::Hexagon,
            Some("Router" | "Filter") => Self::Rhombus,
            _ => Self::Rounded,
        }
    }

    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Cylinder => ("[(", ")]"),
            Self::Hexagon => ("{{", "}}"),
            Self::Rhombus => ("{", "}"),
            Self::Rounded => ("(", ")"),
        }
    }

    pub fn wrap(self, label: &str) -> String {
        let mut out = String::with_capacity(label.len() + 4);
        self.push_wrapped(&mut out, label);
        out
    }

    fn push_wrapped(self, out: &mut String, label: &str) {
        let (open, close) = self.delimiters();
        out.push_str(open);
        out.push_str(label);
        out.push_str(close);
    }
}

/// Renders `state` as a left-to-right Mermaid flowchart.
///
/// Sections are header, node declarations, a blank line, edges, a blank line, then fill styles,
/// each in input order. Lines are `\n`-separated with no trailing newline. Labels are emitted
/// verbatim and edge endpoints are not resolved.
pub fn export_flowchart(state: &DiagramState) -> String {
    let mut out = String::from(FLOWCHART_HEADER);

    for node in &state.nodes {
        push_line(&mut out);
        out.push_str(&sanitize_mermaid_id(&node.id));
        NodeShape::for_node_type(node.data.node_type.as_deref())
            .push_wrapped(&mut out, node.data.display_label());
    }

    out.push('\n');
    for edge in &state.edges {
        push_line(&mut out);
        out.push_str(&sanitize_mermaid_id(&edge.source));
        out.push_str(" --> ");
        out.push_str(&sanitize_mermaid_id(&edge.target));
    }

    out.push('\n');
    for node in &state.nodes {
        let Some(color) = node.data.fill_color() else {
            continue;
        };
        push_line(&mut out);
        out.push_str("style ");
        out.push_str(&sanitize_mermaid_id(&node.id));
        out.push_str(" fill:");
        out.push_str(color);
    }

    out
}

fn push_line(out: &mut String) {
    out.push('\n');
    out.push_str(INDENT);
}
