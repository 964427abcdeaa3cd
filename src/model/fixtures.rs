// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::diagram::{DiagramState, Viewport};
use super::edge::Edge;
use super::node::{Node, NodeData};

/// Users table feeding an API: one colored cylinder, one plain node, one edge.
pub(crate) fn users_api() -> DiagramState {
    let users = Node::new("n1", "custom", NodeData::new("Users", "PostgreSQL").with_color("#336"))
        .with_position(0.0, 0.0);
    let api = Node::new("n2", "custom", NodeData::new("API", "default")).with_position(240.0, 0.0);

    DiagramState::new(vec![users, api], vec![Edge::new("e1", "n1", "n2")])
}

/// A retrieval pipeline touching every shape family, with ids that need sanitizing.
pub(crate) fn rag_pipeline() -> DiagramState {
    let nodes = vec![
        Node::new("ingest-api", "custom", NodeData::new("Ingest", "API")).with_position(0.0, 0.0),
        Node::new("vector db", "custom", NodeData::new("Embeddings", "VectorDB").with_color("#fce"))
            .with_position(200.0, 0.0),
        Node::new("route-1", "custom", NodeData::new("Route", "Router")).with_position(400.0, 0.0),
        Node::new("llm", "custom", NodeData::new("GPT", "LLM").with_color("#efe"))
            .with_position(600.0, 0.0),
        Node::new("cache", "custom", NodeData::new("Cache", "Redis")).with_position(400.0, 200.0),
    ];
    let mut animated = Edge::new("e3", "route-1", "llm");
    animated.animated = true;
    let edges = vec![
        Edge::new("e1", "ingest-api", "vector db"),
        Edge::new("e2", "vector db", "route-1"),
        animated,
        Edge::new("e4", "route-1", "cache"),
    ];

    DiagramState::new(nodes, edges).with_viewport(Viewport {
        x: 12.5,
        y: -40.0,
        zoom: 0.8,
    })
}
