// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shallow shape checks for incoming diagram states.
//!
//! Only presence and JSON type are checked. Edge endpoints are never resolved against the node
//! list.

use serde_json::{Map, Value};
use thiserror::Error;

/// An incoming state does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid diagram state at `{path}`: {message}")]
pub struct ValidationError {
    path: String,
    message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Dotted path of the offending field, e.g. `nodes[2].data.label`. `$` is the document root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy)]
enum Expect {
    String,
    Object,
    Array,
    Bool,
    Number,
}

impl Expect {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Bool => value.is_boolean(),
            Self::Number => value.is_number(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::String => "expected a string",
            Self::Object => "expected an object",
            Self::Array => "expected an array",
            Self::Bool => "expected a boolean",
            Self::Number => "expected a number",
        }
    }
}

const NODE_DATA_OPTIONAL: &[(&str, Expect)] = &[
    ("label", Expect::String),
    ("nodeType", Expect::String),
    ("color", Expect::String),
    ("category", Expect::String),
    ("description", Expect::String),
    ("metadata", Expect::Object),
    ("borderColor", Expect::String),
    ("opacity", Expect::Number),
    ("fontSize", Expect::Number),
];

const EDGE_OPTIONAL: &[(&str, Expect)] = &[
    ("type", Expect::String),
    ("animated", Expect::Bool),
    ("style", Expect::Object),
];

/// Checks `value` against the diagram state shape.
///
/// On success the document is returned with `null` optional fields removed, so that typed
/// deserialization fills in their defaults.
pub fn validate_state(mut value: Value) -> Result<Value, ValidationError> {
    let root = as_object(&mut value, "$")?;

    let nodes = require(root, "", "nodes", Expect::Array)?;
    if let Value::Array(nodes) = nodes {
        for (idx, node) in nodes.iter_mut().enumerate() {
            validate_node(node, &format!("nodes[{idx}]"))?;
        }
    }

    let edges = require(root, "", "edges", Expect::Array)?;
    if let Value::Array(edges) = edges {
        for (idx, edge) in edges.iter_mut().enumerate() {
            validate_edge(edge, &format!("edges[{idx}]"))?;
        }
    }

    if let Some(viewport) = optional(root, "", "viewport", Expect::Object)? {
        let viewport = as_object(viewport, "viewport")?;
        for key in ["x", "y", "zoom"] {
            require(viewport, "viewport", key, Expect::Number)?;
        }
    }

    Ok(value)
}

fn validate_node(node: &mut Value, path: &str) -> Result<(), ValidationError> {
    let node = as_object(node, path)?;
    require(node, path, "id", Expect::String)?;
    require(node, path, "type", Expect::String)?;
    require(node, path, "position", Expect::Object)?;

    let data_path = join(path, "data");
    let data = as_object(require(node, path, "data", Expect::Object)?, &data_path)?;
    for &(key, expect) in NODE_DATA_OPTIONAL {
        optional(data, &data_path, key, expect)?;
    }
    Ok(())
}

fn validate_edge(edge: &mut Value, path: &str) -> Result<(), ValidationError> {
    let edge = as_object(edge, path)?;
    for key in ["id", "source", "target"] {
        require(edge, path, key, Expect::String)?;
    }
    for &(key, expect) in EDGE_OPTIONAL {
        optional(edge, path, key, expect)?;
    }
    Ok(())
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn as_object<'a>(
    value: &'a mut Value,
    path: &str,
) -> Result<&'a mut Map<String, Value>, ValidationError> {
    value
        .as_object_mut()
        .ok_or_else(|| ValidationError::new(path, Expect::Object.describe()))
}

fn require<'a>(
    object: &'a mut Map<String, Value>,
    parent: &str,
    key: &str,
    expect: Expect,
) -> Result<&'a mut Value, ValidationError> {
    let Some(value) = object.get_mut(key) else {
        return Err(ValidationError::new(join(parent, key), "field required"));
    };
    if !expect.matches(value) {
        return Err(ValidationError::new(join(parent, key), expect.describe()));
    }
    Ok(value)
}

/// Accepts a missing or `null` field (dropping the `null`), or one of the expected type.
fn optional<'a>(
    object: &'a mut Map<String, Value>,
    parent: &str,
    key: &str,
    expect: Expect,
) -> Result<Option<&'a mut Value>, ValidationError> {
    if object.get(key).is_some_and(Value::is_null) {
        object.remove(key);
        return Ok(None);
    }
    match object.get_mut(key) {
        None => Ok(None),
        Some(value) if expect.matches(value) => Ok(Some(value)),
        Some(_) => Err(ValidationError::new(join(parent, key), expect.describe())),
    }
}
