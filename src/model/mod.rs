// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram state model.
//!
//! A diagram is an ordered list of nodes and edges plus an optional viewport, exactly as the
//! browser editor exchanges it.

pub mod diagram;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod node;
pub mod validate;

pub use diagram::{DiagramState, Viewport};
pub use edge::{Edge, DEFAULT_EDGE_TYPE};
pub use node::{Node, NodeData, DEFAULT_FONT_SIZE, DEFAULT_OPACITY};
pub use validate::{validate_state, ValidationError};
