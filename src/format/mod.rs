// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text exports of a diagram state.

use serde::{Deserialize, Serialize};

use crate::model::DiagramState;

pub mod mermaid;
pub mod notebook;

/// Mermaid text for a diagram plus the notebook snippet that displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    pub mermaid: String,
    pub python: String,
}

/// Pure export of `state`; identical input yields byte-identical output.
pub fn export(state: &DiagramState) -> ExportResult {
    let mermaid = mermaid::export_flowchart(state);
    let python = notebook::notebook_snippet(&mermaid);
    ExportResult { mermaid, python }
}
