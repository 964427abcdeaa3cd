// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid flowchart export for diagram states.

pub mod flowchart;
mod ident;

pub use flowchart::{export_flowchart, NodeShape, FLOWCHART_HEADER};
pub use ident::sanitize_mermaid_id;
