// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Archflow: local backend for the architecture diagram editor.
//!
//! Keeps one diagram state on disk and turns diagram states into Mermaid flowcharts.

pub mod config;
pub mod format;
pub mod http;
pub mod logging;
pub mod model;
pub mod store;
