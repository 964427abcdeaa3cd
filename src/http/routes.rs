// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Request handlers. Each one validates, then delegates to the store or the exporter.

use std::path::Path;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use super::types::{HealthResponse, SaveResponse, ServiceInfo, StatusResponse, SERVICE_NAME};
use super::AppState;
use crate::format::{export, ExportResult};
use crate::model::DiagramState;
use crate::store::StoreError;

/// Runs a store call on the blocking pool so file I/O does not stall the runtime.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

fn parse_state(payload: Result<Json<Value>, JsonRejection>) -> Result<DiagramState, ApiError> {
    let Json(value) = payload?;
    Ok(DiagramState::from_json_value(value)?)
}

/// `GET /`
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok".to_owned(),
        service: SERVICE_NAME.to_owned(),
    })
}

/// `GET /health`
pub async fn health(State(app): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        storage: storage_location(app.store.root()),
    })
}

/// The data directory as an absolute path, or as configured if it cannot be resolved.
fn storage_location(root: &Path) -> String {
    std::path::absolute(root)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

/// `POST /save`: replaces the stored diagram with the request body.
pub async fn save_state(
    State(app): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let state = parse_state(payload)?;
    let store = app.store.clone();
    let result = run_blocking(move || store.save(&state)).await?;
    Ok(Json(result.into()))
}

/// `GET /load`: the stored diagram, or the empty diagram when none is stored.
pub async fn load_state(State(app): State<AppState>) -> Result<Json<DiagramState>, ApiError> {
    let store = app.store.clone();
    let state = run_blocking(move || store.load()).await?;
    Ok(Json(state))
}

/// `DELETE /clear`
pub async fn clear_state(State(app): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let store = app.store.clone();
    run_blocking(move || store.clear()).await?;
    Ok(Json(StatusResponse::success("Graph cleared")))
}

/// `POST /export/mermaid`: renders the request body; nothing is stored.
pub async fn export_mermaid(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExportResult>, ApiError> {
    let state = parse_state(payload)?;
    let result = export(&state);
    debug!(
        nodes = state.node_count(),
        edges = state.edge_count(),
        bytes = result.mermaid.len(),
        "exported mermaid"
    );
    Ok(Json(result))
}
