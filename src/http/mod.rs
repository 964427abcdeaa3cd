// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP surface for the browser editor.
//!
//! | method | path              | body          | response                                  |
//! |--------|-------------------|---------------|-------------------------------------------|
//! | GET    | `/`               |               | `{status, service}`                       |
//! | GET    | `/health`         |               | `{status, version, storage}`              |
//! | POST   | `/save`           | diagram state | `{status, message, nodeCount, edgeCount}` |
//! | GET    | `/load`           |               | diagram state                             |
//! | DELETE | `/clear`          |               | `{status, message}`                       |
//! | POST   | `/export/mermaid` | diagram state | `{mermaid, python}`                       |

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::store::StateFile;

pub mod error;
pub mod routes;
pub mod types;

pub use error::{ApiError, ErrorBody};

/// Shared handler state: the one store the process writes to.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<StateFile>,
}

impl AppState {
    pub fn new(store: StateFile) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid CORS origin {origin:?}: {source}")]
pub struct InvalidOrigin {
    origin: String,
    source: InvalidHeaderValue,
}

/// Routes only, without CORS or tracing layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::service_info))
        .route("/health", get(routes::health))
        .route("/save", post(routes::save_state))
        .route("/load", get(routes::load_state))
        .route("/clear", delete(routes::clear_state))
        .route("/export/mermaid", post(routes::export_mermaid))
        .with_state(state)
}

/// CORS for the listed browser origins, with credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidOrigin> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| InvalidOrigin {
                origin: origin.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// The full application: routes plus CORS and request tracing.
pub fn app(state: AppState, allowed_origins: &[String]) -> Result<Router, InvalidOrigin> {
    Ok(router(state)
        .layer(cors_layer(allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves once `signal` fires. If the signal cannot be listened for, never resolves, so the
/// server keeps running until the process is killed.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "cannot listen for shutdown signal; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
