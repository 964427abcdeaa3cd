// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Archflow CLI entrypoint.
//!
//! Serves the diagram API over HTTP at `http://<host>:<port>/` until Ctrl-C.

use std::error::Error;

use clap::Parser;
use tracing::info;

use archflow::config::{Cli, ServerConfig};
use archflow::http::{self, AppState};
use archflow::logging::init_logging;

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_logging(cli.log_level.as_deref(), cli.log_format.as_deref())?;

    let config = ServerConfig::from(&cli);
    let app = http::app(AppState::new(config.store()), &config.allowed_origins)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(config.addr).await?;
        info!(
            addr = %listener.local_addr()?,
            data_dir = %config.data_dir.display(),
            durability = ?config.durability,
            "archflow listening"
        );
        http::serve(listener, app, http::shutdown_on(tokio::signal::ctrl_c())).await
    })?;

    Ok(())
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("archflow: {err}");
        std::process::exit(1);
    }
}
