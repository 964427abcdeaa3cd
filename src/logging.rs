// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structured logging through `tracing`.
//!
//! The level comes from the `--log-level` flag, then `ARCHFLOW_LOG_LEVEL`, then `RUST_LOG`, then
//! `info`. The format comes from `--log-format`, then `ARCHFLOW_LOG_FORMAT`, then `compact`.
//!
//! ```bash
//! # Store events at debug, everything else at info
//! RUST_LOG="info,archflow::store=debug" archflow --data-dir ./data
//! ```

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Registry,
};

pub const LOG_LEVEL_ENV: &str = "ARCHFLOW_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "ARCHFLOW_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line output.
    #[default]
    Compact,
    /// Multi-line output with source locations.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log format: {0} (expected compact, pretty or json)")]
    UnknownFormat(String),
    #[error("invalid log filter {filter:?}: {source}")]
    Filter { filter: String, source: ParseError },
    #[error("cannot install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat(s.to_owned())),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

fn resolve_filter(level: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let explicit = level
        .map(str::to_owned)
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok());

    match explicit {
        Some(filter) => {
            EnvFilter::try_new(&filter).map_err(|source| LoggingError::Filter { filter, source })
        }
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

fn resolve_format(format: Option<&str>) -> Result<LogFormat, LoggingError> {
    match format
        .map(str::to_owned)
        .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
    {
        Some(format) => format.parse(),
        None => Ok(LogFormat::default()),
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(level: Option<&str>, format: Option<&str>) -> Result<(), LoggingError> {
    let filter = resolve_filter(level)?;

    match resolve_format(format)? {
        LogFormat::Compact => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_target(false)
                    .with_level(true)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init()?,
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_target(true)
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }

    Ok(())
}
