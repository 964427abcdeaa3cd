// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;

use crate::logging::LogFormat;
use crate::store::{StateFile, WriteDurability};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "archflow",
    version,
    about = "Persists an architecture diagram to disk and exports it as Mermaid"
)]
pub struct Cli {
    /// Directory holding the saved diagram; created on first save.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Address to listen on.
    #[arg(long, value_name = "ADDR", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Browser origin allowed to call the API. Repeat for several.
    #[arg(
        long = "allowed-origin",
        value_name = "ORIGIN",
        default_values = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,

    /// Flush saved state to stable storage (fsync/sync where supported).
    #[arg(long)]
    pub durable_writes: bool,

    /// Log filter, e.g. `debug` or `info,archflow::store=trace`.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[arg(
        long,
        value_name = "FORMAT",
        value_parser = PossibleValuesParser::new(LogFormat::variants().iter().copied())
    )]
    pub log_format: Option<String>,
}

/// Resolved settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub durability: WriteDurability,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| (*s).to_owned()).collect(),
            durability: WriteDurability::default(),
        }
    }
}

impl ServerConfig {
    pub fn store(&self) -> StateFile {
        StateFile::new(&self.data_dir).with_durability(self.durability)
    }
}

impl From<&Cli> for ServerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            addr: SocketAddr::new(cli.host, cli.port),
            allowed_origins: cli.allowed_origins.clone(),
            durability: if cli.durable_writes {
                WriteDurability::Durable
            } else {
                WriteDurability::BestEffort
            },
        }
    }
}
