// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::{debug, info};

use crate::model::DiagramState;

pub const STATE_FILENAME: &str = "graph.json";

static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Whether a failure happened while reading or while writing the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Read,
    Write,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read diagram state at {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("stored diagram state at {path:?} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot write diagram state to {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot encode diagram state: {source}")]
    Encode { source: serde_json::Error },
    #[error("refusing to write through symlink at {path:?}")]
    SymlinkRefused { path: PathBuf },
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Read { .. } | Self::Malformed { .. } => StoreErrorKind::Read,
            Self::Write { .. } | Self::Encode { .. } | Self::SymlinkRefused { .. } => {
                StoreErrorKind::Write
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Also flushes the temp file and the rename to stable storage where the platform allows.
    Durable,
}

/// What a save wrote, for the caller to echo back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveResult {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Single-slot storage for one diagram state, kept as `graph.json` inside a data directory.
///
/// The directory is created on the first save. There is no locking: concurrent saves race and
/// the last rename wins.
#[derive(Debug, Clone)]
pub struct StateFile {
    root: PathBuf,
    durability: WriteDurability,
}

impl StateFile {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(STATE_FILENAME)
    }

    /// Returns `true` once a state has been saved and not cleared since.
    pub fn exists(&self) -> Result<bool, StoreError> {
        let path = self.path();
        match fs::metadata(&path) {
            Ok(md) => Ok(md.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    /// Replaces the stored state with `state`.
    pub fn save(&self, state: &DiagramState) -> Result<SaveResult, StoreError> {
        let mut contents =
            serde_json::to_vec_pretty(state).map_err(|source| StoreError::Encode { source })?;
        contents.push(b'\n');

        let path = self.path();
        write_atomic(&self.root, &path, &contents, self.durability)?;

        let result = SaveResult {
            node_count: state.node_count(),
            edge_count: state.edge_count(),
        };
        info!(
            path = %path.display(),
            nodes = result.node_count,
            edges = result.edge_count,
            bytes = contents.len(),
            "saved diagram state"
        );
        Ok(result)
    }

    /// Reads the stored state, or [`DiagramState::empty`] when nothing is stored.
    pub fn load(&self) -> Result<DiagramState, StoreError> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored diagram state; returning empty state");
                return Ok(DiagramState::empty());
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let state: DiagramState = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
        debug!(
            path = %path.display(),
            nodes = state.node_count(),
            edges = state.edge_count(),
            "loaded diagram state"
        );
        Ok(state)
    }

    /// Removes the stored state. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "cleared diagram state");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "nothing to clear");
                Ok(())
            }
            Err(source) => Err(StoreError::Write { path, source }),
        }
    }
}

// Extracted filesystem helpers for `StateFile`.
include!("state_file/helpers.rs");

#[cfg(test)]
mod tests;
