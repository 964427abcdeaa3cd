// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence of the single diagram state on disk.

pub mod state_file;

pub use state_file::{
    SaveResult, StateFile, StoreError, StoreErrorKind, WriteDurability, STATE_FILENAME,
};
