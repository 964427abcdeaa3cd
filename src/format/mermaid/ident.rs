// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Turns an editor id into the identifier used in generated Mermaid text.
///
/// Every `-` and space becomes `_`. Nothing else is touched, so two raw ids that differ only in
/// those characters collide.
pub fn sanitize_mermaid_id(raw: &str) -> String {
    raw.chars()
        .map(|ch| if matches!(ch, '-' | ' ') { '_' } else { ch })
        .collect()
}
