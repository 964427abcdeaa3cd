// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Python snippet that displays Mermaid text in a Jupyter notebook.

const PREAMBLE: &str = "# Generated by ArchFlow\n\
from IPython.display import display, Markdown\n\
\n\
mermaid_code = \"\"\"\n";

const POSTAMBLE: &str = "\n\"\"\"\n\
\n\
display(Markdown(f\"```mermaid\\n{mermaid_code}\\n```\"))";

/// Embeds `mermaid` verbatim in a fixed IPython wrapper.
pub fn notebook_snippet(mermaid: &str) -> String {
    let mut out = String::with_capacity(PREAMBLE.len() + mermaid.len() + POSTAMBLE.len());
    out.push_str(PREAMBLE);
    out.push_str(mermaid);
    out.push_str(POSTAMBLE);
    out
}
