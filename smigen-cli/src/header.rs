//! Header rendering for the generated template header.
//!
//! The preamble and footer are fixed byte-for-byte; the body is one quoted,
//! comma-terminated literal per template entry, in source order.

/// Fixed preamble of the generated header, up to and including the opening
/// line of the TEMPLATE_SMILES declaration.
pub const HEADER_PREAMBLE: &str = "\
//
//  Copyright (C) 2023 Schrödinger, LLC
//
//   @@ All Rights Reserved @@
//  This file is part of the RDKit.
//  The contents are covered by the terms of the BSD license
//  which is included in the file license.txt, found at the root
//  of the RDKit source tree.
//
// THIS FILE IS AUTOMATICALLY GENERATED. It contains templates used
// in 2D coordinate generation. If you want to contribute to these
// templates, please refer to instructions in:
// https://github.com/rdkit/molecular_templates/blob/main/README.md
//

#include <string>
#include <vector>

// clang-format off
const std::vector<std::string> TEMPLATE_SMILES = {
";

/// Fixed closing lines of the generated header.
pub const HEADER_FOOTER: &str = "};\n// clang-format on\n";

/// Format one template entry as a header body line.
///
/// The entry is inserted verbatim; entries are assumed pre-sanitized and no
/// quote escaping is applied.
pub fn entry_line(entry: &str) -> String {
    format!("    \"{}\",\n", entry)
}

/// Render the full header for an ordered list of template entries.
///
/// Deterministic: identical input always produces identical output. An empty
/// entry list is valid and yields only the preamble and footer.
pub fn render_header(entries: &[String]) -> String {
    let mut out = String::with_capacity(
        HEADER_PREAMBLE.len() + HEADER_FOOTER.len() + entries.iter().map(|e| e.len() + 8).sum::<usize>(),
    );
    out.push_str(HEADER_PREAMBLE);
    for entry in entries {
        out.push_str(&entry_line(entry));
    }
    out.push_str(HEADER_FOOTER);
    out
}
