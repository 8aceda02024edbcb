//! Recovering preprocessor defines from ninja build metadata.
//!
//! The generated `public_headers_warnings_check.ninja` carries one
//! `defines = ...` line listing the `-D` flags the build was configured
//! with. Only the first such line is honored; later ones (if the upstream
//! format ever grows any) are ignored.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::util::fs::read_to_string;

const DEFINES_PREFIX: &str = "defines = ";
const DEFINE_MARKER: &str = "-D";

/// Extract define entries (`NAME` or `NAME=VALUE`) from a metadata file.
///
/// Scans for the first line starting with `defines = `, splits its
/// remainder on whitespace, and keeps tokens carrying the `-D` marker with
/// the marker stripped. A missing file or a file without a defines line
/// yields an empty list with a warning; upstream format drift is tolerated
/// rather than fatal.
pub fn extract_defines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        warn!("build metadata not found: {}", path.display());
        return Ok(Vec::new());
    }

    let text = read_to_string(path)?;

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(DEFINES_PREFIX) {
            let defines = rest
                .split_whitespace()
                .filter_map(|tok| tok.strip_prefix(DEFINE_MARKER))
                .map(|d| d.to_string())
                .collect();
            return Ok(defines);
        }
    }

    warn!("no defines line in build metadata: {}", path.display());
    Ok(Vec::new())
}

/// Keep only defines in the Skia namespaces (`SK_` / `SKIA_`), preserving
/// their order.
pub fn filter_skia_defines(defines: Vec<String>) -> Vec<String> {
    defines
        .into_iter()
        .filter(|d| d.starts_with("SK_") || d.starts_with("SKIA_"))
        .collect()
}
