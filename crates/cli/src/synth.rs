// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clean pattern synthesis.
//!
//! The clean pattern is the matched text prefix, byte for byte, followed by
//! the part of the pattern that was pruned away. Diffing it against the
//! original pattern shows what the pattern still expected at the point the
//! text diverged.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::prune::{PatternPrune, TextPrune};

/// Extension appended to the pattern path.
pub const CLEAN_EXTENSION: &str = "clean";

/// Build the clean pattern.
///
/// `pattern` is the full normalized pattern that `pattern_prune` was
/// computed from. Since the pruned prefix ends on a line boundary, the tail
/// starts with the `\n` separating it from the first unmatched line.
pub fn synthesize(pattern: &str, pattern_prune: &PatternPrune, text_prune: &TextPrune) -> Vec<u8> {
    let tail = pattern
        .get(pattern_prune.prefix.len()..)
        .unwrap_or_default();
    let mut clean = Vec::with_capacity(text_prune.prefix.len() + tail.len());
    clean.extend_from_slice(&text_prune.prefix);
    clean.extend_from_slice(tail.as_bytes());
    clean
}

/// Path of the clean pattern for a pattern file: `<pattern_path>.clean`.
pub fn clean_path(pattern_path: &Path) -> PathBuf {
    let mut name = OsString::from(pattern_path.as_os_str());
    name.push(".");
    name.push(CLEAN_EXTENSION);
    PathBuf::from(name)
}

/// Write (overwrite) the clean pattern.
pub fn write_clean(path: &Path, clean: &[u8]) -> Result<()> {
    std::fs::write(path, clean).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = clean.len(), "wrote clean pattern");
    Ok(())
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
