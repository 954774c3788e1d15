// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::config::RunConfig;

/// Writes `output.txt` and `expected.re` into a temp directory and returns a
/// config pointing at them.
pub fn write_inputs(text: &str, pattern: &str) -> (TempDir, RunConfig) {
    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("output.txt");
    let pattern_path = dir.path().join("expected.re");
    fs::write(&text_path, text).unwrap();
    fs::write(&pattern_path, pattern).unwrap();
    (dir, RunConfig::new(text_path, pattern_path))
}
