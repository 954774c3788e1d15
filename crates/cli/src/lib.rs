// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnose why captured output fails to match a golden multi-line pattern.
//!
//! On mismatch the pattern is pruned to its longest whole-line prefix that
//! still matches the text, the text is pruned to its shortest whole-line
//! prefix satisfying that pattern, and the two are spliced into a "clean"
//! pattern that isolates the point of divergence.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod matcher;
pub mod output;
pub mod prune;
pub mod reader;
pub mod runner;
pub mod synth;

pub use cli::Cli;
pub use config::{LogLevel, OutputFormat, RunConfig};
pub use error::{Error, ExitCode, Result};
pub use matcher::{CompiledPattern, PatternError};
pub use prune::{PatternPrune, TextPrune, prune_pattern, prune_text};
pub use runner::{Diagnosis, Mismatch, Outcome, diagnose, run};

#[cfg(test)]
pub mod test_utils;
