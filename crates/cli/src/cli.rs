// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{LogLevel, OutputFormat, RunConfig};

/// Find where captured output stops matching a golden multi-line pattern
///
/// Exits 0 on match. On mismatch, writes <PATTERN>.clean (the matched text
/// followed by the unmatched rest of the pattern) and exits 1.
#[derive(Parser)]
#[command(name = "regmatch")]
#[command(version, about)]
pub struct Cli {
    /// Captured output to check (refused above 10 MiB)
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Golden pattern file (bare []() are literal, \[\]\(\) are regex syntax)
    #[arg(value_name = "PATTERN")]
    pub pattern: PathBuf,

    /// Log level (notset defers to REGMATCH_LOG)
    #[arg(long = "debug", visible_alias = "log-level", value_name = "LEVEL", default_value = "notset")]
    pub debug: LogLevel,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            text_path: cli.text.clone(),
            pattern_path: cli.pattern.clone(),
            log_level: cli.debug,
            output: cli.output,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
