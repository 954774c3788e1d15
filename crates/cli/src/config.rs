// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! A [`RunConfig`] is everything a diagnostic run needs. It is built from the
//! parsed command line and handed to [`crate::runner::run`].

use std::path::PathBuf;

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

/// Log verbosity, named after the usual severity levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Defer to the `REGMATCH_LOG` environment filter
    #[default]
    #[value(name = "notset", alias = "NOTSET")]
    NotSet,
    #[value(alias = "DEBUG")]
    Debug,
    #[value(alias = "INFO")]
    Info,
    #[value(aliases = ["WARNING", "warn"])]
    Warning,
    #[value(alias = "ERROR")]
    Error,
    #[value(alias = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// Level filter for an explicit level, `None` for [`LogLevel::NotSet`].
    pub fn filter(self) -> Option<LevelFilter> {
        match self {
            LogLevel::NotSet => None,
            LogLevel::Debug => Some(LevelFilter::DEBUG),
            LogLevel::Info => Some(LevelFilter::INFO),
            LogLevel::Warning => Some(LevelFilter::WARN),
            // tracing has no level above error
            LogLevel::Error | LogLevel::Critical => Some(LevelFilter::ERROR),
        }
    }
}

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for one diagnostic run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Captured output to validate.
    pub text_path: PathBuf,
    /// Golden pattern, authored in the inverted escape convention.
    pub pattern_path: PathBuf,
    pub log_level: LogLevel,
    pub output: OutputFormat,
}

impl RunConfig {
    pub fn new(text_path: impl Into<PathBuf>, pattern_path: impl Into<PathBuf>) -> Self {
        Self {
            text_path: text_path.into(),
            pattern_path: pattern_path.into(),
            log_level: LogLevel::default(),
            output: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
