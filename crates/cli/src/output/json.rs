// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! One object per run, buffered and written at the end.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use super::Divergence;
use crate::config::RunConfig;
use crate::runner::{Diagnosis, Outcome};

/// Run report for JSON output.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub matched: bool,
    pub text_path: PathBuf,
    pub pattern_path: PathBuf,
    /// Pattern lines that matched the full text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_prefix_lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_lines: Option<usize>,
    /// Text lines needed to satisfy the matched pattern prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_prefix_lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_lines: Option<usize>,
    /// First unmatched pattern line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// 1-based line of `expected` in the pattern file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_line: Option<usize>,
    /// First text line past the matched prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// 1-based line of `actual` in the text file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_path: Option<PathBuf>,
}

impl JsonReport {
    pub fn new(config: &RunConfig, outcome: &Outcome) -> Self {
        let mut report = Self {
            matched: true,
            text_path: config.text_path.clone(),
            pattern_path: config.pattern_path.clone(),
            pattern_prefix_lines: None,
            pattern_lines: None,
            text_prefix_lines: None,
            text_lines: None,
            expected: None,
            expected_line: None,
            actual: None,
            actual_line: None,
            clean_path: outcome.clean_path.clone(),
        };
        if let Diagnosis::Mismatch(m) = &outcome.diagnosis {
            report.matched = false;
            report.pattern_prefix_lines = Some(m.pattern_prune.lines);
            report.pattern_lines = Some(m.pattern_prune.total_lines);
            report.text_prefix_lines = m.text_prune.lines;
            report.text_lines = Some(m.text_prune.total_lines);
            report.expected = m.pattern_line.clone();
            report.actual = m.text_line.clone();
            if let Some(divergence) = Divergence::of(outcome) {
                report.expected_line = divergence.pattern_line;
                report.actual_line = divergence.text_line;
            }
        }
        report
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the complete JSON report.
    pub fn write(&mut self, config: &RunConfig, outcome: &Outcome) -> std::io::Result<()> {
        let report = JsonReport::new(config, outcome);
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
