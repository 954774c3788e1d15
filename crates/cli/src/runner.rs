// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic run: normalize, match, and on mismatch prune and synthesize.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::{Error, ExitCode, Result};
use crate::escape;
use crate::matcher::{self, PatternError};
use crate::prune::{self, PatternPrune, TextPrune};
use crate::reader::FileReader;
use crate::synth;

/// Outcome of checking a text against a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    /// The full pattern matches the start of the text.
    Match,
    /// The pattern failed; the pruning results locate the divergence.
    Mismatch(Mismatch),
}

/// Where a text diverged from a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub pattern_prune: PatternPrune,
    pub text_prune: TextPrune,
    /// First pattern line past the matched prefix (normalized syntax).
    pub pattern_line: Option<String>,
    /// 0-based line of the pattern file where `pattern_line` starts.
    pub pattern_source_line: Option<usize>,
    /// First text line past the matched prefix, decoded for display.
    pub text_line: Option<String>,
    /// Matched text prefix followed by the unmatched pattern tail.
    pub clean: Vec<u8>,
}

/// Check `text` against an authored pattern.
///
/// Fails only when the normalized pattern does not compile. Prune results
/// of zero lines are valid outcomes, not errors.
pub fn diagnose<T: ?Sized + AsRef<[u8]>>(
    raw_pattern: &str,
    text: &T,
) -> std::result::Result<Diagnosis, PatternError> {
    let text = text.as_ref();
    let pattern = escape::normalize(raw_pattern);
    tracing::debug!(pattern = ?pattern, "normalized pattern");

    if matcher::match_attempt(&pattern, text)? {
        tracing::debug!("full pattern matches");
        return Ok(Diagnosis::Match);
    }
    tracing::debug!("match failed");

    let pattern_prune = prune::prune_pattern(&pattern, text);
    tracing::debug!(prefix = ?pattern_prune.prefix, lines = pattern_prune.lines, "pruned pattern");
    let text_prune = prune::prune_text(&pattern_prune.prefix, text)?;
    tracing::debug!(
        prefix = ?String::from_utf8_lossy(&text_prune.prefix),
        lines = ?text_prune.lines,
        "pruned text"
    );

    let pattern_line = prune::split_lines(&pattern)
        .get(pattern_prune.lines)
        .map(|line| line.to_string());
    let pattern_source_line = pattern_line
        .as_ref()
        .map(|_| escape::source_line(raw_pattern, pattern_prune.lines));
    let text_line = text_prune.lines.and_then(|count| {
        prune::split_text_lines(text)
            .get(count)
            .map(|line| String::from_utf8_lossy(line).into_owned())
    });
    let clean = synth::synthesize(&pattern, &pattern_prune, &text_prune);

    Ok(Diagnosis::Mismatch(Mismatch {
        pattern_prune,
        text_prune,
        pattern_line,
        pattern_source_line,
        text_line,
        clean,
    }))
}

/// Result of a diagnostic run.
#[derive(Debug)]
pub struct Outcome {
    pub diagnosis: Diagnosis,
    /// Where the clean pattern was written, on mismatch.
    pub clean_path: Option<PathBuf>,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self.diagnosis {
            Diagnosis::Match => ExitCode::Match,
            Diagnosis::Mismatch(_) => ExitCode::Mismatch,
        }
    }
}

/// Run one diagnostic: read both inputs, diagnose, and on mismatch write
/// `<pattern_path>.clean`.
pub fn run(config: &RunConfig) -> Result<Outcome> {
    let reader = FileReader::new();
    let text = reader.read_bytes(&config.text_path)?;
    let raw_pattern = reader.read_to_string(&config.pattern_path)?;

    let diagnosis = diagnose(&raw_pattern, &text).map_err(|e| Error::Pattern {
        path: config.pattern_path.clone(),
        message: e.to_string(),
    })?;

    let clean_path = match &diagnosis {
        Diagnosis::Match => None,
        Diagnosis::Mismatch(mismatch) => {
            let path = synth::clean_path(&config.pattern_path);
            synth::write_clean(&path, &mismatch.clean)?;
            Some(path)
        }
    };

    Ok(Outcome {
        diagnosis,
        clean_path,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
