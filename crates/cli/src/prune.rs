// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-prefix pruning of a failed pattern/text pair.
//!
//! Both searches are linear. Match success is not monotonic in the prefix
//! length (quantifiers and alternation can make a shorter prefix fail where
//! a longer one matches), so a bisection would not find the longest pattern
//! prefix.
//!
//! Pruning works a line at a time, so a pattern line that is a textual
//! prefix of the real output line still counts as matching:
//! `/reader/commandTimeout: 100` matches `/reader/commandTimeout: 1000`.

use crate::matcher::{CompiledPattern, PatternError};

/// Split on `\n`. A trailing newline yields a final empty line.
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// Join the first `count` lines with `\n`.
pub fn join_prefix(lines: &[&str], count: usize) -> String {
    lines[..count].join("\n")
}

/// Split captured output on `\n`, keeping its bytes as they are.
pub fn split_text_lines(text: &[u8]) -> Vec<&[u8]> {
    text.split(|&b| b == b'\n').collect()
}

/// Join the first `count` text lines with `\n`.
pub fn join_text_prefix(lines: &[&[u8]], count: usize) -> Vec<u8> {
    lines[..count].join(&b'\n')
}

/// Longest pattern prefix that matches the full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternPrune {
    /// Number of pattern lines kept.
    pub lines: usize,
    /// Total pattern lines.
    pub total_lines: usize,
    /// The kept lines joined with `\n`.
    pub prefix: String,
}

/// Shortest text prefix that satisfies a pruned pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrune {
    /// Number of text lines kept, or None if no prefix satisfied the pattern.
    pub lines: Option<usize>,
    /// Total text lines.
    pub total_lines: usize,
    /// The kept lines joined with `\n`; empty when `lines` is None.
    pub prefix: Vec<u8>,
}

/// Find the longest whole-line prefix of `pattern` that matches `text`.
///
/// Scans from the full pattern down to the empty pattern. Candidate prefixes
/// that do not compile on their own (a group or class left open across a
/// line break) count as non-matching.
pub fn prune_pattern<T: ?Sized + AsRef<[u8]>>(pattern: &str, text: &T) -> PatternPrune {
    let text = text.as_ref();
    let lines = split_lines(pattern);
    for (i, line) in lines.iter().enumerate() {
        tracing::trace!("pattern line {}: {:?}", i, line);
    }

    for count in (1..=lines.len()).rev() {
        let candidate = join_prefix(&lines, count);
        match CompiledPattern::compile(&candidate) {
            Ok(compiled) if compiled.matches_start(text) => {
                tracing::debug!(lines = count, "pattern prefix: MATCH");
                return PatternPrune {
                    lines: count,
                    total_lines: lines.len(),
                    prefix: candidate,
                };
            }
            Ok(_) => tracing::debug!(lines = count, "pattern prefix: no match"),
            Err(e) => tracing::debug!(lines = count, error = %e, "pattern prefix does not compile"),
        }
    }

    PatternPrune {
        lines: 0,
        total_lines: lines.len(),
        prefix: String::new(),
    }
}

/// Find the shortest whole-line prefix of `text` that `pattern` matches.
///
/// Scans from the empty text up to the full text, compiling `pattern` once.
pub fn prune_text<T: ?Sized + AsRef<[u8]>>(
    pattern: &str,
    text: &T,
) -> Result<TextPrune, PatternError> {
    let compiled = CompiledPattern::compile(pattern)?;
    let lines = split_text_lines(text.as_ref());
    for (i, line) in lines.iter().enumerate() {
        tracing::trace!("text line {}: {:?}", i, String::from_utf8_lossy(line));
    }

    for count in 0..=lines.len() {
        let candidate = join_text_prefix(&lines, count);
        if compiled.matches_start(&candidate) {
            tracing::debug!(lines = count, "text prefix: MATCH");
            return Ok(TextPrune {
                lines: Some(count),
                total_lines: lines.len(),
                prefix: candidate,
            });
        }
        tracing::trace!(lines = count, "text prefix: no match");
    }

    Ok(TextPrune {
        lines: None,
        total_lines: lines.len(),
        prefix: Vec::new(),
    })
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
