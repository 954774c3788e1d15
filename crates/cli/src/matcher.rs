// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anchored multi-line matching of native-convention patterns.
//!
//! A pattern "matches" a text when some match of it starts at offset 0.
//! The match does not have to consume the whole text.
//!
//! Texts are matched as raw bytes. Captured output is not guaranteed to be
//! UTF-8, so `.` matches any byte except `\n` and `\w`, `\d`, `\s` are
//! ASCII classes. Non-ASCII literals in a pattern match their UTF-8 encoding.

use regex_automata::meta::{BuildError, Regex};
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input};

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] BuildError),
}

/// A pattern compiled in multi-line mode.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a native-convention pattern.
    ///
    /// `^` and `$` match at line boundaries; `.` never matches `\n`.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::builder()
            .syntax(
                syntax::Config::new()
                    .multi_line(true)
                    .unicode(false)
                    .utf8(false),
            )
            .build(pattern)?;
        Ok(Self { regex })
    }

    /// Returns true if the pattern matches starting at offset 0 of `text`.
    pub fn matches_start<T: ?Sized + AsRef<[u8]>>(&self, text: &T) -> bool {
        self.regex
            .is_match(Input::new(text).anchored(Anchored::Yes))
    }
}

/// Compile `pattern` and test it against the start of `text`.
pub fn match_attempt<T: ?Sized + AsRef<[u8]>>(
    pattern: &str,
    text: &T,
) -> Result<bool, PatternError> {
    Ok(CompiledPattern::compile(pattern)?.matches_start(text))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
