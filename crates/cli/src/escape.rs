// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape convention normalization for golden patterns.
//!
//! Golden patterns are written with brackets and parens inverted relative to
//! the regex dialect, since literal `()` and `[]` are common in captured
//! output:
//! - bare `[`, `]`, `(`, `)` are literal characters
//! - `\[`, `\]`, `\(`, `\)` are regex metacharacters
//!
//! A backslash at the end of a line continues the logical line.

use std::sync::LazyLock;

use regex::Regex;

/// Symbol pairs exchanged between the authoring and native conventions.
pub const SWAPPED_PAIRS: [(&str, &str); 4] = [(r"\[", "["), (r"\]", "]"), (r"\(", "("), (r"\)", ")")];

/// Backslash followed by a line break.
#[allow(clippy::expect_used)]
static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[\r\n]").expect("valid regex"));

/// Rewrite an authored pattern into the engine's native convention.
///
/// Each pair in [`SWAPPED_PAIRS`] is swapped over the whole string, then
/// line continuations are spliced.
pub fn normalize(raw: &str) -> String {
    let mut pattern = raw.to_string();
    for (escaped, bare) in SWAPPED_PAIRS {
        pattern = swap(&pattern, escaped, bare);
    }
    strip_continuations(&pattern)
}

/// Exchange every occurrence of `a` with `b` and vice versa.
///
/// Goes through a sentinel so the second replacement never sees the output
/// of the first: `a -> sentinel`, `b -> a`, `sentinel -> b`.
pub fn swap(s: &str, a: &str, b: &str) -> String {
    let sentinel = sentinel_for(s);
    s.replace(a, &sentinel)
        .replace(b, a)
        .replace(&sentinel, b)
}

/// Remove each backslash-newline pair, joining the two lines.
pub fn strip_continuations(s: &str) -> String {
    CONTINUATION.replace_all(s, "").into_owned()
}

/// Map a 0-based line of the normalized pattern back to the 0-based line of
/// `raw` it starts on.
///
/// Only continuations ending in `\n` change the line count; the bracket and
/// paren swaps never do.
pub fn source_line(raw: &str, normalized_line: usize) -> usize {
    let mut logical = 0;
    let mut at_start = true;
    for (physical, line) in raw.split('\n').enumerate() {
        if at_start && logical == normalized_line {
            return physical;
        }
        at_start = !line.ends_with('\\');
        if at_start {
            logical += 1;
        }
    }
    normalized_line
}

/// Pick a token that does not occur anywhere in `s`.
fn sentinel_for(s: &str) -> String {
    let mut sentinel = String::from('\u{E000}');
    while s.contains(&sentinel) {
        sentinel.push('\u{E001}');
    }
    sentinel
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
