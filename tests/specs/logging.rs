//! Behavioral specs for logging on stderr.
//!
//! - `--debug notset` (default) defers to `REGMATCH_LOG`, which defaults to off
//! - an explicit `--debug <LEVEL>` overrides `REGMATCH_LOG`

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn silent_by_default() {
    Project::new("a\nb\nc\n", "a\nb\nd")
        .run()
        .mismatches()
        .stderr_lacks("DEBUG")
        .stderr_lacks("INFO");
}

#[test]
fn debug_level_logs_pruning_steps() {
    Project::new("a\nb\nc\n", "a\nb\nd")
        .run()
        .args(&["--debug", "debug"])
        .mismatches()
        .stderr_has("match failed")
        .stderr_has("pattern prefix: MATCH")
        .stderr_has("text prefix: MATCH");
}

#[test]
fn info_level_logs_clean_file() {
    Project::new("a\nb\nc\n", "a\nb\nd")
        .run()
        .args(&["--debug", "info"])
        .mismatches()
        .stderr_has("wrote clean pattern")
        .stderr_lacks("DEBUG");
}

#[test]
fn env_filter_applies_when_level_not_set() {
    Project::new("a\nb\nc\n", "a\nb\nd")
        .run()
        .env("REGMATCH_LOG", "debug")
        .mismatches()
        .stderr_has("DEBUG");
}

#[test]
fn explicit_level_overrides_env_filter() {
    Project::new("a\nb\nc\n", "a\nb\nd")
        .run()
        .env("REGMATCH_LOG", "debug")
        .args(&["--debug", "error"])
        .mismatches()
        .stderr_lacks("DEBUG");
}
