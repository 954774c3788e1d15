//! Behavioral specs for matching, pruning, and the clean pattern.
//!
//! - exit 0 and no artifact on match
//! - exit 1 and `<PATTERN>.clean` on mismatch
//! - clean pattern = matched text prefix + unmatched pattern tail

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Full match
// =============================================================================

#[test]
fn full_match_exits_zero_without_clean_file() {
    let project = Project::new("a\nb\nc\n", "a\nb\nc");
    project.run().matches().stdout_eq("");
    assert!(!project.has_clean());
}

#[test]
fn empty_pattern_matches_empty_text() {
    let project = Project::new("", "");
    project.run().matches();
    assert!(!project.has_clean());
}

#[test]
fn pattern_may_match_only_a_prefix_of_the_text() {
    let project = Project::new("header\ntrailing output\n", "header");
    project.run().matches();
}

#[test]
fn leftover_clean_file_is_not_touched_on_match() {
    let project = Project::new("a\n", "a");
    std::fs::write(project.clean_path(), "old").unwrap();
    project.run().matches();
    assert_eq!(project.clean(), "old");
}

// =============================================================================
// Mismatch
// =============================================================================

#[test]
fn mismatch_writes_text_prefix_and_pattern_tail() {
    let project = Project::new("a\nb\nc\n", "a\nb\nd");
    project.run().mismatches();
    similar_asserts::assert_eq!(project.clean(), "a\nb\nd");
}

#[test]
fn clean_file_is_overwritten() {
    let project = Project::new("a\nb\nc\n", "a\nb\nd");
    std::fs::write(project.clean_path(), "stale stale stale stale").unwrap();
    project.run().mismatches();
    similar_asserts::assert_eq!(project.clean(), "a\nb\nd");
}

#[test]
fn first_line_mismatch_keeps_whole_pattern() {
    let project = Project::new("alpha\nbeta\n", "gamma\nbeta");
    project.run().mismatches();
    similar_asserts::assert_eq!(project.clean(), "gamma\nbeta");
}

#[test]
fn matched_regex_lines_become_literal_text() {
    let project = Project::new(
        "count: 17\nname: reader-1\nstate: idle\n",
        "count: \\d+\nname: \\w+-\\d\nstate: busy\n",
    );
    project.run().mismatches();
    similar_asserts::assert_eq!(project.clean(), "count: 17\nname: reader-1\nstate: busy\n");
}

// =============================================================================
// Escape convention
// =============================================================================

#[test]
fn bare_brackets_and_parens_are_literal() {
    let project = Project::new("ports: [1, 2] (ok)\n", "ports: [1, 2] (ok)");
    project.run().matches();
}

#[test]
fn escaped_brackets_and_parens_are_regex_syntax() {
    let project = Project::new("port 3 up\n", "port \\[0-9\\] \\(up|down\\)");
    project.run().matches();
}

#[test]
fn trailing_backslash_continues_line() {
    let project = Project::new("a very long line\n", "a very \\\nlong line");
    project.run().matches();
}

#[test]
fn clean_tail_uses_native_syntax() {
    let project = Project::new("id: 1\nports: [3]\n", "id: \\d\nports: [1]");
    project.run().mismatches();
    similar_asserts::assert_eq!(project.clean(), "id: 1\nports: \\[1\\]");
}

// =============================================================================
// Reader parameter dump
// =============================================================================

/// A key line that is a textual prefix of the output line
/// (`commandTimeout: 100` vs `commandTimeout: 1000`) still counts as a
/// match, so the divergence is reported one line late.
#[test]
fn prefix_collision_reports_following_line() {
    let project = Project::from_fixture("reader-params");
    project
        .run()
        .mismatches()
        .stdout_has("expected.re:11: expected")
        .stdout_has("    /reader/antenna/portList: \\[1\\]")
        .stdout_has("output.txt:10: actual")
        .stdout_has("    /reader/antenna/portList: [1, 2]");

    let clean = project.clean();
    assert!(clean.starts_with("Connecting to tmr:///dev/ttyUSB0\n"));
    assert!(clean.contains("/reader/commandTimeout: 1000\n/reader/antenna/portList: \\[1\\]\n"));
    assert!(clean.ends_with("/reader/gen2/q: .*\n"));
}

// =============================================================================
// Non-UTF-8 output
// =============================================================================

#[test]
fn clean_pattern_keeps_non_utf8_output_bytes() {
    let project = Project::new("", "temp: .*\nstate: on");
    std::fs::write(project.text_path(), b"temp: 25\xb0C\nstate: off\n").unwrap();

    project.run().mismatches();

    let clean = std::fs::read(project.clean_path()).unwrap();
    assert_eq!(clean, b"temp: 25\xb0C\nstate: on");
}

#[test]
fn dot_matches_a_non_utf8_byte() {
    let project = Project::new("", "temp: \\d+.C$\nstate: on");
    std::fs::write(project.text_path(), b"temp: 25\xb0C\nstate: on\n").unwrap();

    project.run().matches();
    assert!(!project.has_clean());
}
