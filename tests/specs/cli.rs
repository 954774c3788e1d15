//! Behavioral specs for the command-line surface.
//!
//! - `regmatch <TEXT> <PATTERN>` positionals
//! - `--debug <LEVEL>` log level
//! - usage errors exit 2

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn help_exits_successfully() {
    regmatch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"))
        .stdout(predicates::str::contains("<TEXT>"))
        .stdout(predicates::str::contains("<PATTERN>"));
}

#[test]
fn help_states_input_size_limit() {
    regmatch_cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicates::str::contains("refused above 10 MiB"));
}

#[test]
fn version_exits_successfully() {
    regmatch_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_positionals_is_usage_error() {
    regmatch_cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Usage:"));
}

#[test]
fn single_positional_is_usage_error() {
    regmatch_cmd().arg("output.txt").assert().code(2);
}

#[test]
fn unknown_flag_fails() {
    regmatch_cmd()
        .args(&["--unknown-flag", "a", "b"])
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unexpected|unknown|unrecognized)").unwrap());
}

#[test]
fn unknown_debug_level_fails() {
    let project = Project::new("a\n", "a");
    project.run().args(&["--debug", "LOUD"]).exits(2);
    assert!(!project.has_clean());
}

#[test]
fn debug_levels_are_accepted() {
    let project = Project::new("a\n", "a");
    for level in ["NOTSET", "DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"] {
        project.run().args(&["--debug", level]).matches();
    }
}
