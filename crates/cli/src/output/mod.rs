// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report formatting.

pub mod json;
pub mod text;

use std::path::Path;

use crate::runner::{Diagnosis, Outcome};

/// 1-based line numbers of the divergence in the input files, when those
/// lines exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub pattern_line: Option<usize>,
    pub text_line: Option<usize>,
}

impl Divergence {
    pub fn of(outcome: &Outcome) -> Option<Self> {
        match &outcome.diagnosis {
            Diagnosis::Match => None,
            Diagnosis::Mismatch(m) => Some(Self {
                pattern_line: m.pattern_source_line.map(|line| line + 1),
                text_line: m
                    .text_line
                    .as_ref()
                    .and(m.text_prune.lines)
                    .map(|count| count + 1),
            }),
        }
    }
}

/// Display form of a path in reports.
pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}
