// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Silent on match. On mismatch:
//! ```text
//! regmatch: MISMATCH
//!   <pattern>:<line>: expected
//!     <first unmatched pattern line>
//!   <text>:<line>: actual
//!     <first text line past the matched prefix>
//!   wrote <pattern>.clean
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{Divergence, display_path};
use crate::color::scheme;
use crate::config::RunConfig;
use crate::runner::{Diagnosis, Outcome};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the report for one run.
    pub fn write(&mut self, config: &RunConfig, outcome: &Outcome) -> std::io::Result<()> {
        let Diagnosis::Mismatch(mismatch) = &outcome.diagnosis else {
            return Ok(());
        };
        let divergence = Divergence::of(outcome);

        self.out.set_color(&scheme::tool_name())?;
        write!(self.out, "regmatch")?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        self.out.set_color(&scheme::mismatch())?;
        write!(self.out, "MISMATCH")?;
        self.out.reset()?;
        writeln!(self.out)?;

        if let (Some(line), Some(content)) = (
            divergence.and_then(|d| d.pattern_line),
            &mismatch.pattern_line,
        ) {
            self.write_location(&display_path(&config.pattern_path), line, "expected")?;
            self.write_content(content, &scheme::expected())?;
        }

        if let (Some(line), Some(content)) =
            (divergence.and_then(|d| d.text_line), &mismatch.text_line)
        {
            self.write_location(&display_path(&config.text_path), line, "actual")?;
            self.write_content(content, &scheme::actual())?;
        }

        if let Some(path) = &outcome.clean_path {
            write!(self.out, "  wrote ")?;
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", display_path(path))?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        self.out.flush()
    }

    fn write_location(&mut self, path: &str, line: usize, label: &str) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()?;
        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}", line)?;
        self.out.reset()?;
        writeln!(self.out, ": {}", label)
    }

    fn write_content(&mut self, content: &str, spec: &termcolor::ColorSpec) -> std::io::Result<()> {
        write!(self.out, "    ")?;
        self.out.set_color(spec)?;
        write!(self.out, "{}", content)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
