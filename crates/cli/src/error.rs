// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Regmatch error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The golden pattern does not compile after normalization
    #[error("pattern error: {}: {message}", .path.display())]
    Pattern { path: PathBuf, message: String },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Result type using regmatch Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Text matched the pattern
    Match = 0,
    /// Text did not match; a clean pattern was written
    Mismatch = 1,
    /// Malformed pattern or usage error
    ConfigError = 2,
    /// I/O error or oversized input
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Pattern { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::FileTooLarge { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
