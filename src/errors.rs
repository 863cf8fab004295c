// ABOUTME: Error type for fixture generation: output I/O failures and logging setup
// ABOUTME: All sample data is constant, so writing the file is the only fallible step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fixture Errors
//!
//! The generator has a single real failure class: the output file could not be
//! created, written, or flushed. Errors surface immediately; there is no retry and
//! no cleanup of a partially written file.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stage of the file write that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Opening or truncating the destination
    Create,
    /// Writing document bytes
    Write,
    /// Flushing buffered bytes to disk
    Flush,
}

impl IoOperation {
    /// Verb used in error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Write => "write",
            Self::Flush => "flush",
        }
    }
}

/// Errors raised while producing the export fixture
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The output file could not be created or written
    #[error("Failed to {} {}: {source}", .operation.as_str(), .path.display())]
    Io {
        /// Stage that failed
        operation: IoOperation,
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The global tracing subscriber could not be installed
    #[error("Logging initialization failed: {reason}")]
    Logging {
        /// Why the subscriber was rejected
        reason: String,
    },
}

impl FixtureError {
    /// Wrap an I/O error with the path and stage it occurred at
    #[must_use]
    pub fn io(operation: IoOperation, path: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error came from the output file
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result alias used across the crate
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_path_and_stage() {
        let error = FixtureError::io(
            IoOperation::Create,
            Path::new("/nonexistent/comprehensive_test.xml"),
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );

        let message = error.to_string();
        assert!(message.starts_with("Failed to create /nonexistent/comprehensive_test.xml"));
        assert!(message.ends_with("no such directory"));
        assert!(error.is_io());
    }
}
