// ABOUTME: End-to-end export pipeline: capture now, build records, render, write the file
// ABOUTME: Writes comprehensive_test.xml in the working directory, replacing any previous file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Export pipeline
//!
//! [`generate`] is the parameterless entry point used by the binary. It captures
//! the local time once and delegates to [`generate_at`], which tests call with a
//! pinned instant and a scratch destination.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info};

use crate::constants::output::OUTPUT_FILENAME;
use crate::errors::{FixtureError, FixtureResult, IoOperation};
use crate::generator::FixtureGenerator;
use crate::models::CategoryCount;
use crate::render::render_document;

/// Outcome of one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// File that was written
    pub path: PathBuf,
    /// Number of `Record` elements in the document
    pub record_count: usize,
    /// Size of the document in bytes
    pub bytes_written: u64,
    /// Records per category, in document order
    pub breakdown: Vec<CategoryCount>,
}

impl ExportSummary {
    /// Line printed once the file is on disk
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!("Generated {}", self.path.display())
    }
}

/// Generate `comprehensive_test.xml` in the working directory
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be created or written
pub fn generate() -> FixtureResult<ExportSummary> {
    generate_at(Local::now().naive_local(), Path::new(OUTPUT_FILENAME))
}

/// Generate an export anchored on `now` and write it to `path`
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be created or written
pub fn generate_at(now: NaiveDateTime, path: &Path) -> FixtureResult<ExportSummary> {
    let export = FixtureGenerator::new(now).build();
    let breakdown = export.category_breakdown();
    for entry in &breakdown {
        info!(
            category = %entry.category,
            records = entry.count,
            "Generated records"
        );
    }

    let document = render_document(&export);
    let bytes_written = write_export(path, &document)?;

    info!(
        path = %path.display(),
        records = export.record_count(),
        bytes = bytes_written,
        "Wrote health export"
    );

    let summary = ExportSummary {
        path: path.to_path_buf(),
        record_count: export.record_count(),
        bytes_written,
        breakdown,
    };
    match serde_json::to_string(&summary) {
        Ok(json) => debug!("Export summary: {json}"),
        Err(e) => debug!(error = %e, "Export summary not serializable"),
    }
    Ok(summary)
}

/// Write `document` to `path` as UTF-8, truncating any existing file
///
/// The file handle is dropped on every return path. A failure part-way through
/// may leave a truncated file behind.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] naming the failed stage and path
pub fn write_export(path: &Path, document: &str) -> FixtureResult<u64> {
    let file =
        File::create(path).map_err(|e| FixtureError::io(IoOperation::Create, path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .map_err(|e| FixtureError::io(IoOperation::Write, path, e))?;
    writer
        .flush()
        .map_err(|e| FixtureError::io(IoOperation::Flush, path, e))?;
    Ok(document.len() as u64)
}
