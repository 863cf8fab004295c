// ABOUTME: Integration tests for writing the export file: overwrite, errors and default location
// ABOUTME: Runs against scratch directories; the working-directory test is serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::fs;

use common::{fixed_now, init_test_logging, records};
use health_export_fixture::errors::{FixtureError, IoOperation};
use health_export_fixture::export::{generate, generate_at, write_export};
use health_export_fixture::generator::FixtureGenerator;
use health_export_fixture::models::SampleCategory;
use health_export_fixture::render::render_document;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_generate_at_writes_rendered_document() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("comprehensive_test.xml");

    let summary = generate_at(fixed_now(), &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let expected = render_document(&FixtureGenerator::new(fixed_now()).build());
    assert_eq!(written, expected);
    assert_eq!(summary.record_count, 52);
    assert_eq!(summary.bytes_written, written.len() as u64);
    assert_eq!(summary.path, path);

    let sleep = summary
        .breakdown
        .iter()
        .find(|entry| entry.category == SampleCategory::Sleep)
        .unwrap();
    assert_eq!(sleep.count, 4);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["record_count"], 52);
    assert_eq!(json["breakdown"][0]["category"], "vitals");
    assert_eq!(json["breakdown"][6]["category"], "sleep");
}

#[test]
fn test_existing_file_is_overwritten() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("comprehensive_test.xml");
    fs::write(&path, "stale contents that are much longer than nothing\n".repeat(500)).unwrap();

    generate_at(fixed_now(), &path).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    assert!(!first.contains("stale"));
    assert!(first.starts_with("<?xml"));

    let later = fixed_now() + chrono::Duration::hours(3);
    generate_at(later, &path).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_ne!(first, second);
    assert_eq!(records(&first).len(), records(&second).len());
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("comprehensive_test.xml");

    let error = generate_at(fixed_now(), &path).unwrap_err();
    match &error {
        FixtureError::Io {
            operation,
            path: failed,
            ..
        } => {
            assert_eq!(*operation, IoOperation::Create);
            assert_eq!(failed, &path);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.to_string().contains("missing"));
    assert!(!path.exists());
}

#[test]
fn test_write_export_reports_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.xml");
    let bytes = write_export(&path, "<HealthData/>\n").unwrap();
    assert_eq!(bytes, 14);
    assert_eq!(fs::read_to_string(&path).unwrap(), "<HealthData/>\n");
}

#[test]
#[serial]
fn test_generate_writes_fixed_filename_in_working_directory() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let result = generate();
    env::set_current_dir(original).unwrap();

    let summary = result.unwrap();
    assert_eq!(summary.confirmation(), "Generated comprehensive_test.xml");
    let written = fs::read_to_string(dir.path().join("comprehensive_test.xml")).unwrap();
    assert_eq!(records(&written).len(), 52);
}
