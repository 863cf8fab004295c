// ABOUTME: Shared helpers for fixture integration tests: pinned clock and XML element scanning
// ABOUTME: Extracts elements and attributes line by line, the way export importers read them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_export_fixture`

use std::collections::BTreeMap;
use std::sync::{LazyLock, Once};

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

static INIT_LOGGER: Once = Once::new();

static ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<(\w+)((?:\s+\w+="[^"<]*")*)\s*/>$"#).unwrap());

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)="([^"]*)""#).unwrap());

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference instant shared by deterministic tests
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 26, 53))
        .unwrap()
}

/// Parse an export timestamp attribute
pub fn parse_timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|e| panic!("bad timestamp {value:?}: {e}"))
}

/// A self-closing element found on one line
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn required(&self, name: &str) -> &str {
        self.attr(name)
            .unwrap_or_else(|| panic!("{} element is missing {name}", self.name))
    }

    pub fn timestamp(&self, name: &str) -> NaiveDateTime {
        parse_timestamp(self.required(name))
    }
}

/// Parse one trimmed line as a self-closing element
pub fn parse_element(line: &str) -> Option<Element> {
    let captures = ELEMENT.captures(line.trim())?;
    let attributes = ATTRIBUTE
        .captures_iter(&captures[2])
        .map(|attribute| (attribute[1].to_owned(), attribute[2].to_owned()))
        .collect();
    Some(Element {
        name: captures[1].to_owned(),
        attributes,
    })
}

/// Lines between the root start tag and end tag
pub fn body_lines(document: &str) -> Vec<&str> {
    let lines: Vec<&str> = document.lines().collect();
    let open = lines
        .iter()
        .position(|line| line.starts_with("<HealthData"))
        .expect("root start tag");
    let close = lines
        .iter()
        .rposition(|line| *line == "</HealthData>")
        .expect("root end tag");
    lines[open + 1..close].to_vec()
}

/// Every element inside the root, failing on any line that is not one
pub fn body_elements(document: &str) -> Vec<Element> {
    body_lines(document)
        .into_iter()
        .map(|line| parse_element(line).unwrap_or_else(|| panic!("malformed line: {line}")))
        .collect()
}

/// `Record` elements only
pub fn records(document: &str) -> Vec<Element> {
    body_elements(document)
        .into_iter()
        .filter(|element| element.name == "Record")
        .collect()
}
