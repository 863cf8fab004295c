// ABOUTME: Library entry point for the synthetic health export fixture generator
// ABOUTME: Builds vitals, activity, body, mobility, environment and sleep records and renders XML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Export Fixture
//!
//! Generates `comprehensive_test.xml`, a small but complete personal-health XML
//! export used to exercise importers. The document holds 52 records across
//! vitals, activity, body measurements, blood pressure, mobility, environment
//! and sleep, with timestamps offset from the moment of generation.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_export_fixture::export::generate;
//! use health_export_fixture::errors::FixtureResult;
//!
//! fn main() -> FixtureResult<()> {
//!     let summary = generate()?;
//!     println!("{}", summary.confirmation());
//!     Ok(())
//! }
//! ```

/// Fixed values: file name, sources, profile, units and schedule
pub mod constants;

/// Error type for output failures
pub mod errors;

/// Export pipeline that renders and writes the fixture
pub mod export;

/// Record generation anchored on one reference instant
pub mod generator;

/// Structured logging setup
pub mod logging;

/// Records, record types, sleep stages and the export document
pub mod models;

/// XML rendering
pub mod render;
