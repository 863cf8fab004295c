// ABOUTME: Data models for the synthetic health export: records, record types, sleep stages
// ABOUTME: Re-exports HealthRecord, RecordKind, QuantityType, SleepStage and HealthExport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! In-memory representation of one export document. Records are built once per
//! generation pass, rendered, then dropped.
//!
//! ## Core Models
//!
//! - `HealthRecord`: one `Record` element, quantity or category
//! - `QuantityType`: measured sample kinds with their unit and category
//! - `SleepStage`: sleep analysis category values
//! - `HealthExport`: export date, owner profile and the ordered record list

/// Quantity sample identifiers and the categories they belong to
pub mod record_type;

/// Sleep analysis stages
pub mod sleep;

/// Individual export records
pub mod health;

/// Whole-document model
pub mod export;

pub use export::{CategoryCount, ExportProfile, HealthExport};
pub use health::{HealthRecord, RecordKind, RecordSource};
pub use record_type::{QuantityType, SampleCategory};
pub use sleep::SleepStage;
