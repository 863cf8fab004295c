// ABOUTME: Health record model: one quantity or category sample with its source and interval
// ABOUTME: Encodes the quantity/category split that decides which attributes get rendered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDateTime};

use super::record_type::{QuantityType, SampleCategory};
use super::sleep::{SleepStage, SLEEP_ANALYSIS_IDENTIFIER};
use crate::constants::{schedule, sources};

/// What a record measures
///
/// Quantity records carry a numeric value and a unit. Category records carry an
/// enumerated value and no unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordKind {
    /// Numeric sample such as heart rate or body mass
    Quantity {
        /// Sample type, which also fixes the unit
        quantity_type: QuantityType,
        /// Measured value in the type's unit
        value: f64,
    },
    /// Enumerated sleep analysis interval
    Category {
        /// Sleep stage recorded for the interval
        stage: SleepStage,
    },
}

impl RecordKind {
    /// `type` attribute value
    #[must_use]
    pub const fn type_identifier(&self) -> &'static str {
        match self {
            Self::Quantity { quantity_type, .. } => quantity_type.identifier(),
            Self::Category { .. } => SLEEP_ANALYSIS_IDENTIFIER,
        }
    }

    /// `unit` attribute value, absent for category records
    #[must_use]
    pub const fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Quantity { quantity_type, .. } => Some(quantity_type.unit()),
            Self::Category { .. } => None,
        }
    }

    /// `value` attribute text
    ///
    /// Numbers use the shortest round-trip form, so `70.0` renders as `70` and
    /// `0.98` stays `0.98`.
    #[must_use]
    pub fn value_text(&self) -> String {
        match self {
            Self::Quantity { value, .. } => value.to_string(),
            Self::Category { stage } => stage.value().to_owned(),
        }
    }

    /// Category used for ordering and summaries
    #[must_use]
    pub const fn category(&self) -> SampleCategory {
        match self {
            Self::Quantity { quantity_type, .. } => quantity_type.category(),
            Self::Category { .. } => SampleCategory::Sleep,
        }
    }
}

/// Device or app that produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSource {
    /// `sourceName` attribute
    pub name: &'static str,
    /// `sourceVersion` attribute, omitted when `None`
    pub version: Option<&'static str>,
}

impl RecordSource {
    /// Source stamped on every quantity sample
    #[must_use]
    pub const fn quantity_generator() -> Self {
        Self {
            name: sources::QUANTITY_SOURCE_NAME,
            version: Some(sources::QUANTITY_SOURCE_VERSION),
        }
    }

    /// Source stamped on sleep analysis intervals
    #[must_use]
    pub const fn sleep_tracker() -> Self {
        Self {
            name: sources::SLEEP_SOURCE_NAME,
            version: None,
        }
    }
}

/// One `Record` element of the export
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRecord {
    /// Quantity or category payload
    pub kind: RecordKind,
    /// Producing source
    pub source: RecordSource,
    /// When the sample was written to the store
    pub creation_date: NaiveDateTime,
    /// Interval start
    pub start_date: NaiveDateTime,
    /// Interval end, never before `start_date`
    pub end_date: NaiveDateTime,
}

impl HealthRecord {
    /// Quantity sample covering a fixed five-minute interval from `start`
    #[must_use]
    pub fn quantity(quantity_type: QuantityType, value: f64, start: NaiveDateTime) -> Self {
        Self {
            kind: RecordKind::Quantity {
                quantity_type,
                value,
            },
            source: RecordSource::quantity_generator(),
            creation_date: start,
            start_date: start,
            end_date: start + Duration::minutes(schedule::QUANTITY_SAMPLE_MINUTES),
        }
    }

    /// Sleep interval of `length` starting at `start`, created at `created`
    #[must_use]
    pub fn sleep(
        stage: SleepStage,
        start: NaiveDateTime,
        length: Duration,
        created: NaiveDateTime,
    ) -> Self {
        Self {
            kind: RecordKind::Category { stage },
            source: RecordSource::sleep_tracker(),
            creation_date: created,
            start_date: start,
            end_date: start + length,
        }
    }

    /// Length of the recorded interval
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    /// `type` attribute value
    #[must_use]
    pub const fn type_identifier(&self) -> &'static str {
        self.kind.type_identifier()
    }

    /// `unit` attribute value, absent for category records
    #[must_use]
    pub const fn unit(&self) -> Option<&'static str> {
        self.kind.unit()
    }

    /// `value` attribute text
    #[must_use]
    pub fn value_text(&self) -> String {
        self.kind.value_text()
    }

    /// Category used for ordering and summaries
    #[must_use]
    pub const fn category(&self) -> SampleCategory {
        self.kind.category()
    }

    /// Whether this is a quantity sample
    #[must_use]
    pub const fn is_quantity(&self) -> bool {
        matches!(self.kind, RecordKind::Quantity { .. })
    }

    /// Sleep stage for category records
    #[must_use]
    pub const fn sleep_stage(&self) -> Option<SleepStage> {
        match self.kind {
            RecordKind::Category { stage } => Some(stage),
            RecordKind::Quantity { .. } => None,
        }
    }
}
