// ABOUTME: Fixture generator that turns the sample plan and sleep session into export records
// ABOUTME: Anchors every timestamp on one reference instant captured by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fixture Generator
//!
//! Builds the in-memory [`HealthExport`] for one generation pass. The reference
//! instant is passed in rather than read per record, so all offsets within a run
//! are measured from the same moment and tests can pin it.
//!
//! Quantity samples start `offset` minutes before `now` and last five minutes.
//! The sleep session starts ten hours before `now`.

/// Quantity sample series
pub mod samples;

/// Sleep session layout
pub mod sleep;

use chrono::{NaiveDateTime, SubsecRound};
use tracing::debug;

use crate::models::{HealthExport, HealthRecord};
pub use samples::{quantity_plan, SampleSeries, SeriesValue};
pub use sleep::SleepSessionPlan;

/// Builds export records relative to a fixed reference instant
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    now: NaiveDateTime,
    plan: Vec<SampleSeries>,
    sleep: SleepSessionPlan,
}

impl FixtureGenerator {
    /// Generator anchored on `now`, truncated to whole seconds
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: now.trunc_subsecs(0),
            plan: quantity_plan(),
            sleep: SleepSessionPlan::default(),
        }
    }

    /// Reference instant every record is offset from
    #[must_use]
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// All quantity records in output order
    #[must_use]
    pub fn quantity_records(&self) -> Vec<HealthRecord> {
        self.plan
            .iter()
            .flat_map(|series| {
                debug!(
                    record_type = %series.quantity_type,
                    count = series.count,
                    "Expanding sample series"
                );
                series.records(self.now)
            })
            .collect()
    }

    /// In-bed interval followed by the core, deep and REM phases
    #[must_use]
    pub fn sleep_records(&self) -> Vec<HealthRecord> {
        self.sleep.records(self.now)
    }

    /// Complete export document
    #[must_use]
    pub fn build(&self) -> HealthExport {
        let mut records = self.quantity_records();
        records.extend(self.sleep_records());
        HealthExport::new(self.now, records)
    }
}
