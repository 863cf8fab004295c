// ABOUTME: Sleep session layout: one in-bed interval containing chained core, deep and REM phases
// ABOUTME: Each asleep phase starts exactly when the previous one ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDateTime};

use crate::constants::schedule;
use crate::models::{HealthRecord, SleepStage};

/// Shape of the synthetic night
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepSessionPlan {
    /// How long before generation the session begins
    pub started_ago: Duration,
    /// Time in bed
    pub in_bed: Duration,
    /// Delay between getting into bed and the first asleep phase
    pub latency: Duration,
    /// Asleep phases in order with their lengths
    pub phases: [(SleepStage, Duration); 3],
}

impl Default for SleepSessionPlan {
    fn default() -> Self {
        Self {
            started_ago: Duration::hours(schedule::SLEEP_SESSION_HOURS_AGO),
            in_bed: Duration::hours(schedule::IN_BED_HOURS),
            latency: Duration::minutes(schedule::SLEEP_LATENCY_MINUTES),
            phases: [
                (SleepStage::AsleepCore, Duration::hours(schedule::CORE_SLEEP_HOURS)),
                (SleepStage::AsleepDeep, Duration::hours(schedule::DEEP_SLEEP_HOURS)),
                (SleepStage::AsleepRem, Duration::hours(schedule::REM_SLEEP_HOURS)),
            ],
        }
    }
}

impl SleepSessionPlan {
    /// Total asleep time across all phases
    #[must_use]
    pub fn asleep(&self) -> Duration {
        self.phases
            .iter()
            .fold(Duration::zero(), |total, (_, length)| total + *length)
    }

    /// In-bed record followed by the asleep phases, all created at `now`
    #[must_use]
    pub fn records(&self, now: NaiveDateTime) -> Vec<HealthRecord> {
        let session_start = now - self.started_ago;
        let mut records = Vec::with_capacity(self.phases.len() + 1);
        records.push(HealthRecord::sleep(
            SleepStage::InBed,
            session_start,
            self.in_bed,
            now,
        ));

        let mut phase_start = session_start + self.latency;
        for (stage, length) in self.phases {
            let record = HealthRecord::sleep(stage, phase_start, length, now);
            phase_start = record.end_date;
            records.push(record);
        }
        records
    }
}
