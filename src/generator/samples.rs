// ABOUTME: Static table of quantity sample series: value, spacing and offset per record type
// ABOUTME: Single readings are series of length one so every category shares one expansion path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDateTime};

use crate::constants::schedule;
use crate::constants::units::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::models::{HealthRecord, QuantityType};

/// How a series picks the value of each sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesValue {
    /// Same value for every sample
    Constant(f64),
    /// `base + index % cycle`, giving a repeating ramp
    Cycling {
        /// First value of the ramp
        base: u32,
        /// Samples before the ramp restarts
        cycle: u32,
    },
}

impl SeriesValue {
    /// Value of the sample at `index`
    #[must_use]
    pub fn at(&self, index: u32) -> f64 {
        match *self {
            Self::Constant(value) => value,
            Self::Cycling { base, cycle } => f64::from(base + index % cycle.max(1)),
        }
    }
}

/// A run of evenly spaced samples of one quantity type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSeries {
    /// Record type of every sample
    pub quantity_type: QuantityType,
    /// Value selection
    pub value: SeriesValue,
    /// Number of samples
    pub count: u32,
    /// Minutes before generation of the first (newest) sample
    pub offset_minutes: i64,
    /// Additional minutes back for each following sample
    pub spacing_minutes: i64,
}

impl SampleSeries {
    /// One reading taken `offset_minutes` before generation
    #[must_use]
    pub const fn single(quantity_type: QuantityType, value: f64, offset_minutes: i64) -> Self {
        Self {
            quantity_type,
            value: SeriesValue::Constant(value),
            count: 1,
            offset_minutes,
            spacing_minutes: 0,
        }
    }

    /// Minutes before `now` at which sample `index` starts
    #[must_use]
    pub fn offset_for(&self, index: u32) -> i64 {
        self.offset_minutes + i64::from(index) * self.spacing_minutes
    }

    /// Expand into records anchored on `now`
    #[must_use]
    pub fn records(&self, now: NaiveDateTime) -> Vec<HealthRecord> {
        (0..self.count)
            .map(|index| {
                let start = now - Duration::minutes(self.offset_for(index));
                HealthRecord::quantity(self.quantity_type, self.value.at(index), start)
            })
            .collect()
    }
}

/// Every quantity series in output order: vitals, activity, body, blood pressure,
/// mobility, environment
#[must_use]
pub fn quantity_plan() -> Vec<SampleSeries> {
    vec![
        // Vitals
        SampleSeries {
            quantity_type: QuantityType::HeartRate,
            value: SeriesValue::Cycling {
                base: schedule::HEART_RATE_BASE_BPM,
                cycle: schedule::HEART_RATE_CYCLE,
            },
            count: schedule::HEART_RATE_SAMPLES,
            offset_minutes: 0,
            spacing_minutes: schedule::HEART_RATE_SPACING_MINUTES,
        },
        SampleSeries::single(QuantityType::RestingHeartRate, 62.0, MINUTES_PER_HOUR),
        SampleSeries::single(QuantityType::HeartRateVariabilitySdnn, 45.0, 120),
        SampleSeries::single(QuantityType::RespiratoryRate, 14.0, 30),
        SampleSeries::single(QuantityType::OxygenSaturation, 0.98, 15),
        SampleSeries::single(QuantityType::BodyTemperature, 36.6, 45),
        // Activity
        SampleSeries {
            quantity_type: QuantityType::StepCount,
            value: SeriesValue::Constant(schedule::STEPS_PER_SAMPLE),
            count: schedule::STEP_SAMPLES,
            offset_minutes: 0,
            spacing_minutes: schedule::STEP_SPACING_MINUTES,
        },
        SampleSeries::single(QuantityType::DistanceWalkingRunning, 2.5, MINUTES_PER_HOUR),
        SampleSeries::single(QuantityType::FlightsClimbed, 5.0, 120),
        SampleSeries::single(QuantityType::ActiveEnergyBurned, 450.0, 240),
        SampleSeries::single(QuantityType::BasalEnergyBurned, 1500.0, 240),
        SampleSeries::single(QuantityType::ExerciseTime, 45.0, 300),
        // 600 minutes is a literal fixture value, not a plausible daily total
        SampleSeries::single(QuantityType::StandTime, 600.0, 300),
        // Body
        SampleSeries::single(QuantityType::BodyMass, 72.5, MINUTES_PER_DAY),
        SampleSeries::single(QuantityType::BodyMassIndex, 23.5, MINUTES_PER_DAY),
        SampleSeries::single(QuantityType::Height, 1.75, MINUTES_PER_DAY),
        // Blood pressure
        SampleSeries::single(QuantityType::BloodPressureSystolic, 118.0, 30),
        SampleSeries::single(QuantityType::BloodPressureDiastolic, 76.0, 30),
        // Mobility
        SampleSeries::single(QuantityType::WalkingSpeed, 4.5, MINUTES_PER_HOUR),
        SampleSeries::single(QuantityType::WalkingStepLength, 72.0, MINUTES_PER_HOUR),
        SampleSeries::single(QuantityType::WalkingAsymmetryPercentage, 0.0, MINUTES_PER_HOUR),
        SampleSeries::single(
            QuantityType::WalkingDoubleSupportPercentage,
            28.0,
            MINUTES_PER_HOUR,
        ),
        // Environment
        SampleSeries::single(QuantityType::EnvironmentalAudioExposure, 65.0, 10),
    ]
}
