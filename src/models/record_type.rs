// ABOUTME: Quantity record identifiers with their units and sample categories
// ABOUTME: Covers vitals, activity, body, blood pressure, mobility and environment samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display};

use serde::Serialize;

use crate::constants::units;

/// Grouping used to order records and summarize an export
#[derive(Debug, Copy, Clone, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SampleCategory {
    /// Heart, breathing and temperature readings
    Vitals,
    /// Steps, distance, energy and exercise
    Activity,
    /// Weight, BMI and height
    Body,
    /// Systolic and diastolic pressure
    BloodPressure,
    /// Gait measurements
    Mobility,
    /// Ambient sound exposure
    Environment,
    /// Sleep analysis intervals
    Sleep,
}

impl SampleCategory {
    /// All categories in document order
    pub const ALL: [Self; 7] = [
        Self::Vitals,
        Self::Activity,
        Self::Body,
        Self::BloodPressure,
        Self::Mobility,
        Self::Environment,
        Self::Sleep,
    ];

    /// Lowercase label used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vitals => "vitals",
            Self::Activity => "activity",
            Self::Body => "body",
            Self::BloodPressure => "blood_pressure",
            Self::Mobility => "mobility",
            Self::Environment => "environment",
            Self::Sleep => "sleep",
        }
    }
}

impl Display for SampleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantity sample types emitted by the generator
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QuantityType {
    /// Heart rate
    HeartRate,
    /// Resting heart rate
    RestingHeartRate,
    /// Heart rate variability (SDNN)
    HeartRateVariabilitySdnn,
    /// Respiratory rate
    RespiratoryRate,
    /// Blood oxygen saturation, as a fraction
    OxygenSaturation,
    /// Body temperature
    BodyTemperature,
    /// Step count
    StepCount,
    /// Walking and running distance
    DistanceWalkingRunning,
    /// Flights of stairs climbed
    FlightsClimbed,
    /// Active energy burned
    ActiveEnergyBurned,
    /// Basal (resting) energy burned
    BasalEnergyBurned,
    /// Exercise minutes
    ExerciseTime,
    /// Stand minutes
    StandTime,
    /// Body mass
    BodyMass,
    /// Body mass index
    BodyMassIndex,
    /// Height
    Height,
    /// Systolic blood pressure
    BloodPressureSystolic,
    /// Diastolic blood pressure
    BloodPressureDiastolic,
    /// Walking speed
    WalkingSpeed,
    /// Walking step length
    WalkingStepLength,
    /// Walking asymmetry
    WalkingAsymmetryPercentage,
    /// Double support time
    WalkingDoubleSupportPercentage,
    /// Environmental audio exposure
    EnvironmentalAudioExposure,
}

impl QuantityType {
    /// `type` attribute value in the export
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::HeartRate => "HKQuantityTypeIdentifierHeartRate",
            Self::RestingHeartRate => "HKQuantityTypeIdentifierRestingHeartRate",
            Self::HeartRateVariabilitySdnn => "HKQuantityTypeIdentifierHeartRateVariabilitySDNN",
            Self::RespiratoryRate => "HKQuantityTypeIdentifierRespiratoryRate",
            Self::OxygenSaturation => "HKQuantityTypeIdentifierOxygenSaturation",
            Self::BodyTemperature => "HKQuantityTypeIdentifierBodyTemperature",
            Self::StepCount => "HKQuantityTypeIdentifierStepCount",
            Self::DistanceWalkingRunning => "HKQuantityTypeIdentifierDistanceWalkingRunning",
            Self::FlightsClimbed => "HKQuantityTypeIdentifierFlightsClimbed",
            Self::ActiveEnergyBurned => "HKQuantityTypeIdentifierActiveEnergyBurned",
            Self::BasalEnergyBurned => "HKQuantityTypeIdentifierBasalEnergyBurned",
            Self::ExerciseTime => "HKQuantityTypeIdentifierAppleExerciseTime",
            Self::StandTime => "HKQuantityTypeIdentifierAppleStandTime",
            Self::BodyMass => "HKQuantityTypeIdentifierBodyMass",
            Self::BodyMassIndex => "HKQuantityTypeIdentifierBodyMassIndex",
            Self::Height => "HKQuantityTypeIdentifierHeight",
            Self::BloodPressureSystolic => "HKQuantityTypeIdentifierBloodPressureSystolic",
            Self::BloodPressureDiastolic => "HKQuantityTypeIdentifierBloodPressureDiastolic",
            Self::WalkingSpeed => "HKQuantityTypeIdentifierWalkingSpeed",
            Self::WalkingStepLength => "HKQuantityTypeIdentifierWalkingStepLength",
            Self::WalkingAsymmetryPercentage => {
                "HKQuantityTypeIdentifierWalkingAsymmetryPercentage"
            }
            Self::WalkingDoubleSupportPercentage => {
                "HKQuantityTypeIdentifierWalkingDoubleSupportPercentage"
            }
            Self::EnvironmentalAudioExposure => {
                "HKQuantityTypeIdentifierEnvironmentalAudioExposure"
            }
        }
    }

    /// `unit` attribute value in the export
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::HeartRate | Self::RestingHeartRate | Self::RespiratoryRate => {
                units::COUNT_PER_MINUTE
            }
            Self::HeartRateVariabilitySdnn => units::MILLISECONDS,
            Self::OxygenSaturation
            | Self::WalkingAsymmetryPercentage
            | Self::WalkingDoubleSupportPercentage => units::PERCENT,
            Self::BodyTemperature => units::DEGREES_CELSIUS,
            Self::StepCount | Self::FlightsClimbed | Self::BodyMassIndex => units::COUNT,
            Self::DistanceWalkingRunning => units::KILOMETERS,
            Self::ActiveEnergyBurned | Self::BasalEnergyBurned => units::KILOCALORIES,
            Self::ExerciseTime | Self::StandTime => units::MINUTES,
            Self::BodyMass => units::KILOGRAMS,
            Self::Height => units::METERS,
            Self::BloodPressureSystolic | Self::BloodPressureDiastolic => {
                units::MILLIMETERS_OF_MERCURY
            }
            Self::WalkingSpeed => units::KILOMETERS_PER_HOUR,
            Self::WalkingStepLength => units::CENTIMETERS,
            Self::EnvironmentalAudioExposure => units::DECIBELS_A_SPL,
        }
    }

    /// Category this sample is grouped under
    #[must_use]
    pub const fn category(&self) -> SampleCategory {
        match self {
            Self::HeartRate
            | Self::RestingHeartRate
            | Self::HeartRateVariabilitySdnn
            | Self::RespiratoryRate
            | Self::OxygenSaturation
            | Self::BodyTemperature => SampleCategory::Vitals,
            Self::StepCount
            | Self::DistanceWalkingRunning
            | Self::FlightsClimbed
            | Self::ActiveEnergyBurned
            | Self::BasalEnergyBurned
            | Self::ExerciseTime
            | Self::StandTime => SampleCategory::Activity,
            Self::BodyMass | Self::BodyMassIndex | Self::Height => SampleCategory::Body,
            Self::BloodPressureSystolic | Self::BloodPressureDiastolic => {
                SampleCategory::BloodPressure
            }
            Self::WalkingSpeed
            | Self::WalkingStepLength
            | Self::WalkingAsymmetryPercentage
            | Self::WalkingDoubleSupportPercentage => SampleCategory::Mobility,
            Self::EnvironmentalAudioExposure => SampleCategory::Environment,
        }
    }
}

impl Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
