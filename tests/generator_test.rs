// ABOUTME: Integration tests for record generation: counts, values, offsets and sleep layout
// ABOUTME: Uses a pinned reference instant so every timestamp can be asserted exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate, Timelike};
use common::fixed_now;
use health_export_fixture::generator::FixtureGenerator;
use health_export_fixture::models::{
    HealthRecord, QuantityType, RecordKind, SampleCategory, SleepStage,
};

fn quantity_values(records: &[HealthRecord], wanted: QuantityType) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| match record.kind {
            RecordKind::Quantity {
                quantity_type,
                value,
            } if quantity_type == wanted => Some(value),
            _ => None,
        })
        .collect()
}

#[test]
fn test_export_contains_fifty_two_records() {
    let export = FixtureGenerator::new(fixed_now()).build();
    assert_eq!(export.record_count(), 52);

    let counts: Vec<(SampleCategory, usize)> = export
        .category_breakdown()
        .into_iter()
        .map(|entry| (entry.category, entry.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (SampleCategory::Vitals, 25),
            (SampleCategory::Activity, 16),
            (SampleCategory::Body, 3),
            (SampleCategory::BloodPressure, 2),
            (SampleCategory::Mobility, 4),
            (SampleCategory::Environment, 1),
            (SampleCategory::Sleep, 4),
        ]
    );
}

#[test]
fn test_records_are_grouped_in_category_order() {
    let export = FixtureGenerator::new(fixed_now()).build();
    let categories: Vec<SampleCategory> = export.records.iter().map(|r| r.category()).collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

#[test]
fn test_heart_rate_cycles_every_ten_samples() {
    let generator = FixtureGenerator::new(fixed_now());
    let records = generator.quantity_records();

    let values = quantity_values(&records, QuantityType::HeartRate);
    assert_eq!(values.len(), 20);
    for (index, value) in values.iter().enumerate() {
        let expected = 70.0 + (index % 10) as f64;
        assert!((value - expected).abs() < f64::EPSILON, "sample {index}: {value}");
    }

    let starts: Vec<_> = records
        .iter()
        .filter(|r| r.type_identifier() == QuantityType::HeartRate.identifier())
        .map(|r| r.start_date)
        .collect();
    for (index, start) in (0_i64..).zip(starts.iter()) {
        assert_eq!(fixed_now() - *start, Duration::minutes(10 * index));
    }
}

#[test]
fn test_steps_are_hourly_buckets_of_three_hundred() {
    let generator = FixtureGenerator::new(fixed_now());
    let records = generator.quantity_records();

    let values = quantity_values(&records, QuantityType::StepCount);
    assert_eq!(values.len(), 10);
    assert!(values.iter().all(|v| (v - 300.0).abs() < f64::EPSILON));

    let last_step = records
        .iter()
        .filter(|r| r.type_identifier() == QuantityType::StepCount.identifier())
        .next_back()
        .unwrap();
    assert_eq!(fixed_now() - last_step.start_date, Duration::hours(9));
}

#[test]
fn test_quantity_records_last_five_minutes() {
    let generator = FixtureGenerator::new(fixed_now());
    for record in generator.quantity_records() {
        assert!(record.is_quantity());
        assert_eq!(record.end_date - record.start_date, Duration::minutes(5));
        assert_eq!(record.creation_date, record.start_date);
        assert!(record.start_date <= fixed_now());
        assert!(record.unit().is_some());
        assert_eq!(record.source.name, "TestGen");
        assert_eq!(record.source.version, Some("1.0"));
    }
}

#[test]
fn test_single_reading_offsets() {
    let generator = FixtureGenerator::new(fixed_now());
    let records = generator.quantity_records();
    let offset_of = |wanted: QuantityType| {
        records
            .iter()
            .find(|r| r.type_identifier() == wanted.identifier())
            .map(|r| fixed_now() - r.start_date)
            .unwrap()
    };

    assert_eq!(offset_of(QuantityType::OxygenSaturation), Duration::minutes(15));
    assert_eq!(offset_of(QuantityType::BodyMass), Duration::days(1));
    assert_eq!(offset_of(QuantityType::StandTime), Duration::minutes(300));
    assert_eq!(offset_of(QuantityType::EnvironmentalAudioExposure), Duration::minutes(10));
}

#[test]
fn test_oxygen_saturation_is_a_fraction() {
    let generator = FixtureGenerator::new(fixed_now());
    let values = quantity_values(&generator.quantity_records(), QuantityType::OxygenSaturation);
    assert_eq!(values.len(), 1);
    assert!(values[0] > 0.0 && values[0] <= 1.0);
}

#[test]
fn test_sleep_phases_are_chained_inside_time_in_bed() {
    let generator = FixtureGenerator::new(fixed_now());
    let sleep = generator.sleep_records();
    assert!(sleep.iter().all(|r| !r.is_quantity()));
    let stages: Vec<SleepStage> = sleep.iter().filter_map(|r| r.sleep_stage()).collect();
    assert_eq!(stages, SleepStage::ALL.to_vec());
    let asleep: Vec<SleepStage> = stages.iter().copied().filter(SleepStage::is_asleep).collect();
    assert_eq!(
        asleep,
        vec![SleepStage::AsleepCore, SleepStage::AsleepDeep, SleepStage::AsleepRem]
    );

    let in_bed = &sleep[0];
    assert_eq!(fixed_now() - in_bed.start_date, Duration::hours(10));
    assert_eq!(in_bed.duration(), Duration::hours(8));

    let core = &sleep[1];
    let deep = &sleep[2];
    let rem = &sleep[3];
    assert_eq!(core.start_date - in_bed.start_date, Duration::minutes(30));
    assert_eq!(core.duration(), Duration::hours(5));
    assert_eq!(deep.start_date, core.end_date);
    assert_eq!(deep.duration(), Duration::hours(1));
    assert_eq!(rem.start_date, deep.end_date);
    assert_eq!(rem.duration(), Duration::hours(1));

    for phase in [core, deep, rem] {
        assert!(phase.start_date >= in_bed.start_date);
        assert!(phase.end_date <= in_bed.end_date);
    }
}

#[test]
fn test_sleep_records_are_created_at_generation_time() {
    let generator = FixtureGenerator::new(fixed_now());
    for record in generator.sleep_records() {
        assert_eq!(record.creation_date, fixed_now());
        assert_eq!(record.unit(), None);
        assert_eq!(record.source.name, "TestWatch");
        assert_eq!(record.source.version, None);
    }
}

#[test]
fn test_reference_instant_is_truncated_to_seconds() {
    let precise = NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_micro_opt(9, 26, 53, 589_793))
        .unwrap();
    let generator = FixtureGenerator::new(precise);
    assert_eq!(generator.now(), fixed_now());
    assert!(generator
        .build()
        .records
        .iter()
        .all(|record| record.start_date.nanosecond() == 0));
}

#[test]
fn test_structure_is_independent_of_generation_time() {
    let earlier = FixtureGenerator::new(fixed_now()).build();
    let later = FixtureGenerator::new(fixed_now() + Duration::days(40)).build();

    let shape = |records: &[HealthRecord]| {
        records
            .iter()
            .map(|r| (r.type_identifier(), r.unit(), r.value_text()))
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&earlier.records), shape(&later.records));
    assert_ne!(earlier.export_date, later.export_date);
}
