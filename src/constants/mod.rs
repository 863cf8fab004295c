// ABOUTME: Fixed values for the generated health export: file name, sources, profile, schedule
// ABOUTME: Grouped by domain so the generator and renderer never carry magic strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Every value that shapes the fixture lives here. Nothing is read from the
//! environment: the generated document is identical in structure on every run.

/// Unit strings and time conversion factors
pub mod units;

/// Output location
pub mod output {
    /// File written by the generator, relative to the working directory
    pub const OUTPUT_FILENAME: &str = "comprehensive_test.xml";
}

/// Export document header values
pub mod document {
    /// XML declaration emitted on the first line
    pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
    /// Root element name
    pub const ROOT_ELEMENT: &str = "HealthData";
    /// Locale attribute on the root element
    pub const LOCALE: &str = "en_US";
    /// Timestamp layout used for every date attribute
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
}

/// Synthetic owner profile written to the `Me` element
pub mod profile {
    /// Date of birth placeholder
    pub const DATE_OF_BIRTH: &str = "1990-01-01";
    /// Biological sex placeholder
    pub const BIOLOGICAL_SEX: &str = "HKBiologicalSexMale";
    /// Blood type placeholder
    pub const BLOOD_TYPE: &str = "HKBloodTypeAPositive";
    /// Skin type placeholder
    pub const FITZPATRICK_SKIN_TYPE: &str = "HKFitzpatrickSkinTypeNotSet";
}

/// Record sources
pub mod sources {
    /// Source of every quantity sample
    pub const QUANTITY_SOURCE_NAME: &str = "TestGen";
    /// Version reported by the quantity source
    pub const QUANTITY_SOURCE_VERSION: &str = "1.0";
    /// Source of sleep analysis samples (no version attribute)
    pub const SLEEP_SOURCE_NAME: &str = "TestWatch";
}

/// Sample spacing and sleep session layout, all in minutes
pub mod schedule {
    /// Length of every quantity sample interval
    pub const QUANTITY_SAMPLE_MINUTES: i64 = 5;
    /// Number of heart rate samples
    pub const HEART_RATE_SAMPLES: u32 = 20;
    /// Gap between heart rate samples
    pub const HEART_RATE_SPACING_MINUTES: i64 = 10;
    /// Lowest heart rate in the cycle; values run base..base+9
    pub const HEART_RATE_BASE_BPM: u32 = 70;
    /// Heart rate values repeat after this many samples
    pub const HEART_RATE_CYCLE: u32 = 10;
    /// Number of step count samples
    pub const STEP_SAMPLES: u32 = 10;
    /// Gap between step count samples
    pub const STEP_SPACING_MINUTES: i64 = 60;
    /// Steps recorded per sample
    pub const STEPS_PER_SAMPLE: f64 = 300.0;

    /// How long before generation the sleep session begins
    pub const SLEEP_SESSION_HOURS_AGO: i64 = 10;
    /// Time in bed
    pub const IN_BED_HOURS: i64 = 8;
    /// Delay between getting into bed and falling asleep
    pub const SLEEP_LATENCY_MINUTES: i64 = 30;
    /// Core sleep phase length
    pub const CORE_SLEEP_HOURS: i64 = 5;
    /// Deep sleep phase length
    pub const DEEP_SLEEP_HOURS: i64 = 1;
    /// REM sleep phase length
    pub const REM_SLEEP_HOURS: i64 = 1;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Binary / service name
    pub const HEALTH_EXPORT_FIXTURE: &str = "health_export_fixture";
}
