// ABOUTME: Unit strings attached to quantity records and time conversion factors
// ABOUTME: Unit spellings follow the health export format exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Beats or breaths per minute
pub const COUNT_PER_MINUTE: &str = "count/min";

/// Plain count (steps, flights, BMI)
pub const COUNT: &str = "count";

/// Milliseconds
pub const MILLISECONDS: &str = "ms";

/// Percentage, emitted as a fraction (0.98 means 98%)
pub const PERCENT: &str = "%";

/// Degrees Celsius
pub const DEGREES_CELSIUS: &str = "degC";

/// Kilometers
pub const KILOMETERS: &str = "km";

/// Kilocalories
pub const KILOCALORIES: &str = "kcal";

/// Minutes
pub const MINUTES: &str = "min";

/// Kilograms
pub const KILOGRAMS: &str = "kg";

/// Meters
pub const METERS: &str = "m";

/// Centimeters
pub const CENTIMETERS: &str = "cm";

/// Millimeters of mercury
pub const MILLIMETERS_OF_MERCURY: &str = "mmHg";

/// Kilometers per hour
pub const KILOMETERS_PER_HOUR: &str = "km/h";

/// A-weighted sound pressure level
pub const DECIBELS_A_SPL: &str = "dBASPL";

/// Minutes per hour
pub const MINUTES_PER_HOUR: i64 = 60;

/// Minutes per day, used for once-a-day body measurements
pub const MINUTES_PER_DAY: i64 = 1440;
