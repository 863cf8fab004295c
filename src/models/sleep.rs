// ABOUTME: Sleep analysis stages emitted as category records
// ABOUTME: Maps InBed, AsleepCore, AsleepDeep and AsleepREM to their export values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display};

/// `type` attribute shared by every sleep record
pub const SLEEP_ANALYSIS_IDENTIFIER: &str = "HKCategoryTypeIdentifierSleepAnalysis";

/// Sleep analysis category values
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SleepStage {
    /// Time in bed, awake or asleep
    InBed,
    /// Core (light) sleep
    AsleepCore,
    /// Deep sleep
    AsleepDeep,
    /// REM sleep
    AsleepRem,
}

impl SleepStage {
    /// All stages in session order
    pub const ALL: [Self; 4] = [Self::InBed, Self::AsleepCore, Self::AsleepDeep, Self::AsleepRem];

    /// `value` attribute in the export
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::InBed => "HKCategoryValueSleepAnalysisInBed",
            Self::AsleepCore => "HKCategoryValueSleepAnalysisAsleepCore",
            Self::AsleepDeep => "HKCategoryValueSleepAnalysisAsleepDeep",
            Self::AsleepRem => "HKCategoryValueSleepAnalysisAsleepREM",
        }
    }

    /// Whether the stage counts as sleep rather than time in bed
    #[must_use]
    pub const fn is_asleep(&self) -> bool {
        !matches!(self, Self::InBed)
    }
}

impl Display for SleepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
