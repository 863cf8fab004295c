// ABOUTME: Export document model holding the export date, owner profile and ordered records
// ABOUTME: Provides per-category counts used in logs and the generation summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::Serialize;

use super::health::HealthRecord;
use super::record_type::SampleCategory;
use crate::constants::{document, profile};

/// Synthetic owner demographics written to the `Me` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProfile {
    /// `dateOfBirth` attribute
    pub date_of_birth: &'static str,
    /// `biologicalSex` attribute
    pub biological_sex: &'static str,
    /// `bloodType` attribute
    pub blood_type: &'static str,
    /// `fitzpatrickSkinType` attribute
    pub fitzpatrick_skin_type: &'static str,
}

impl Default for ExportProfile {
    fn default() -> Self {
        Self {
            date_of_birth: profile::DATE_OF_BIRTH,
            biological_sex: profile::BIOLOGICAL_SEX,
            blood_type: profile::BLOOD_TYPE,
            fitzpatrick_skin_type: profile::FITZPATRICK_SKIN_TYPE,
        }
    }
}

/// Number of records in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category
    pub category: SampleCategory,
    /// Records emitted for it
    pub count: usize,
}

/// A complete health export document
#[derive(Debug, Clone, PartialEq)]
pub struct HealthExport {
    /// `locale` attribute of the root element
    pub locale: &'static str,
    /// `ExportDate` value, the generation instant
    pub export_date: NaiveDateTime,
    /// Owner profile
    pub profile: ExportProfile,
    /// Records in output order
    pub records: Vec<HealthRecord>,
}

impl HealthExport {
    /// New export with the default locale and profile
    #[must_use]
    pub fn new(export_date: NaiveDateTime, records: Vec<HealthRecord>) -> Self {
        Self {
            locale: document::LOCALE,
            export_date,
            profile: ExportProfile::default(),
            records,
        }
    }

    /// Total number of `Record` elements
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Records belonging to `category`, in output order
    pub fn records_in(&self, category: SampleCategory) -> impl Iterator<Item = &HealthRecord> {
        self.records
            .iter()
            .filter(move |record| record.category() == category)
    }

    /// Record counts for every category, in document order
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryCount> {
        SampleCategory::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self.records_in(category).count(),
            })
            .collect()
    }
}
