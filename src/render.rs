// ABOUTME: Renders health records and the export document template to XML text
// ABOUTME: Quantity records carry unit and sourceVersion attributes; sleep records do not
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! XML rendering for the health export
//!
//! The document is a fixed template: XML declaration, an empty internal DOCTYPE
//! subset, then a `HealthData` root holding `ExportDate`, `Me` and one
//! self-closing `Record` per line. Importers that scan the export line by line
//! only look at the first element on each line, so records are never joined.

use chrono::NaiveDateTime;
use html_escape::encode_double_quoted_attribute;
use tracing::debug;

use crate::constants::document::{ROOT_ELEMENT, TIMESTAMP_FORMAT, XML_DECLARATION};
use crate::models::{ExportProfile, HealthExport, HealthRecord};

const INDENT: &str = "  ";

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS`
#[must_use]
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn push_attribute(element: &mut String, name: &str, value: &str) {
    element.push(' ');
    element.push_str(name);
    element.push_str("=\"");
    element.push_str(&encode_double_quoted_attribute(value));
    element.push('"');
}

/// Render one self-closing `Record` element
#[must_use]
pub fn render_record(record: &HealthRecord) -> String {
    let mut element = String::with_capacity(256);
    element.push_str("<Record");
    push_attribute(&mut element, "type", record.type_identifier());
    push_attribute(&mut element, "sourceName", record.source.name);
    if let Some(version) = record.source.version {
        push_attribute(&mut element, "sourceVersion", version);
    }
    if let Some(unit) = record.unit() {
        push_attribute(&mut element, "unit", unit);
    }
    push_attribute(
        &mut element,
        "creationDate",
        &format_timestamp(record.creation_date),
    );
    push_attribute(&mut element, "startDate", &format_timestamp(record.start_date));
    push_attribute(&mut element, "endDate", &format_timestamp(record.end_date));
    push_attribute(&mut element, "value", &record.value_text());
    element.push_str("/>");
    element
}

/// Render the `Me` profile element
#[must_use]
pub fn render_profile(profile: &ExportProfile) -> String {
    let mut element = String::from("<Me");
    push_attribute(&mut element, "dateOfBirth", profile.date_of_birth);
    push_attribute(&mut element, "biologicalSex", profile.biological_sex);
    push_attribute(&mut element, "bloodType", profile.blood_type);
    push_attribute(
        &mut element,
        "fitzpatrickSkinType",
        profile.fitzpatrick_skin_type,
    );
    element.push_str("/>");
    element
}

/// Render the complete export document
#[must_use]
pub fn render_document(export: &HealthExport) -> String {
    let mut xml = String::with_capacity(512 + export.record_count() * 256);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str("<!DOCTYPE ");
    xml.push_str(ROOT_ELEMENT);
    xml.push_str(" [\n]>\n");

    xml.push('<');
    xml.push_str(ROOT_ELEMENT);
    push_attribute(&mut xml, "locale", export.locale);
    xml.push_str(">\n");

    xml.push_str(INDENT);
    xml.push_str("<ExportDate");
    push_attribute(&mut xml, "value", &format_timestamp(export.export_date));
    xml.push_str("/>\n");

    xml.push_str(INDENT);
    xml.push_str(&render_profile(&export.profile));
    xml.push('\n');

    for record in &export.records {
        xml.push_str(INDENT);
        xml.push_str(&render_record(record));
        xml.push('\n');
    }

    xml.push_str("</");
    xml.push_str(ROOT_ELEMENT);
    xml.push_str(">\n");

    debug!(
        records = export.record_count(),
        bytes = xml.len(),
        "Rendered health export"
    );
    xml
}
