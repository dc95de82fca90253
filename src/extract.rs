//! Pull the description (and timestamp) out of one XML test report.
//!
//! The expected shape is the one gtest writes with `--gtest_output=xml`
//! when a test records a `description` property:
//!
//! ```xml
//! <testsuites>
//!   <testsuite name="LRUTest">
//!     <testcase name="ZeroSizeErrors" timestamp="2024-01-01T12:00:00">
//!       <properties>
//!         <property name="description" value="Zero capacity is rejected"/>
//!       </properties>
//!     </testcase>
//!   </testsuite>
//! </testsuites>
//! ```
//!
//! Elements are matched at any depth.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::types::{Report, Variant};

const PROPERTY_TAG: &str = "property";
const TESTCASE_TAG: &str = "testcase";
const DESCRIPTION_NAME: &str = "description";

/// Read and parse one report file
pub fn extract_report(path: &Path, variant: Variant) -> Result<Report> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => {
            ReportError::malformed(path, "not valid UTF-8 (only UTF-8 reports are supported)")
        }
        _ => ReportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let report = parse_report(path, &content, variant)?;
    debug!(
        "{}: description={:?} timestamp={:?}",
        path.display(),
        report.description,
        report.timestamp
    );
    Ok(report)
}

/// Parse report XML already in memory. `path` is only used in errors.
pub fn parse_report(path: &Path, xml: &str, variant: Variant) -> Result<Report> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)
        .map_err(|e| ReportError::malformed(path, format!("invalid XML: {e}")))?;

    let mut descriptions = Vec::new();
    let mut timestamps = Vec::new();

    for node in doc.descendants().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            PROPERTY_TAG => {
                let name = required_attribute(path, &node, "name")?;
                if name == DESCRIPTION_NAME {
                    descriptions.push(required_attribute(path, &node, "value")?.to_string());
                }
            }
            TESTCASE_TAG if variant.requires_timestamp() => {
                let raw = required_attribute(path, &node, "timestamp")?;
                let ts = parse_timestamp(raw).ok_or_else(|| {
                    ReportError::malformed(path, format!("invalid timestamp '{raw}'"))
                })?;
                timestamps.push(ts);
            }
            _ => {}
        }
    }

    let description = exactly_one(path, descriptions, "description property")?;
    let timestamp = if variant.requires_timestamp() {
        Some(exactly_one(path, timestamps, "testcase timestamp")?)
    } else {
        None
    };

    Ok(Report {
        timestamp,
        description,
    })
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts a naive date-time (`2024-01-01T12:00:00`, fractional seconds
/// allowed), an RFC 3339 date-time with offset (converted to UTC), or a bare
/// date (taken as midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = raw.parse::<NaiveDateTime>() {
        return Some(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn required_attribute<'a>(
    path: &Path,
    node: &roxmltree::Node<'a, '_>,
    attr: &str,
) -> Result<&'a str> {
    node.attribute(attr).ok_or_else(|| {
        ReportError::malformed(
            path,
            format!(
                "<{}> element on line {} has no '{}' attribute",
                node.tag_name().name(),
                node.document().text_pos_at(node.range().start).row,
                attr
            ),
        )
    })
}

fn exactly_one<T>(path: &Path, mut found: Vec<T>, what: &str) -> Result<T> {
    if found.len() != 1 {
        return Err(ReportError::malformed(
            path,
            format!("expected exactly one {what}, found {}", found.len()),
        ));
    }
    Ok(found.remove(0))
}
