use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Which report shape the run expects - mutually exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Description only, items kept in directory order
    #[default]
    Basic,
    /// Description plus `testcase` timestamp, items sorted by timestamp
    Timestamped,
}

impl Variant {
    /// Returns true if each report must carry exactly one timestamp.
    pub fn requires_timestamp(&self) -> bool {
        matches!(self, Variant::Timestamped)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::Timestamped => write!(f, "timestamped"),
        }
    }
}

/// What one report file contributes to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// `testcase` timestamp (only extracted for [`Variant::Timestamped`])
    pub timestamp: Option<NaiveDateTime>,
    /// Raw `description` property value, not yet escaped
    pub description: String,
}
