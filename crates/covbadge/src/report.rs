//! Merged kcov coverage report
//!
//! Only `percent_covered` is read. kcov also writes `covered_lines`,
//! `total_lines`, `files` and friends; those are ignored.

use crate::error::{BadgeError, BadgeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of a merged coverage report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Overall line coverage, nominally 0.0 to 100.0
    #[serde(deserialize_with = "deserialize_percent")]
    pub percent_covered: f64,
}

impl CoverageReport {
    /// Create a report from a known percentage
    #[must_use]
    pub const fn new(percent_covered: f64) -> Self {
        Self { percent_covered }
    }

    /// Parse a report from JSON text
    ///
    /// `path` is only used to label errors.
    pub fn from_json(content: &str, path: &Path) -> BadgeResult<Self> {
        serde_json::from_str(content).map_err(|e| BadgeError::parse(path, e))
    }

    /// Read and parse the report at `path`
    pub fn load(path: &Path) -> BadgeResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BadgeError::file_access(path, e))?;
        Self::from_json(&content, path)
    }
}

/// kcov writes the percentage as a number, but older versions quote it
fn deserialize_percent<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Percent {
        Number(f64),
        Text(String),
    }

    match Percent::deserialize(deserializer)? {
        Percent::Number(value) => Ok(value),
        Percent::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("percent_covered is not a number: {text:?}"))
        }),
    }
}
