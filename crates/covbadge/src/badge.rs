//! shields.io badge URLs

use serde::Serialize;
use std::fmt;

/// Default shields.io static badge endpoint
pub const SHIELDS_BASE_URL: &str = "https://img.shields.io/badge";

/// Default badge label
pub const DEFAULT_LABEL: &str = "code_coverage";

/// Default link attached to the badge
pub const DEFAULT_LINK: &str = "https://simple-lua.maxortner.com/coverage.html";

/// A rendered coverage badge reference
///
/// The percentage shown is the integer part of the coverage value
/// (truncated toward zero); the color is picked by the caller from the
/// full-precision value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeUrl {
    base_url: String,
    label: String,
    percent: i64,
    color: String,
    link: String,
}

impl BadgeUrl {
    /// Create a badge with the default endpoint, label and link
    #[must_use]
    pub fn new(percent: f64, color: impl Into<String>) -> Self {
        Self {
            base_url: SHIELDS_BASE_URL.to_string(),
            label: DEFAULT_LABEL.to_string(),
            percent: display_percent(percent),
            color: color.into(),
            link: DEFAULT_LINK.to_string(),
        }
    }

    /// Set the badge endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the badge label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the link target
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Integer percentage shown on the badge
    #[must_use]
    pub const fn percent(&self) -> i64 {
        self.percent
    }

    /// Badge color
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for BadgeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // %25 is the escaped '%' sign in the badge message
        write!(
            f,
            "{}/{}-{}%25-{}?link={}",
            self.base_url, self.label, self.percent, self.color, self.link
        )
    }
}

/// Truncate toward zero, never round
fn display_percent(percent: f64) -> i64 {
    percent.trunc() as i64
}
