//! Color tiers
//!
//! A tier table is an ordered list of `(threshold, color)` pairs. A
//! percentage lands in the tier with the highest threshold strictly below
//! it, so an exact threshold match falls to the next-lower tier. The first
//! tier doubles as the fallback for values that sit on the lowest threshold.

use crate::error::{BadgeError, BadgeResult};
use serde::Serialize;

/// A single `(threshold, color)` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorTier {
    /// Exclusive lower bound of the tier
    pub threshold: f64,
    /// shields.io color name
    pub color: &'static str,
}

impl ColorTier {
    /// Create a tier
    #[must_use]
    pub const fn new(threshold: f64, color: &'static str) -> Self {
        Self { threshold, color }
    }
}

const DEFAULT_TIERS: &[ColorTier] = &[
    ColorTier::new(0.0, "red"),
    ColorTier::new(50.0, "orange"),
    ColorTier::new(75.0, "yellow"),
    ColorTier::new(90.0, "green"),
];

/// Ordered tier table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierTable {
    tiers: &'static [ColorTier],
}

impl Default for TierTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TierTable {
    /// red / orange / yellow / green at 0 / 50 / 75 / 90
    pub const DEFAULT: Self = Self {
        tiers: DEFAULT_TIERS,
    };

    /// Build a table from custom tiers
    ///
    /// Thresholds must be finite and strictly increasing, and the lowest
    /// one must not exceed 0 so every valid percentage has a tier.
    pub fn new(tiers: &'static [ColorTier]) -> BadgeResult<Self> {
        let Some(first) = tiers.first() else {
            return Err(BadgeError::invalid_tier_table("at least one tier is required"));
        };

        if let Some(tier) = tiers.iter().find(|t| !t.threshold.is_finite()) {
            return Err(BadgeError::invalid_tier_table(format!(
                "threshold for {} is not finite",
                tier.color
            )));
        }

        if first.threshold > 0.0 {
            return Err(BadgeError::invalid_tier_table(format!(
                "lowest threshold {} must not exceed 0",
                first.threshold
            )));
        }

        if let Some(pair) = tiers.windows(2).find(|w| w[0].threshold >= w[1].threshold) {
            return Err(BadgeError::invalid_tier_table(format!(
                "thresholds must be strictly increasing ({} then {})",
                pair[0].threshold, pair[1].threshold
            )));
        }

        Ok(Self { tiers })
    }

    /// Tiers in ascending threshold order
    #[must_use]
    pub const fn tiers(&self) -> &'static [ColorTier] {
        self.tiers
    }

    /// Fallback tier (lowest threshold)
    #[must_use]
    pub fn fallback(&self) -> &'static ColorTier {
        &self.tiers[0]
    }

    /// Select the tier for `percent`
    ///
    /// Returns `None` only when `percent` is below the lowest threshold or NaN.
    #[must_use]
    pub fn select(&self, percent: f64) -> Option<&'static ColorTier> {
        let tiers = self.tiers;
        tiers
            .iter()
            .filter(|t| percent > t.threshold)
            .max_by(|a, b| a.threshold.total_cmp(&b.threshold))
            .or_else(|| tiers.first().filter(|t| percent == t.threshold))
    }
}
