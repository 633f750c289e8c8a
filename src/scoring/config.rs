use serde::{Deserialize, Serialize};

/// Thresholds for turning dimension scores into a gift profile.
///
/// All values are on the 1-5 dimension score scale. Each field is optional in
/// YAML and falls back to the default.
///
/// Example YAML:
/// ```yaml
/// insights:
///   strength_threshold: 4
///   growth_threshold: 3
///   specialization_spread: 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InsightConfig {
    /// Dimensions scoring at or above this are listed as strengths (default: 4)
    #[serde(default)]
    pub strength_threshold: Option<u32>,

    /// Scored dimensions below this are listed as growth areas (default: 3)
    #[serde(default)]
    pub growth_threshold: Option<u32>,

    /// A highest-minus-lowest spread above this reads as a specialized profile (default: 1)
    #[serde(default)]
    pub specialization_spread: Option<u32>,
}

pub const DEFAULT_STRENGTH_THRESHOLD: u32 = 4;
pub const DEFAULT_GROWTH_THRESHOLD: u32 = 3;
pub const DEFAULT_SPECIALIZATION_SPREAD: u32 = 1;

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            strength_threshold: Some(DEFAULT_STRENGTH_THRESHOLD),
            growth_threshold: Some(DEFAULT_GROWTH_THRESHOLD),
            specialization_spread: Some(DEFAULT_SPECIALIZATION_SPREAD),
        }
    }
}

impl InsightConfig {
    pub fn strength_threshold(&self) -> u32 {
        self.strength_threshold.unwrap_or(DEFAULT_STRENGTH_THRESHOLD)
    }

    pub fn growth_threshold(&self) -> u32 {
        self.growth_threshold.unwrap_or(DEFAULT_GROWTH_THRESHOLD)
    }

    pub fn specialization_spread(&self) -> u32 {
        self.specialization_spread.unwrap_or(DEFAULT_SPECIALIZATION_SPREAD)
    }
}
