use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five APEST ministry dimensions.
///
/// Variant order is the declaration order used to break ranking ties, so the
/// derived `Ord` is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApestDimension {
    Apostolic,
    Prophetic,
    Evangelistic,
    Shepherding,
    Teaching,
}

impl ApestDimension {
    pub const ALL: [ApestDimension; 5] = [
        ApestDimension::Apostolic,
        ApestDimension::Prophetic,
        ApestDimension::Evangelistic,
        ApestDimension::Shepherding,
        ApestDimension::Teaching,
    ];

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apostolic" => Ok(ApestDimension::Apostolic),
            "prophetic" => Ok(ApestDimension::Prophetic),
            "evangelistic" => Ok(ApestDimension::Evangelistic),
            "shepherding" => Ok(ApestDimension::Shepherding),
            "teaching" => Ok(ApestDimension::Teaching),
            other => bail!("Unknown APEST dimension: {}", other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApestDimension::Apostolic => "apostolic",
            ApestDimension::Prophetic => "prophetic",
            ApestDimension::Evangelistic => "evangelistic",
            ApestDimension::Shepherding => "shepherding",
            ApestDimension::Teaching => "teaching",
        }
    }

    /// Capitalized label for terminal output ("Apostolic")
    pub fn label(&self) -> &'static str {
        match self {
            ApestDimension::Apostolic => "Apostolic",
            ApestDimension::Prophetic => "Prophetic",
            ApestDimension::Evangelistic => "Evangelistic",
            ApestDimension::Shepherding => "Shepherding",
            ApestDimension::Teaching => "Teaching",
        }
    }
}

impl fmt::Display for ApestDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
