use serde::{Deserialize, Serialize};

use crate::scoring::InsightConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gift profile thresholds; defaults apply when absent
    #[serde(default)]
    pub insights: Option<InsightConfig>,

    /// Force colored output on or off (default: on when stdout is a terminal)
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    pub fn effective_insights(&self) -> InsightConfig {
        self.insights.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effective_insights(), InsightConfig::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
color: false
insights:
  strength_threshold: 5
  growth_threshold: 2
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.color, Some(false));
        let insights = config.effective_insights();
        assert_eq!(insights.strength_threshold(), 5);
        assert_eq!(insights.growth_threshold(), 2);
        assert!(insights.specialization_spread.is_none());
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        assert!(serde_saphyr::from_str::<Config>("queries: []\n").is_err());
    }
}
