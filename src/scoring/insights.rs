use serde::{Deserialize, Serialize};

use super::config::InsightConfig;
use super::dimension::ApestDimension;
use super::types::ScoringResult;

/// Narrative profile built from a scored assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInsights {
    pub summary: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub action_items: Vec<String>,
    pub content_recommendations: Vec<String>,
    /// Dimensions outside the top two, weakest first; partners who carry these
    /// round out a team.
    pub complementary_gifts: Vec<ApestDimension>,
}

/// Build the gift profile for a result. Returns `None` when nothing was scored.
pub fn build_profile(result: &ScoringResult, config: &InsightConfig) -> Option<ProfileInsights> {
    let primary = result.primary_gift?;
    let ranked = result.ranked_dimensions();

    let mut summary = vec![description(primary).to_string()];
    if let Some(secondary) = result.secondary_gift {
        summary.push(format!(
            "Your secondary {} gift complements your primary {} gift and gives your ministry a wider reach.",
            secondary, primary
        ));
    }

    let highest = ranked.first().map(|(_, score)| *score).unwrap_or(0);
    let lowest = ranked.last().map(|(_, score)| *score).unwrap_or(0);
    if highest - lowest > config.specialization_spread() {
        summary.push(
            "Your profile is specialized. Look for people whose gifts cover the areas you score lower in."
                .to_string(),
        );
    } else {
        summary.push(
            "Your profile is balanced across the dimensions you answered, which makes you adaptable in most ministry settings."
                .to_string(),
        );
    }

    let strengths = result
        .dimension_scores
        .iter()
        .filter(|(_, score)| **score >= config.strength_threshold())
        .map(|(dimension, _)| {
            format!("Strong {} gift: put it to work in your current ministry", dimension)
        })
        .collect();

    let growth_areas = result
        .dimension_scores
        .iter()
        .filter(|(_, score)| **score < config.growth_threshold())
        .map(|(dimension, _)| format!("Grow your {} gift through deliberate practice", dimension))
        .collect();

    Some(ProfileInsights {
        summary: summary.join(" "),
        strengths,
        growth_areas,
        action_items: to_strings(action_items(primary)),
        content_recommendations: to_strings(content(primary)),
        complementary_gifts: complementary(result),
    })
}

/// Dimensions other than primary and secondary, weakest first. Unscored
/// dimensions count as weakest; ties stay in declaration order.
fn complementary(result: &ScoringResult) -> Vec<ApestDimension> {
    let mut rest: Vec<(ApestDimension, Option<u32>)> = ApestDimension::ALL
        .into_iter()
        .filter(|d| Some(*d) != result.primary_gift && Some(*d) != result.secondary_gift)
        .map(|d| (d, result.dimension_score(d)))
        .collect();
    rest.sort_by_key(|(_, score)| *score);
    rest.into_iter().map(|(dimension, _)| dimension).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn description(dimension: ApestDimension) -> &'static str {
    match dimension {
        ApestDimension::Apostolic => {
            "Apostolic gifts pioneer: casting vision, starting new work, and carrying the mission into places it has not reached."
        }
        ApestDimension::Prophetic => {
            "Prophetic gifts call people back to faithfulness: naming what is true, questioning the status quo, and listening for what God is saying."
        }
        ApestDimension::Evangelistic => {
            "Evangelistic gifts recruit: sharing the good news and building bridges between the church and people outside it."
        }
        ApestDimension::Shepherding => {
            "Shepherding gifts care: nurturing, protecting, and walking with people as they grow, especially through hard seasons."
        }
        ApestDimension::Teaching => {
            "Teaching gifts bring understanding: explaining Scripture, making disciples, and laying solid foundations."
        }
    }
}

fn action_items(dimension: ApestDimension) -> &'static [&'static str] {
    match dimension {
        ApestDimension::Apostolic => &[
            "Start a new ministry or extend an existing one into new territory",
            "Find an experienced apostolic leader to mentor you",
            "Build your vision-casting and team-building skills",
        ],
        ApestDimension::Prophetic => &[
            "Look for ways to speak truth in your own context",
            "Sharpen discernment through prayer and Scripture",
            "Join a prophetic community that keeps you accountable",
        ],
        ApestDimension::Evangelistic => &[
            "Tell your faith story regularly",
            "Invest in friendships with people outside the church",
            "Learn how to engage cultures different from your own",
        ],
        ApestDimension::Shepherding => &[
            "Mentor someone through their spiritual journey",
            "Develop counseling and care skills",
            "Create safe spaces for honest conversations",
        ],
        ApestDimension::Teaching => &[
            "Build a systematic approach to discipleship",
            "Study theology and biblical interpretation",
            "Practice explaining complex ideas simply",
        ],
    }
}

fn content(dimension: ApestDimension) -> &'static [&'static str] {
    match dimension {
        ApestDimension::Apostolic => &[
            "Church Planting",
            "Leadership Development",
            "Vision and Strategy",
        ],
        ApestDimension::Prophetic => &[
            "Social Justice",
            "Spiritual Formation",
            "Cultural Engagement",
        ],
        ApestDimension::Evangelistic => &[
            "Evangelism Training",
            "Cross-Cultural Ministry",
            "Community Outreach",
        ],
        ApestDimension::Shepherding => &[
            "Pastoral Care",
            "Counseling Skills",
            "Small Group Leadership",
        ],
        ApestDimension::Teaching => &["Biblical Studies", "Theological Education", "Discipleship"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::COMPLETED;
    use std::collections::BTreeMap;

    fn result_with(scores: &[(ApestDimension, u32)]) -> ScoringResult {
        let dimension_scores: BTreeMap<_, _> = scores.iter().copied().collect();
        let ranked = crate::scoring::types::rank_scores(&dimension_scores);
        ScoringResult {
            total_score: 0,
            max_possible_score: 0,
            primary_gift: ranked.first().map(|(d, _)| *d),
            secondary_gift: ranked.get(1).map(|(d, _)| *d),
            dimension_scores,
            completion_percentage: COMPLETED,
        }
    }

    #[test]
    fn test_no_profile_without_primary_gift() {
        let result = result_with(&[]);
        assert!(build_profile(&result, &InsightConfig::default()).is_none());
    }

    #[test]
    fn test_specialized_profile() {
        let result = result_with(&[
            (ApestDimension::Apostolic, 5),
            (ApestDimension::Teaching, 4),
            (ApestDimension::Shepherding, 2),
        ]);
        let profile = build_profile(&result, &InsightConfig::default()).unwrap();

        assert!(profile.summary.starts_with("Apostolic gifts pioneer"));
        assert!(profile.summary.contains("secondary teaching gift"));
        assert!(profile.summary.contains("specialized"));
        assert_eq!(profile.strengths.len(), 2);
        assert_eq!(
            profile.growth_areas,
            vec!["Grow your shepherding gift through deliberate practice"]
        );
        assert_eq!(profile.action_items.len(), 3);
        assert_eq!(profile.content_recommendations[0], "Church Planting");
    }

    #[test]
    fn test_balanced_profile() {
        let result = result_with(&[
            (ApestDimension::Prophetic, 3),
            (ApestDimension::Evangelistic, 3),
        ]);
        let profile = build_profile(&result, &InsightConfig::default()).unwrap();

        assert!(profile.summary.contains("balanced"));
        assert!(profile.strengths.is_empty());
        assert!(profile.growth_areas.is_empty());
    }

    #[test]
    fn test_single_dimension_has_no_secondary_sentence() {
        let result = result_with(&[(ApestDimension::Shepherding, 4)]);
        let profile = build_profile(&result, &InsightConfig::default()).unwrap();
        assert!(!profile.summary.contains("secondary"));
    }

    #[test]
    fn test_thresholds_come_from_config() {
        let result = result_with(&[(ApestDimension::Teaching, 3)]);
        let config = InsightConfig {
            strength_threshold: Some(3),
            growth_threshold: Some(1),
            specialization_spread: None,
        };
        let profile = build_profile(&result, &config).unwrap();
        assert_eq!(profile.strengths.len(), 1);
        assert!(profile.growth_areas.is_empty());
    }

    #[test]
    fn test_complementary_gifts_weakest_first() {
        let result = result_with(&[
            (ApestDimension::Apostolic, 5),
            (ApestDimension::Prophetic, 4),
            (ApestDimension::Teaching, 2),
            (ApestDimension::Evangelistic, 3),
        ]);
        let profile = build_profile(&result, &InsightConfig::default()).unwrap();
        assert_eq!(
            profile.complementary_gifts,
            vec![
                ApestDimension::Shepherding,
                ApestDimension::Teaching,
                ApestDimension::Evangelistic,
            ]
        );
    }
}
