use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scoring::{
    build_profile, required_progress, response_consistency, score, InsightConfig,
    InvalidInputError, ProfileInsights, ScoringResult,
};

use super::loader::{QuestionSet, ResponseSet};

/// Everything computed for one respondent, ready to hand to a consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub scored_at: DateTime<Utc>,
    pub result: ScoringResult,
    pub response_consistency: f64,
    pub required_progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<ProfileInsights>,
}

impl ScoreReport {
    /// Score a response set and collect the derived metrics around it.
    /// Insights are attached only when `insights` is given.
    pub fn build(
        questions: &QuestionSet,
        responses: &ResponseSet,
        insights: Option<&InsightConfig>,
        scored_at: DateTime<Utc>,
    ) -> Result<Self, InvalidInputError> {
        let result = score(&questions.questions, &responses.responses)?;
        let profile = insights.and_then(|config| build_profile(&result, config));

        Ok(Self {
            assessment: questions.name.clone(),
            respondent: responses.respondent.clone(),
            scored_at,
            response_consistency: response_consistency(&responses.responses),
            required_progress: required_progress(&questions.questions, &responses.responses),
            insights: profile,
            result,
        })
    }
}

/// Save a report as pretty JSON, atomically.
///
/// Uses atomic-write-file so a reader never sees a half-written report.
pub fn save_report(path: &Path, report: &ScoreReport) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize score report")?;

    file.commit()
        .with_context(|| format!("Failed to save score report to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ApestDimension, Question, Response};
    use chrono::TimeZone;
    use std::env;

    fn sample_sets() -> (QuestionSet, ResponseSet) {
        let questions = QuestionSet {
            name: Some("APEST".to_string()),
            questions: vec![
                Question::new("q1").with_dimension(ApestDimension::Apostolic),
                Question::new("q2").with_dimension(ApestDimension::Shepherding),
                Question::new("q3").optional(),
            ],
        };
        let responses = ResponseSet {
            respondent: Some("alex".to_string()),
            responses: vec![Response::answered("q1", 5.0), Response::answered("q2", 3.0)],
        };
        (questions, responses)
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_build_report() {
        let (questions, responses) = sample_sets();
        let report = ScoreReport::build(
            &questions,
            &responses,
            Some(&InsightConfig::default()),
            fixed_time(),
        )
        .unwrap();

        assert_eq!(report.assessment.as_deref(), Some("APEST"));
        assert_eq!(report.respondent.as_deref(), Some("alex"));
        assert_eq!(report.result.primary_gift, Some(ApestDimension::Apostolic));
        assert_eq!(report.required_progress, 100);
        assert!((report.response_consistency - 0.5).abs() < 1e-9);
        assert!(report.insights.is_some());
    }

    #[test]
    fn test_build_report_without_insights() {
        let (questions, responses) = sample_sets();
        let report = ScoreReport::build(&questions, &responses, None, fixed_time()).unwrap();
        assert!(report.insights.is_none());
    }

    #[test]
    fn test_build_report_propagates_invalid_input() {
        let (questions, mut responses) = sample_sets();
        responses.responses.push(Response::answered("q9", 2.0));

        let err = ScoreReport::build(&questions, &responses, None, fixed_time()).unwrap_err();
        assert_eq!(err.question_id(), Some("q9"));
    }

    #[test]
    fn test_save_and_reload_report() {
        let temp_path = env::temp_dir().join("apest_score_test_report.json");
        let _ = std::fs::remove_file(&temp_path);

        let (questions, responses) = sample_sets();
        let report = ScoreReport::build(&questions, &responses, None, fixed_time()).unwrap();
        save_report(&temp_path, &report).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["result"]["primaryGift"], "apostolic");
        assert_eq!(json["result"]["dimensionScores"]["shepherding"], 3);
        assert_eq!(json["scoredAt"], "2025-03-01T12:00:00Z");

        let reloaded: ScoreReport = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, report);

        let _ = std::fs::remove_file(&temp_path);
    }
}
