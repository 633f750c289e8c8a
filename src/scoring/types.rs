use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::dimension::ApestDimension;

/// Lowest and highest points on the Likert scale responses are recorded on.
pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;

/// `completion_percentage` of every computed result.
pub const COMPLETED: u8 = 100;

/// A question definition as supplied by the assessment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Question {
    pub id: String,

    /// Prompt text, ignored by scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Dimension this question measures. Untagged questions still count toward the totals.
    #[serde(default)]
    pub dimension: Option<ApestDimension>,

    /// Multiplier on the question's contribution (default: 1.0)
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Invert the answer (1<->5, 2<->4) before weighting
    #[serde(default)]
    pub reverse_scored: bool,

    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_weight() -> f64 {
    1.0
}

fn default_required() -> bool {
    true
}

impl Question {
    /// Plain, required, weight-1 question with no dimension.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: None,
            dimension: None,
            weight: default_weight(),
            reverse_scored: false,
            required: default_required(),
        }
    }

    pub fn with_dimension(mut self, dimension: ApestDimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_scored = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// One respondent's answer to a question.
///
/// `value` is kept as a plain number so that fractional or out-of-scale answers
/// reach validation and are reported against their question instead of failing
/// somewhere inside deserialization.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Response {
    pub question_id: String,

    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub skipped: bool,
}

impl Response {
    pub fn answered(question_id: impl Into<String>, value: f64) -> Self {
        Self {
            question_id: question_id.into(),
            value: Some(value),
            skipped: false,
        }
    }

    pub fn skipped(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: None,
            skipped: true,
        }
    }

    pub fn unanswered(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: None,
            skipped: false,
        }
    }

    /// The value this response contributes, if any.
    pub fn scored_value(&self) -> Option<f64> {
        if self.skipped {
            None
        } else {
            self.value
        }
    }
}

/// Outcome of scoring one respondent against one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub total_score: u64,
    pub max_possible_score: u64,
    /// Weighted average per dimension; dimensions nobody answered are absent.
    pub dimension_scores: BTreeMap<ApestDimension, u32>,
    pub primary_gift: Option<ApestDimension>,
    pub secondary_gift: Option<ApestDimension>,
    pub completion_percentage: u8,
}

impl ScoringResult {
    pub fn dimension_score(&self, dimension: ApestDimension) -> Option<u32> {
        self.dimension_scores.get(&dimension).copied()
    }

    /// Scored dimensions, highest first, ties in declaration order.
    pub fn ranked_dimensions(&self) -> Vec<(ApestDimension, u32)> {
        rank_scores(&self.dimension_scores)
    }
}

pub(crate) fn rank_scores(scores: &BTreeMap<ApestDimension, u32>) -> Vec<(ApestDimension, u32)> {
    let mut ranked: Vec<_> = scores
        .iter()
        .map(|(dimension, score)| (*dimension, *score))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}
