use std::collections::{BTreeMap, HashMap};

use super::dimension::ApestDimension;
use super::error::InvalidInputError;
use super::types::{
    rank_scores, Question, Response, ScoringResult, COMPLETED, SCALE_MAX, SCALE_MIN,
};
use super::validation::first_violation;

/// Rounded totals at or above this do not fit a `u64`.
const MAX_TOTAL: f64 = u64::MAX as f64;

#[derive(Debug, Default, Clone, Copy)]
struct DimensionTally {
    weighted_sum: f64,
    weight: f64,
}

/// Score one respondent's answers against an assessment's questions.
///
/// Inputs are validated before anything is accumulated, so an error never
/// comes with a partial result. Totals are rounded once at the end.
///
/// Every contribution is non-negative, so the maximum bounds all other
/// accumulators. Once it no longer fits a `u64` the weights are rejected with
/// [`InvalidInputError::ScoreOverflow`] naming the question that pushed it over.
pub fn score(
    questions: &[Question],
    responses: &[Response],
) -> Result<ScoringResult, InvalidInputError> {
    first_violation(questions, responses)?;

    let by_question: HashMap<&str, &Response> = responses
        .iter()
        .map(|response| (response.question_id.as_str(), response))
        .collect();

    let mut total = 0.0_f64;
    let mut max_possible = 0.0_f64;
    let mut tallies: BTreeMap<ApestDimension, DimensionTally> = BTreeMap::new();

    for question in questions {
        let Some(value) = by_question
            .get(question.id.as_str())
            .and_then(|response| response.scored_value())
        else {
            continue;
        };

        let contribution = effective_value(question, value) * question.weight;
        total += contribution;
        max_possible += f64::from(SCALE_MAX) * question.weight;

        if let Some(dimension) = question.dimension {
            let tally = tallies.entry(dimension).or_default();
            tally.weighted_sum += contribution;
            tally.weight += question.weight;
        }

        if max_possible.round() >= MAX_TOTAL {
            return Err(InvalidInputError::ScoreOverflow {
                question_id: question.id.clone(),
            });
        }
    }

    let dimension_scores: BTreeMap<ApestDimension, u32> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.weight > 0.0)
        .map(|(dimension, tally)| {
            let average = tally.weighted_sum / tally.weight;
            (dimension, average.round() as u32)
        })
        .collect();

    let (primary_gift, secondary_gift) = rank_gifts(&dimension_scores);

    Ok(ScoringResult {
        total_score: total.round() as u64,
        max_possible_score: max_possible.round() as u64,
        dimension_scores,
        primary_gift,
        secondary_gift,
        completion_percentage: COMPLETED,
    })
}

/// Reverse-scored answers are mirrored on the scale before weighting.
fn effective_value(question: &Question, value: f64) -> f64 {
    if question.reverse_scored {
        f64::from(SCALE_MIN + SCALE_MAX) - value
    } else {
        value
    }
}

/// Top two dimensions by score, ties to the earlier dimension.
fn rank_gifts(
    scores: &BTreeMap<ApestDimension, u32>,
) -> (Option<ApestDimension>, Option<ApestDimension>) {
    let mut gifts = rank_scores(scores).into_iter().map(|(dimension, _)| dimension);
    (gifts.next(), gifts.next())
}
