use std::collections::HashSet;

use super::config::InsightConfig;
use super::error::InvalidInputError;
use super::types::{Question, Response, SCALE_MAX, SCALE_MIN};

/// Check every structural invariant of a scoring input.
/// Returns all violations at once (not just the first), in check order:
/// empty set, then questions, then responses.
pub fn validate_inputs(
    questions: &[Question],
    responses: &[Response],
) -> Result<(), Vec<InvalidInputError>> {
    let mut errors = Vec::new();

    if questions.is_empty() {
        errors.push(InvalidInputError::NoQuestions);
    }

    let mut question_ids = HashSet::new();
    for question in questions {
        if !question_ids.insert(question.id.as_str()) {
            errors.push(InvalidInputError::DuplicateQuestion {
                question_id: question.id.clone(),
            });
        }
        if !question.weight.is_finite() || question.weight < 0.0 {
            errors.push(InvalidInputError::InvalidWeight {
                question_id: question.id.clone(),
                weight: question.weight,
            });
        }
    }

    let mut answered = HashSet::new();
    for response in responses {
        let question_id = response.question_id.as_str();
        if !question_ids.contains(question_id) {
            errors.push(InvalidInputError::OrphanResponse {
                question_id: response.question_id.clone(),
            });
            continue;
        }
        if !answered.insert(question_id) {
            errors.push(InvalidInputError::DuplicateResponse {
                question_id: response.question_id.clone(),
            });
        }
        if let Some(value) = response.scored_value() {
            if !is_scale_value(value) {
                errors.push(InvalidInputError::ValueOutOfRange {
                    question_id: response.question_id.clone(),
                    value,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fail-fast variant used by the engine: the first violation in check order.
pub fn first_violation(
    questions: &[Question],
    responses: &[Response],
) -> Result<(), InvalidInputError> {
    match validate_inputs(questions, responses) {
        Ok(()) => Ok(()),
        Err(mut errors) => Err(errors.swap_remove(0)),
    }
}

/// Whole number on the response scale. Rejects 0, 6, 3.5, NaN.
fn is_scale_value(value: f64) -> bool {
    value.fract() == 0.0 && value >= f64::from(SCALE_MIN) && value <= f64::from(SCALE_MAX)
}

/// Validate insight thresholds at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_insight_config(config: &InsightConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let scale = u32::from(SCALE_MIN)..=u32::from(SCALE_MAX);

    if let Some(strength) = config.strength_threshold {
        if !scale.contains(&strength) {
            errors.push(format!(
                "insights.strength_threshold: {} is outside {}-{}",
                strength, SCALE_MIN, SCALE_MAX
            ));
        }
    }

    if let Some(growth) = config.growth_threshold {
        if !scale.contains(&growth) {
            errors.push(format!(
                "insights.growth_threshold: {} is outside {}-{}",
                growth, SCALE_MIN, SCALE_MAX
            ));
        }
    }

    if config.growth_threshold() > config.strength_threshold() {
        errors.push(format!(
            "insights.growth_threshold: {} must not exceed strength_threshold {}",
            config.growth_threshold(),
            config.strength_threshold()
        ));
    }

    if let Some(spread) = config.specialization_spread {
        let widest = u32::from(SCALE_MAX - SCALE_MIN);
        if spread > widest {
            errors.push(format!(
                "insights.specialization_spread: {} exceeds the widest possible spread {}",
                spread, widest
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
