use std::collections::HashMap;

use super::types::{Question, Response};

/// Standard deviation treated as "no consistency at all" on a 1-5 scale.
pub const MAX_DEVIATION: f64 = 2.0;

/// How uniform a respondent's answers are, from 0.0 (scattered) to 1.0 (flat).
///
/// Population standard deviation of the answered values, scaled against
/// [`MAX_DEVIATION`]. Fewer than two answers counts as fully consistent.
pub fn response_consistency(responses: &[Response]) -> f64 {
    let values: Vec<f64> = responses.iter().filter_map(Response::scored_value).collect();
    if values.len() < 2 {
        return 1.0;
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

    (1.0 - variance.sqrt() / MAX_DEVIATION).max(0.0)
}

/// Percentage of required questions that have an answer, for partial attempts.
/// An assessment without required questions reports 0.
pub fn required_progress(questions: &[Question], responses: &[Response]) -> u8 {
    let answered: HashMap<&str, bool> = responses
        .iter()
        .map(|r| (r.question_id.as_str(), r.scored_value().is_some()))
        .collect();

    let required = questions.iter().filter(|q| q.required);
    let (total, done) = required.fold((0usize, 0usize), |(total, done), q| {
        let is_done = answered.get(q.id.as_str()).copied().unwrap_or(false);
        (total + 1, done + usize::from(is_done))
    });

    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round().min(100.0) as u8
}
