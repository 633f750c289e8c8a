use thiserror::Error;

/// Questions or responses that break a structural invariant of scoring.
///
/// Scoring never returns a partial result alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("no questions to score")]
    NoQuestions,

    #[error("duplicate question id '{question_id}'")]
    DuplicateQuestion { question_id: String },

    #[error(
        "question '{question_id}' has invalid weight {weight} (must be finite and non-negative)"
    )]
    InvalidWeight { question_id: String, weight: f64 },

    #[error("response references unknown question '{question_id}'")]
    OrphanResponse { question_id: String },

    #[error("more than one response for question '{question_id}'")]
    DuplicateResponse { question_id: String },

    #[error(
        "response to question '{question_id}' has value {value}, expected a whole number from 1 to 5"
    )]
    ValueOutOfRange { question_id: String, value: f64 },

    /// Weights so large that the totals no longer fit the result.
    #[error("weight of question '{question_id}' pushes the score totals out of range")]
    ScoreOverflow { question_id: String },
}

impl InvalidInputError {
    /// Question id the violation is attributed to, if any.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            InvalidInputError::NoQuestions => None,
            InvalidInputError::DuplicateQuestion { question_id }
            | InvalidInputError::InvalidWeight { question_id, .. }
            | InvalidInputError::OrphanResponse { question_id }
            | InvalidInputError::DuplicateResponse { question_id }
            | InvalidInputError::ValueOutOfRange { question_id, .. }
            | InvalidInputError::ScoreOverflow { question_id } => Some(question_id),
        }
    }
}
