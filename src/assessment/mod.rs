pub mod loader;
pub mod report;

pub use loader::{load_questions, load_responses, QuestionSet, ResponseSet};
pub use report::{save_report, ScoreReport};
