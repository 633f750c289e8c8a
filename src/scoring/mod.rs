pub mod config;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod types;
pub mod validation;

pub use config::InsightConfig;
pub use dimension::ApestDimension;
pub use engine::score;
pub use error::InvalidInputError;
pub use insights::{build_profile, ProfileInsights};
pub use metrics::{required_progress, response_consistency};
pub use types::{Question, Response, ScoringResult};
pub use validation::{validate_insight_config, validate_inputs};
