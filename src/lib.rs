//! APEST gift assessment scoring.
//!
//! [`scoring::score`] turns one respondent's Likert answers into weighted
//! dimension scores and a primary/secondary gift. The other modules load
//! inputs from disk, render results, and drive the `apest-score` binary.

pub mod assessment;
pub mod batch;
pub mod config;
pub mod output;
pub mod scoring;
pub mod telemetry;
