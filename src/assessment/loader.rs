use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::scoring::{Question, Response};

/// Question set of one assessment, as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuestionSet {
    #[serde(default)]
    pub name: Option<String>,
    pub questions: Vec<Question>,
}

/// One respondent's answers, as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResponseSet {
    #[serde(default)]
    pub respondent: Option<String>,
    pub responses: Vec<Response>,
}

pub fn load_questions(path: &Path) -> Result<QuestionSet> {
    let set: QuestionSet = load_file(path)?;
    tracing::debug!(path = %path.display(), questions = set.questions.len(), "loaded question set");
    Ok(set)
}

pub fn load_responses(path: &Path) -> Result<ResponseSet> {
    let set: ResponseSet = load_file(path)?;
    tracing::debug!(path = %path.display(), responses = set.responses.len(), "loaded response set");
    Ok(set)
}

/// Parse `.json` files as JSON and everything else as YAML.
fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid JSON", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid YAML", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
