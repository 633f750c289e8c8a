use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::assessment::{load_responses, QuestionSet};
use crate::scoring::{score, ApestDimension, ScoringResult};

/// One successfully scored response file.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub label: String,
    pub path: PathBuf,
    pub result: ScoringResult,
}

/// Expand glob patterns into a deduplicated, ordered list of files.
/// Patterns without glob metacharacters match themselves.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for pattern in patterns {
        let matches = glob::glob(pattern)
            .with_context(|| format!("Invalid file pattern '{}'", pattern))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Failed to read a match of '{}'", pattern))?;
            if path.is_file() && seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

/// Score every response file against one question set.
///
/// A file that fails to load or score is logged and skipped; the batch only
/// fails when nothing matched or every file failed. With `sort_by` the entries
/// are ordered by that dimension's score, highest first, unscored last.
pub fn score_batch(
    questions: &QuestionSet,
    paths: &[PathBuf],
    sort_by: Option<ApestDimension>,
) -> Result<Vec<BatchEntry>> {
    if paths.is_empty() {
        anyhow::bail!("No response files matched");
    }

    let mut entries = Vec::new();
    for path in paths {
        match score_file(questions, path) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!(path = %path.display(), "skipping: {:#}", e),
        }
    }

    tracing::debug!(scored = entries.len(), files = paths.len(), "batch complete");

    if entries.is_empty() {
        anyhow::bail!("None of the {} response files could be scored", paths.len());
    }

    if let Some(dimension) = sort_by {
        entries.sort_by(|a, b| {
            // Primary: dimension score descending, unscored last
            let by_score = b
                .result
                .dimension_score(dimension)
                .cmp(&a.result.dimension_score(dimension));
            // Tie-breaker: label ascending
            by_score.then_with(|| a.label.cmp(&b.label))
        });
    }

    Ok(entries)
}

fn score_file(questions: &QuestionSet, path: &Path) -> Result<BatchEntry> {
    let responses = load_responses(path)?;
    let result = score(&questions.questions, &responses.responses)
        .with_context(|| format!("Invalid responses in {}", path.display()))?;

    let label = responses.respondent.unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });

    Ok(BatchEntry {
        label,
        path: path.to_path_buf(),
        result,
    })
}
