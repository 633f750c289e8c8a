use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::assessment::ScoreReport;
use crate::scoring::types::SCALE_MAX;
use crate::scoring::{ApestDimension, ProfileInsights, ScoringResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a gift for display, "-" when absent
pub fn format_gift(gift: Option<ApestDimension>) -> String {
    gift.map(|g| g.label().to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Render a dimension score as a fixed-width bar, one block per scale point
/// "████░" for 4 on a 1-5 scale
pub fn format_bar(score: u32) -> String {
    let max = u32::from(SCALE_MAX);
    let filled = score.min(max) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(max as usize - filled))
}

/// Format a 0.0-1.0 ratio as a whole percentage
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Format a single report as a multi-line summary:
/// totals, one row per dimension, gifts, then derived metrics and insights.
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let result = &report.result;
    let mut lines = Vec::new();

    let heading = match (&report.assessment, &report.respondent) {
        (Some(assessment), Some(respondent)) => format!("{} - {}", assessment, respondent),
        (Some(name), None) | (None, Some(name)) => name.clone(),
        (None, None) => "Assessment result".to_string(),
    };
    if use_colors {
        lines.push(heading.bold().to_string());
    } else {
        lines.push(heading);
    }

    lines.push(format!(
        "  Total: {}/{}",
        result.total_score, result.max_possible_score
    ));
    lines.push(String::new());

    for dimension in ApestDimension::ALL {
        let row = match result.dimension_score(dimension) {
            Some(score) => format!("  {:<13} {} {}", dimension.label(), format_bar(score), score),
            None => format!("  {:<13} {} -", dimension.label(), " ".repeat(SCALE_MAX as usize)),
        };
        if use_colors && Some(dimension) == result.primary_gift {
            lines.push(row.green().bold().to_string());
        } else if use_colors && Some(dimension) == result.secondary_gift {
            lines.push(row.cyan().to_string());
        } else if use_colors && result.dimension_score(dimension).is_none() {
            lines.push(row.dimmed().to_string());
        } else {
            lines.push(row);
        }
    }

    lines.push(String::new());
    lines.push(format!("  Primary gift:   {}", format_gift(result.primary_gift)));
    lines.push(format!("  Secondary gift: {}", format_gift(result.secondary_gift)));
    lines.push(format!(
        "  Consistency:    {}",
        format_ratio(report.response_consistency)
    ));
    lines.push(format!("  Required answered: {}%", report.required_progress));

    if let Some(ref insights) = report.insights {
        lines.push(String::new());
        lines.push(format_insights(insights, use_colors));
    }

    lines.join("\n")
}

/// Format a gift profile as wrapped summary plus bulleted sections
pub fn format_insights(insights: &ProfileInsights, use_colors: bool) -> String {
    let width = get_terminal_width().unwrap_or(80).clamp(40, 100);
    let mut lines = wrap(&insights.summary, width - 2)
        .into_iter()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>();

    let complementary: Vec<String> = insights
        .complementary_gifts
        .iter()
        .map(|g| g.label().to_string())
        .collect();

    let sections: [(&str, &[String]); 5] = [
        ("Strengths", &insights.strengths[..]),
        ("Growth areas", &insights.growth_areas[..]),
        ("Next steps", &insights.action_items[..]),
        ("Recommended content", &insights.content_recommendations[..]),
        ("Complementary gifts", &complementary[..]),
    ];

    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        if use_colors {
            lines.push(format!("  {}", title.bold()));
        } else {
            lines.push(format!("  {}", title));
        }
        for item in items {
            lines.push(format!("    - {}", item));
        }
    }

    lines.join("\n")
}

/// Greedy word wrap on whitespace
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A scored respondent for batch display
pub struct ScoredRespondent<'a> {
    pub label: &'a str,
    pub result: &'a ScoringResult,
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format one compact score cell per dimension: "A4 P- E3 S2 T5"
fn format_dimension_cells(result: &ScoringResult) -> String {
    ApestDimension::ALL
        .iter()
        .map(|d| {
            let initial = &d.label()[..1];
            match result.dimension_score(*d) {
                Some(score) => format!("{}{}", initial, score),
                None => format!("{}-", initial),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format respondents as a table with columns: Index, Total, Gifts, Dimensions, Label
/// No headers (minimal format)
/// Total column is right-aligned, 9 chars wide (fits "9999/9999")
pub fn format_batch_table(rows: &[ScoredRespondent], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No responses scored.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let total_width = 9;
    let gifts_width = 25;
    let separator = "  ";

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>2}.", idx + 1);
            let total = format!(
                "{:>width$}",
                format!("{}/{}", row.result.total_score, row.result.max_possible_score),
                width = total_width
            );
            let gifts = format!(
                "{:<width$}",
                format!(
                    "{} / {}",
                    format_gift(row.result.primary_gift),
                    format_gift(row.result.secondary_gift)
                ),
                width = gifts_width
            );
            let cells = format_dimension_cells(row.result);

            let fixed_width =
                index_width + 1 + total_width + gifts_width + cells.len() + separator.len() * 3;
            let label = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_label(row.label, width - fixed_width)
                }
                Some(_) => truncate_label(row.label, 20),
                None => row.label.to_string(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    total.bold(),
                    separator,
                    gifts.green(),
                    separator,
                    cells,
                    separator,
                    label.underline()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, total, separator, gifts, separator, cells, separator, label
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format respondents as tab-separated values for scripting
/// Columns: label, total, max, primary, secondary, then one per dimension
/// (no headers, no colors, empty cell for unscored dimensions)
pub fn format_tsv(rows: &[ScoredRespondent]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    rows.iter()
        .map(|row| {
            let gift = |g: Option<ApestDimension>| g.map(|d| d.as_str()).unwrap_or("");
            let mut fields = vec![
                row.label.to_string(),
                row.result.total_score.to_string(),
                row.result.max_possible_score.to_string(),
                gift(row.result.primary_gift).to_string(),
                gift(row.result.secondary_gift).to_string(),
            ];
            fields.extend(ApestDimension::ALL.iter().map(|d| {
                row.result
                    .dimension_score(*d)
                    .map(|s| s.to_string())
                    .unwrap_or_default()
            }));
            fields.join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
