use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use apest_score::assessment::{self, ScoreReport};
use apest_score::output::{self, ScoredRespondent};
use apest_score::scoring::{self, ApestDimension};

// Process exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Human-readable summary
    Table,
    /// Tab-separated values, no headers
    Tsv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one response set against a question set
    Score {
        /// Question set file (.json, or YAML otherwise)
        #[arg(short, long)]
        questions: PathBuf,
        /// Response set file (.json, or YAML otherwise)
        #[arg(short, long)]
        responses: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Include the gift profile (strengths, growth areas, next steps)
        #[arg(long)]
        insights: bool,
        /// Also write the full JSON report to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Validate a question set, and optionally a response set, listing every problem
    Check {
        #[arg(short, long)]
        questions: PathBuf,
        #[arg(short, long)]
        responses: Option<PathBuf>,
    },
    /// Score many response files against one question set
    Batch {
        #[arg(short, long)]
        questions: PathBuf,
        /// Response files or glob patterns (e.g. 'responses/*.json')
        #[arg(required = true)]
        patterns: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Order respondents by this dimension's score, highest first
        #[arg(long, value_parser = parse_dimension)]
        sort_by: Option<ApestDimension>,
    },
    /// Write a config file (defaults to ~/.config/apest-score/config.yaml)
    Init {
        /// Accept every default without prompting
        #[arg(short, long)]
        yes: bool,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "apest-score")]
#[command(about = "Score APEST gift assessments", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/apest-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_dimension(s: &str) -> Result<ApestDimension, String> {
    ApestDimension::parse(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    if let Err(e) = apest_score::telemetry::init(level) {
        eprintln!("Logging setup failed: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { yes, force } = cli.command {
        match apest_score::config::init::run_init(config_path, yes, force) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match apest_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate insight thresholds at startup
    let insight_config = config.effective_insights();
    if let Err(errors) = scoring::validate_insight_config(&insight_config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = config.color.unwrap_or_else(output::should_use_colors);

    let code = match cli.command {
        Commands::Score {
            questions,
            responses,
            format,
            insights,
            out,
        } => {
            let question_set = load_or_exit(assessment::load_questions(&questions));
            let response_set = load_or_exit(assessment::load_responses(&responses));

            let insight_config = insights.then_some(&insight_config);
            let report = match ScoreReport::build(
                &question_set,
                &response_set,
                insight_config,
                chrono::Utc::now(),
            ) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            if let Some(ref out_path) = out {
                if let Err(e) = assessment::save_report(out_path, &report) {
                    eprintln!("Failed to write report: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
                tracing::info!(path = %out_path.display(), "report written");
            }

            match format {
                Format::Table => println!("{}", output::format_report(&report, use_colors)),
                Format::Tsv => {
                    let label = report.respondent.clone().unwrap_or_default();
                    let rows = [ScoredRespondent {
                        label: &label,
                        result: &report.result,
                    }];
                    println!("{}", output::format_tsv(&rows));
                }
                Format::Json => print_json(&report),
            }
            EXIT_SUCCESS
        }
        Commands::Check {
            questions,
            responses,
        } => {
            let question_set = load_or_exit(assessment::load_questions(&questions));
            let response_list = match responses {
                Some(path) => load_or_exit(assessment::load_responses(&path)).responses,
                None => Vec::new(),
            };

            match scoring::validate_inputs(&question_set.questions, &response_list) {
                Ok(()) => {
                    println!(
                        "OK: {} questions, {} responses",
                        question_set.questions.len(),
                        response_list.len()
                    );
                    EXIT_SUCCESS
                }
                Err(errors) => {
                    eprintln!("Found {} problem(s):", errors.len());
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    EXIT_INVALID_INPUT
                }
            }
        }
        Commands::Batch {
            questions,
            patterns,
            format,
            sort_by,
        } => {
            let question_set = load_or_exit(assessment::load_questions(&questions));

            // Reject a broken question set once instead of once per file
            if let Err(e) = scoring::score(&question_set.questions, &[]) {
                eprintln!("Invalid question set: {}", e);
                std::process::exit(EXIT_INVALID_INPUT);
            }

            let paths = load_or_exit(apest_score::batch::expand_patterns(&patterns));
            let entries = match apest_score::batch::score_batch(&question_set, &paths, sort_by) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            let rows: Vec<ScoredRespondent> = entries
                .iter()
                .map(|entry| ScoredRespondent {
                    label: &entry.label,
                    result: &entry.result,
                })
                .collect();

            match format {
                Format::Table => println!("{}", output::format_batch_table(&rows, use_colors)),
                Format::Tsv => println!("{}", output::format_tsv(&rows)),
                Format::Json => {
                    let json: Vec<_> = entries
                        .iter()
                        .map(|entry| {
                            serde_json::json!({
                                "label": entry.label,
                                "path": entry.path.display().to_string(),
                                "result": entry.result,
                            })
                        })
                        .collect();
                    print_json(&json);
                }
            }
            EXIT_SUCCESS
        }
        Commands::Init { .. } => unreachable!("handled before config load"),
    };

    std::process::exit(code);
}

/// Unwrap a file load, exiting with the I/O code on failure.
fn load_or_exit<T>(result: anyhow::Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_IO);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_IO);
        }
    }
}
