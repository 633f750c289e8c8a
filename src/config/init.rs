use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config};
use crate::scoring::config::{
    DEFAULT_GROWTH_THRESHOLD, DEFAULT_SPECIALIZATION_SPREAD, DEFAULT_STRENGTH_THRESHOLD,
};
use crate::scoring::{validate_insight_config, InsightConfig};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until the answer parses as a whole number.
fn prompt_number(message: &str, default: u32) -> Result<u32> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("  Invalid: must be a whole number. Try again."),
        }
    }
}

fn ask_insights() -> Result<InsightConfig> {
    loop {
        println!("Dimension scores run from 1 to 5.");
        let config = InsightConfig {
            strength_threshold: Some(prompt_number(
                "Score at or above which a dimension is a strength",
                DEFAULT_STRENGTH_THRESHOLD,
            )?),
            growth_threshold: Some(prompt_number(
                "Score below which a dimension is a growth area",
                DEFAULT_GROWTH_THRESHOLD,
            )?),
            specialization_spread: Some(prompt_number(
                "Highest-to-lowest spread above which a profile reads as specialized",
                DEFAULT_SPECIALIZATION_SPREAD,
            )?),
        };

        match validate_insight_config(&config) {
            Ok(()) => return Ok(config),
            Err(errors) => {
                for error in errors {
                    println!("  Invalid: {}", error);
                }
                println!("  Try again.");
                println!();
            }
        }
    }
}

/// Create a config file.
///
/// With `accept_defaults` the default config is written without prompting.
/// Otherwise the user is asked for each threshold. An existing file is only
/// replaced when `force` is set or the user confirms.
pub fn run_init(path: Option<PathBuf>, accept_defaults: bool, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if config_path.exists() && !force {
        if accept_defaults {
            anyhow::bail!(
                "Config already exists at {}. Pass --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = prompt_yes_no(
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            anyhow::bail!("Aborted, existing config left in place");
        }
    }

    let config = if accept_defaults {
        Config {
            insights: Some(InsightConfig::default()),
            color: None,
        }
    } else {
        println!("apest-score configuration");
        println!("=========================");
        println!();
        let customize =
            prompt_yes_no("Customize gift profile thresholds? (n accepts defaults)", false)?;
        let insights = if customize {
            ask_insights()?
        } else {
            InsightConfig::default()
        };
        let color = if prompt_yes_no("Always use colored output?", false)? {
            Some(true)
        } else {
            None
        };
        Config {
            insights: Some(insights),
            color,
        }
    };

    save_config(&config_path, &config)?;
    tracing::info!(path = %config_path.display(), "config written");
    Ok(config_path)
}
