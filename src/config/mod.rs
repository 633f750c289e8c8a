pub mod init;
mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/apest-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("apest-score"))
}

/// Get the default config file path (~/.config/apest-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            explicit
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Write configuration as YAML, atomically. Creates parent directories.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}
