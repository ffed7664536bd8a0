//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. An explicit path (`--config`) always wins
//! 2. Otherwise, attempts to load from environment variables
//! 3. If incomplete, falls back to probing for a config file
//! 4. Supports JSON, TOML and INI (`.conf`/`.ini`) formats
//!
//! Every loaded configuration goes through [`validate`].
//!
//! ## Environment Variables
//! - `HARVESTMINE_HARVEST_URL`: Harvest account URL
//! - `HARVESTMINE_HARVEST_EMAIL`: Harvest login
//! - `HARVESTMINE_HARVEST_CLIENT`: Harvest client whose entries are synced
//! - `HARVESTMINE_HARVEST_ACTIVITIES`: Comma-separated activity names
//! - `HARVESTMINE_REDMINE_URL`: Redmine base URL
//! - `HARVESTMINE_REDMINE_KEY`: Redmine API key
//! - `HARVESTMINE_REDMINE_DEFAULT_TICKET`: Fallback issue number
//! - `HARVESTMINE_REDMINE_DEFAULT_ACTIVITY`: Optional, defaults to `Development`
//! - `HARVESTMINE_REDMINE_ROUND_TIME`: Optional rounding step in hours
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./harvestmine.{toml,json}`, `./rm_harvest.{toml,json,conf}`
//! 2. The same names in the parent directory
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use harvestmine_domain::constants::DEFAULT_ACTIVITY;
use harvestmine_domain::{split_activities, Config, HarvestConfig, RedmineConfig, Result, SyncError};
use ini::Ini;
use url::Url;

const CONFIG_FILE_NAMES: [&str; 5] = [
    "harvestmine.toml",
    "harvestmine.json",
    "rm_harvest.toml",
    "rm_harvest.json",
    "rm_harvest.conf",
];

/// Load configuration with automatic fallback strategy
///
/// An explicit `path` is loaded directly. Without one, environment
/// variables are tried first; if any required variable is missing the
/// loader falls back to probing for a config file.
///
/// # Errors
/// Returns `SyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or fail validation
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match load_from_env() {
            Ok(config) => {
                tracing::info!("Configuration loaded from environment variables");
                config
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load from environment, trying file");
                load_from_file(None)?
            }
        },
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `SyncError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    from_settings(
        |section, key| non_blank(std::env::var(env_key(section, key)).ok()),
        |section, key| {
            format!("Missing required environment variable: {}", env_key(section, key))
        },
    )
}

/// Build a [`Config`] from flat `section`/`key` string settings
///
/// Shared by the environment and INI sources, where every value is text.
fn from_settings<G, M>(get: G, missing: M) -> Result<Config>
where
    G: Fn(&str, &str) -> Option<String>,
    M: Fn(&str, &str) -> String,
{
    let required = |section: &str, key: &str| {
        get(section, key).ok_or_else(|| SyncError::Config(missing(section, key)))
    };

    let harvest = HarvestConfig {
        url: required("harvest", "url")?,
        email: required("harvest", "email")?,
        client: required("harvest", "client")?,
        activities: split_activities(&required("harvest", "activities")?),
    };

    let default_ticket = required("redmine", "default_ticket")?
        .parse::<u32>()
        .map_err(|e| SyncError::Config(format!("Invalid default ticket: {e}")))?;

    let round_time = get("redmine", "round_time")
        .map(|s| s.parse::<f64>().map_err(|e| SyncError::Config(format!("Invalid round time: {e}"))))
        .transpose()?;

    let redmine = RedmineConfig {
        url: required("redmine", "url")?,
        key: required("redmine", "key")?,
        default_ticket,
        default_activity: get("redmine", "default_activity")
            .unwrap_or_else(|| DEFAULT_ACTIVITY.to_string()),
        round_time,
    };

    Ok(Config { harvest, redmine })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports JSON, TOML and INI formats (detected by file extension).
///
/// # Errors
/// Returns `SyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SyncError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SyncError::Config(
                "No config file found and HARVESTMINE_* environment variables are incomplete"
                    .to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SyncError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json`, `.toml`, or `.conf`/`.ini`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SyncError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SyncError::Config(format!("Invalid JSON format: {e}"))),
        "conf" | "ini" => parse_ini(contents),
        _ => Err(SyncError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Parse an INI file with unquoted values, as `rm_harvest.conf` is written
fn parse_ini(contents: &str) -> Result<Config> {
    let ini = Ini::load_from_str(contents)
        .map_err(|e| SyncError::Config(format!("Invalid INI format: {e}")))?;

    from_settings(
        |section, key| non_blank(ini.get_from(Some(section), key).map(str::to_string)),
        |section, key| format!("Missing required setting '{key}' in [{section}]"),
    )
}

/// Check the semantic constraints serde cannot express
///
/// # Errors
/// Returns `SyncError::Config` naming the first offending field.
pub fn validate(config: &Config) -> Result<()> {
    check_url("harvest.url", &config.harvest.url)?;
    check_url("redmine.url", &config.redmine.url)?;

    if config.harvest.client.trim().is_empty() {
        return Err(SyncError::Config("harvest.client must not be empty".into()));
    }
    if config.harvest.activities.is_empty() {
        return Err(SyncError::Config("harvest.activities must list at least one activity".into()));
    }
    if config.redmine.key.trim().is_empty() {
        return Err(SyncError::Config("redmine.key must not be empty".into()));
    }
    if let Some(step) = config.redmine.round_time {
        if !step.is_finite() || step <= 0.0 {
            return Err(SyncError::Config(format!(
                "redmine.round_time must be greater than zero, got {step}"
            )));
        }
    }

    Ok(())
}

fn check_url(field: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| SyncError::Config(format!("{field} is not a valid URL ({raw}): {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SyncError::Config(format!("{field} must use http or https, got {raw}")));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its parent, then the executable's
/// directory for any of the known file names.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(".."));
        dirs.insert(0, cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    candidates_in(&dirs).into_iter().find(|path| path.exists())
}

fn candidates_in(dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter().flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name))).collect()
}

/// `HARVESTMINE_REDMINE_DEFAULT_TICKET` for `("redmine", "default_ticket")`
fn env_key(section: &str, key: &str) -> String {
    format!("HARVESTMINE_{}_{}", section.to_uppercase(), key.to_uppercase())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
