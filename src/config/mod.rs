//! Configuration system for aidenmon.
//!
//! Provides a layered configuration hierarchy:
//!
//! 1. **Built-in defaults** — hardcoded in [`schema::MonitorConfig::default()`]
//! 2. **User global config** — `~/.aidenmon/config.toml`
//! 3. **Project local config** — `.aidenmon.toml` in the current working directory
//! 4. **Environment variables** — `AIDENMON_*` overrides (highest precedence)
//!
//! Later layers override earlier ones. Missing or malformed TOML files are
//! silently ignored — a broken config should degrade to defaults, never
//! prevent the monitor from starting.

pub mod schema;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub use schema::MonitorConfig;

use crate::session::FeedVariant;

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the fully resolved monitor configuration.
///
/// Merges all layers in order: defaults → global TOML → project TOML → env
/// vars. This is the primary entry point for all modules that need
/// configuration.
pub fn load() -> MonitorConfig {
    let mut config = MonitorConfig::default();

    // Layer 2: user global config (~/.aidenmon/config.toml)
    if let Some(global) = load_toml_file(global_config_path()) {
        merge_config(&mut config, &global);
    }

    // Layer 3: project local config (.aidenmon.toml)
    if let Some(project) = load_toml_file(project_config_path()) {
        merge_config(&mut config, &project);
    }

    // Layer 4: environment variable overrides
    apply_env_overrides(&mut config);

    config
}

/// Load a TOML config file from the given path (if it exists).
///
/// Returns `None` if the path is `None`, the file doesn't exist, or the
/// content is malformed.
fn load_toml_file(path: Option<PathBuf>) -> Option<MonitorConfig> {
    let path = path?;
    let content = fs::read_to_string(&path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge a loaded config layer into the base config.
///
/// TOML deserialization fills missing fields with defaults, so the overlay
/// fully replaces the base: only explicitly-set values differ from defaults,
/// and those are the ones we want applied.
fn merge_config(base: &mut MonitorConfig, overlay: &MonitorConfig) {
    *base = overlay.clone();
}

// ---------------------------------------------------------------------------
// File paths
// ---------------------------------------------------------------------------

/// Path to the user global config: `~/.aidenmon/config.toml`.
fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aidenmon").join("config.toml"))
}

/// Path to the project local config: `.aidenmon.toml` in the current directory.
fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(".aidenmon.toml"))
}

/// Return the path to the global config file for display/init purposes.
pub fn global_config_file() -> Option<PathBuf> {
    global_config_path()
}

/// Return the path to the project config file for display purposes.
pub fn project_config_file() -> Option<PathBuf> {
    project_config_path()
}

// ---------------------------------------------------------------------------
// Environment variable overrides
// ---------------------------------------------------------------------------

/// Apply environment variable overrides (highest precedence layer).
///
/// Supported variables:
/// - `AIDENMON_VARIANT` — feed variant (`thought-stream`, `log-only`)
/// - `AIDENMON_SEED` — fixed RNG seed for reproducible sessions
/// - `AIDENMON_METRIC_INTERVAL_MS` — metric tick period
/// - `AIDENMON_EVENT_INTERVAL_MS` — event tick period
/// - `AIDENMON_LOG_PROBABILITY` — per-tick log chance (log-only variant)
fn apply_env_overrides(config: &mut MonitorConfig) {
    if let Ok(val) = std::env::var("AIDENMON_VARIANT")
        && let Some(variant) = parse_variant(&val)
    {
        config.session.variant = variant;
    }
    if let Ok(val) = std::env::var("AIDENMON_SEED")
        && let Ok(seed) = val.parse::<u64>()
    {
        config.session.seed = Some(seed);
    }
    if let Ok(val) = std::env::var("AIDENMON_METRIC_INTERVAL_MS")
        && let Ok(ms) = val.parse::<u64>()
    {
        config.intervals.metric_ms = ms;
    }
    if let Ok(val) = std::env::var("AIDENMON_EVENT_INTERVAL_MS")
        && let Ok(ms) = val.parse::<u64>()
    {
        config.intervals.event_ms = ms;
    }
    if let Ok(val) = std::env::var("AIDENMON_LOG_PROBABILITY")
        && let Ok(p) = val.parse::<f64>()
    {
        config.limits.log_probability = Some(p.clamp(0.0, 1.0));
    }
}

/// Parse a feed variant string.
pub fn parse_variant(val: &str) -> Option<FeedVariant> {
    match val.to_ascii_lowercase().as_str() {
        "thought-stream" | "thought_stream" | "thoughtstream" => Some(FeedVariant::ThoughtStream),
        "log-only" | "log_only" | "logonly" => Some(FeedVariant::LogOnly),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Config init
// ---------------------------------------------------------------------------

/// Write the default annotated config to `~/.aidenmon/config.toml`.
///
/// Creates the `~/.aidenmon/` directory if it doesn't exist. Returns an
/// error if the file already exists (use `force = true` to overwrite).
pub fn init_config(force: bool) -> Result<PathBuf> {
    let path = global_config_path().context("could not determine home directory")?;

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create ~/.aidenmon/ directory")?;
    }

    fs::write(&path, MonitorConfig::default_toml()).context("failed to write config file")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parsing_accepts_aliases() {
        assert_eq!(parse_variant("log-only"), Some(FeedVariant::LogOnly));
        assert_eq!(parse_variant("LOG_ONLY"), Some(FeedVariant::LogOnly));
        assert_eq!(
            parse_variant("thought-stream"),
            Some(FeedVariant::ThoughtStream)
        );
        assert_eq!(parse_variant("bogus"), None);
    }

    #[test]
    fn default_toml_round_trips() {
        let parsed: MonitorConfig = toml::from_str(&MonitorConfig::default_toml()).unwrap();
        assert_eq!(parsed.session.variant, FeedVariant::ThoughtStream);
        assert_eq!(parsed.intervals.metric_ms, 2000);
        assert_eq!(parsed.intervals.event_ms, 5000);
        assert!(parsed.limits.thought_steps.is_none());
    }
}
