//! Configuration schema and defaults for the monitor.
//!
//! Defines the TOML-serializable configuration structure with all sections:
//! `[session]`, `[intervals]`, `[limits]`, and `[identity]`.
//!
//! Every field has a sensible built-in default. Users only need to set the
//! values they want to override. The `[limits]` fields are optional because
//! their defaults depend on the selected feed variant.

use serde::{Deserialize, Serialize};

use crate::session::{FeedVariant, SessionSettings};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level monitor configuration.
///
/// Maps directly to the `~/.aidenmon/config.toml` and `.aidenmon.toml` file
/// schemas. All sections and fields are optional — missing values fall back
/// to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub session: SessionConfig,
    pub intervals: IntervalsConfig,
    pub limits: LimitsConfig,
    pub identity: IdentityConfig,
}

impl MonitorConfig {
    /// Resolve the layered config into concrete session settings.
    ///
    /// Variant-dependent defaults apply first, then any explicit `[limits]`
    /// values override them.
    pub fn session_settings(&self) -> SessionSettings {
        let mut settings = SessionSettings::for_variant(self.session.variant);
        settings.metric_interval_ms = self.intervals.metric_ms;
        settings.event_interval_ms = self.intervals.event_ms;
        if let Some(cap) = self.limits.thought_steps {
            settings.thought_capacity = cap;
        }
        if let Some(cap) = self.limits.time_series {
            settings.series_capacity = cap;
        }
        if let Some(cap) = self.limits.log_lines {
            settings.log_capacity = cap;
        }
        if let Some(denom) = self.limits.context_denominator {
            settings.context_denominator = denom.max(1.0);
        }
        if let Some(p) = self.limits.log_probability {
            settings.log_probability = p.clamp(0.0, 1.0);
        }
        settings.model_name = self.identity.model_name.clone();
        settings.model_version = self.identity.model_version.clone();
        settings
    }

    /// The annotated default config written by `aidenmon config init`.
    pub fn default_toml() -> String {
        r#"# aidenmon configuration
# All values shown are the built-in defaults. Capacities left commented out
# follow the selected feed variant (thought-stream: 21/21, log-only: 31/51).

[session]
# Feed variant: "thought-stream" or "log-only"
variant = "thought-stream"
# Uncomment for reproducible sessions
# seed = 42

[intervals]
# Metric tick period (milliseconds)
metric_ms = 2000
# Event tick period (milliseconds)
event_ms = 5000

[limits]
# thought_steps = 16
# time_series = 21
# log_lines = 21
# context_denominator = 20000.0
# log_probability = 0.3

[identity]
model_name = "gemini-3-pro-preview"
model_version = "v0.9.1-beta"
"#
        .to_string()
    }
}

// ---------------------------------------------------------------------------
// [session]
// ---------------------------------------------------------------------------

/// Session-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Which event feed the session runs.
    pub variant: FeedVariant,
    /// Fixed RNG seed for reproducible sessions. Unset means thread RNG.
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// [intervals]
// ---------------------------------------------------------------------------

/// Timer periods, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalsConfig {
    /// Metric tick period.
    pub metric_ms: u64,
    /// Event (thought step) tick period.
    pub event_ms: u64,
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        Self {
            metric_ms: 2000,
            event_ms: 5000,
        }
    }
}

// ---------------------------------------------------------------------------
// [limits]
// ---------------------------------------------------------------------------

/// Buffer capacities and generator bounds. Unset values follow the feed
/// variant's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Thought-stream window (default 16).
    pub thought_steps: Option<usize>,
    /// Chart window (default 21, log-only 31).
    pub time_series: Option<usize>,
    /// Terminal log window (default 21, log-only 51).
    pub log_lines: Option<usize>,
    /// Context capacity the fill gauge is measured against (default 20000).
    pub context_denominator: Option<f64>,
    /// Per-metric-tick log chance in the log-only variant (default 0.3).
    pub log_probability: Option<f64>,
}

// ---------------------------------------------------------------------------
// [identity]
// ---------------------------------------------------------------------------

/// Strings shown in the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub model_name: String,
    pub model_version: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            model_name: "gemini-3-pro-preview".to_string(),
            model_version: "v0.9.1-beta".to_string(),
        }
    }
}
