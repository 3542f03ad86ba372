//! Data model for the monitor session.
//!
//! These are the values the dashboard renders: token/cost counters, the
//! static performance and health readouts, and the three feed entry types.
//! Everything is `Serialize` so snapshots can go straight to the JSON API
//! and the `snapshot --format json` printer.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Session token accounting. Counters only ever grow; `context_fill` is a
/// percentage clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenMetrics {
    pub input: u64,
    pub output: u64,
    pub cost: f64,
    pub context_fill: f64,
}

impl Default for TokenMetrics {
    /// The mock's starting point: a session already some way into a task.
    fn default() -> Self {
        Self {
            input: 125_430,
            output: 45_210,
            cost: 1.28,
            context_fill: 12.4,
        }
    }
}

/// Latency breakdown shown under the TTFT card, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatencyBreakdown {
    pub network_ms: u64,
    pub thinking_ms: u64,
    pub io_ms: u64,
}

/// Engine performance readout. Only `tps` is regenerated per tick; the rest
/// keep their boot values for the life of the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub ttft_ms: u64,
    pub tps: f64,
    pub latencies: LatencyBreakdown,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            ttft_ms: 850,
            tps: 45.2,
            latencies: LatencyBreakdown {
                network_ms: 120,
                thinking_ms: 730,
                io_ms: 45,
            },
        }
    }
}

/// Self-repair health readout. Static display values, never mutated after
/// initialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub self_heal_rate: f64,
    pub code_diff_ratio: f64,
    pub lint_fixes: u32,
    pub active_errors: u32,
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self {
            self_heal_rate: 98.4,
            code_diff_ratio: 1.15,
            lint_fixes: 24,
            active_errors: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Feed entries
// ---------------------------------------------------------------------------

/// Reasoning stage of a thought step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Parsing,
    Searching,
    Deciding,
    Executing,
    Repairing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parsing => "PARSING",
            Self::Searching => "SEARCHING",
            Self::Deciding => "DECIDING",
            Self::Executing => "EXECUTING",
            Self::Repairing => "REPAIRING",
        };
        write!(f, "{name}")
    }
}

/// Lifecycle status of a thought step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
    Error,
}

/// One entry in the thought stream. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtStep {
    pub id: String,
    pub timestamp: String,
    pub stage: Stage,
    pub content: String,
    pub status: StepStatus,
}

/// One sample on the performance chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub time: String,
    pub tokens: u64,
    pub cost: f64,
}

/// One terminal log line. The tag stays structured rather than baked into
/// the string, so each renderer can style it its own way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub tag: String,
    pub body: String,
}

impl LogLine {
    pub fn new(tag: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tag, self.body)
    }
}
