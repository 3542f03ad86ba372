//! The monitor session — owner of all mutable dashboard state.
//!
//! [`EngineSession`] owns the metrics, the three bounded feeds, and the two
//! interval timers, and exposes `tick_metrics` / `tick_event` as the only
//! mutators — no ambient global state. Callers drive it by polling [`EngineSession::advance`]
//! with the current wall-clock time; tests pass fabricated timestamps and a
//! scripted random source.

pub mod types;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::clock::{clock_time, session_time};
use crate::generators::events::{self, EventGenerator};
use crate::generators::metrics::MetricGenerator;
use crate::generators::random::RandomSource;
use crate::history::BoundedHistory;
use crate::timer::IntervalTimer;
use types::{HealthMetrics, LogLine, PerformanceMetrics, ThoughtStep, TimeSeriesPoint, TokenMetrics};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Which event feed the session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedVariant {
    /// Thought steps on the event timer, mirrored into the log (default).
    #[default]
    ThoughtStream,
    /// No thought steps; probabilistic catalog log lines per metric tick.
    LogOnly,
}

impl std::fmt::Display for FeedVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThoughtStream => write!(f, "thought-stream"),
            Self::LogOnly => write!(f, "log-only"),
        }
    }
}

/// Fully resolved knobs for one session. Built from the layered config (or
/// from defaults in tests) before the session is constructed.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub variant: FeedVariant,
    pub metric_interval_ms: u64,
    pub event_interval_ms: u64,
    pub thought_capacity: usize,
    pub series_capacity: usize,
    pub log_capacity: usize,
    pub context_denominator: f64,
    pub log_probability: f64,
    pub model_name: String,
    pub model_version: String,
}

impl SessionSettings {
    /// Defaults for a feed variant. The variants carry different window
    /// sizes; both remain overridable via `[limits]`.
    pub fn for_variant(variant: FeedVariant) -> Self {
        let (series_capacity, log_capacity) = match variant {
            FeedVariant::ThoughtStream => (21, 21),
            FeedVariant::LogOnly => (31, 51),
        };
        Self {
            variant,
            metric_interval_ms: 2000,
            event_interval_ms: 5000,
            thought_capacity: 16,
            series_capacity,
            log_capacity,
            context_denominator: 20_000.0,
            log_probability: 0.3,
            model_name: "gemini-3-pro-preview".to_string(),
            model_version: "v0.9.1-beta".to_string(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::for_variant(FeedVariant::ThoughtStream)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Tick counts fired by one [`EngineSession::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub metric_ticks: u64,
    pub event_ticks: u64,
}

impl AdvanceReport {
    pub fn fired(&self) -> bool {
        self.metric_ticks > 0 || self.event_ticks > 0
    }
}

/// One simulated monitoring session.
pub struct EngineSession {
    settings: SessionSettings,
    tokens: TokenMetrics,
    performance: PerformanceMetrics,
    health: HealthMetrics,
    thoughts: BoundedHistory<ThoughtStep>,
    series: BoundedHistory<TimeSeriesPoint>,
    logs: BoundedHistory<LogLine>,
    started_at: DateTime<Local>,
    metric_timer: IntervalTimer,
    event_timer: IntervalTimer,
    metric_gen: MetricGenerator,
    event_gen: EventGenerator,
    rng: Box<dyn RandomSource>,
    metric_ticks: u64,
    event_ticks: u64,
}

impl EngineSession {
    /// Create a session anchored at `now`, seeded with the boot feeds.
    pub fn new(settings: SessionSettings, rng: Box<dyn RandomSource>, now: DateTime<Local>) -> Self {
        let mut thoughts = BoundedHistory::new(settings.thought_capacity);
        let mut logs = BoundedHistory::new(settings.log_capacity);

        // Boot seed data shown before the first tick fires.
        if settings.variant == FeedVariant::ThoughtStream {
            for step in events::boot_steps() {
                thoughts.push(step);
            }
        }
        for line in events::boot_logs() {
            logs.push(line);
        }

        let metric_gen = MetricGenerator {
            context_denominator: settings.context_denominator,
            ..MetricGenerator::default()
        };
        let event_gen = EventGenerator {
            log_probability: settings.log_probability,
        };

        Self {
            tokens: TokenMetrics::default(),
            performance: PerformanceMetrics::default(),
            health: HealthMetrics::default(),
            thoughts,
            series: BoundedHistory::new(settings.series_capacity),
            logs,
            started_at: now,
            metric_timer: IntervalTimer::new(settings.metric_interval_ms, now),
            event_timer: IntervalTimer::new(settings.event_interval_ms, now),
            metric_gen,
            event_gen,
            rng,
            metric_ticks: 0,
            event_ticks: 0,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// One metric tick: apply token/cost/context deltas, regenerate `tps`,
    /// append a chart sample, and (log-only variant) maybe append a catalog
    /// log line.
    pub fn tick_metrics(&mut self, now: DateTime<Local>) {
        self.metric_gen
            .tick(self.rng.as_mut(), &mut self.tokens, &mut self.performance);

        let point = self
            .metric_gen
            .sample_point(self.rng.as_mut(), clock_time(now));
        self.series.push(point);

        if self.settings.variant == FeedVariant::LogOnly {
            if let Some(line) = self.event_gen.maybe_log(self.rng.as_mut()) {
                self.logs.push(line);
            }
        }

        self.metric_ticks += 1;
    }

    /// One event tick: mint a thought step and mirror it into the log.
    /// No-op in the log-only variant.
    pub fn tick_event(&mut self, now: DateTime<Local>) {
        if self.settings.variant != FeedVariant::ThoughtStream {
            return;
        }
        let step = self.event_gen.make_step(self.rng.as_mut(), clock_time(now));
        self.logs.push(self.event_gen.step_log(&step));
        self.thoughts.push(step);
        self.event_ticks += 1;
    }

    /// Fire every tick due by `now` on both timers. Metric ticks first, then
    /// event ticks — the timers are independent and never contend, there is
    /// only one mutator.
    pub fn advance(&mut self, now: DateTime<Local>) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        for _ in 0..self.metric_timer.due_ticks(now) {
            self.tick_metrics(now);
            report.metric_ticks += 1;
        }
        for _ in 0..self.event_timer.due_ticks(now) {
            self.tick_event(now);
            report.event_ticks += 1;
        }
        report
    }

    /// Serializable copy of the current state for the presentation layer.
    pub fn snapshot(&self, now: DateTime<Local>) -> SessionSnapshot {
        SessionSnapshot {
            model_name: self.settings.model_name.clone(),
            model_version: self.settings.model_version.clone(),
            variant: self.settings.variant,
            started_at: session_time(self.started_at),
            uptime_secs: (now - self.started_at).num_seconds().max(0) as u64,
            metric_ticks: self.metric_ticks,
            event_ticks: self.event_ticks,
            tokens: self.tokens,
            performance: self.performance,
            health: self.health,
            thoughts: self.thoughts.to_vec(),
            time_series: self.series.to_vec(),
            logs: self.logs.to_vec(),
        }
    }

    // Direct accessors for tests and renderers that don't need a full copy.

    pub fn tokens(&self) -> &TokenMetrics {
        &self.tokens
    }

    pub fn performance(&self) -> &PerformanceMetrics {
        &self.performance
    }

    pub fn health(&self) -> &HealthMetrics {
        &self.health
    }

    pub fn thoughts(&self) -> &BoundedHistory<ThoughtStep> {
        &self.thoughts
    }

    pub fn time_series(&self) -> &BoundedHistory<TimeSeriesPoint> {
        &self.series
    }

    pub fn logs(&self) -> &BoundedHistory<LogLine> {
        &self.logs
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Point-in-time copy of the session, ready for JSON or table rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub model_name: String,
    pub model_version: String,
    pub variant: FeedVariant,
    pub started_at: String,
    pub uptime_secs: u64,
    pub metric_ticks: u64,
    pub event_ticks: u64,
    pub tokens: TokenMetrics,
    pub performance: PerformanceMetrics,
    pub health: HealthMetrics,
    pub thoughts: Vec<ThoughtStep>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub logs: Vec<LogLine>,
}
