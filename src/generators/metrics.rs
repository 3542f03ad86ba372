//! Metric generator — token, cost, and context deltas per tick.
//!
//! Each metric tick draws bounded deltas, applies them additively to the
//! token counters, and produces one chart sample. The context-fill increment
//! is the input delta expressed as a percentage of a fixed context capacity,
//! clamped so the gauge can never leave `[0, 100]`. Pure arithmetic — no
//! I/O, no failure modes.

use crate::generators::random::RandomSource;
use crate::session::types::{PerformanceMetrics, TimeSeriesPoint, TokenMetrics};

/// Tunable bounds for the metric tick.
#[derive(Debug, Clone)]
pub struct MetricGenerator {
    /// Exclusive upper bound for the per-tick input-token delta.
    pub input_delta_max: u64,
    /// Exclusive upper bound for the per-tick output-token delta.
    pub output_delta_max: u64,
    /// Fixed per-tick cost increment, in dollars.
    pub cost_increment: f64,
    /// Context capacity the fill percentage is measured against: an input
    /// delta of `context_denominator` tokens moves the gauge by one point.
    pub context_denominator: f64,
    /// Chart sample bounds (tokens per sample), `[min, max)`.
    pub chart_tokens_min: u64,
    pub chart_tokens_max: u64,
    /// Fixed cost attributed to each chart sample.
    pub chart_cost: f64,
    /// Tokens-per-second readout regenerates in `[tps_base, tps_base + tps_spread)`.
    pub tps_base: f64,
    pub tps_spread: f64,
}

impl Default for MetricGenerator {
    fn default() -> Self {
        Self {
            input_delta_max: 50,
            output_delta_max: 30,
            cost_increment: 0.001,
            context_denominator: 20_000.0,
            chart_tokens_min: 30,
            chart_tokens_max: 90,
            chart_cost: 0.01,
            tps_base: 40.0,
            tps_spread: 15.0,
        }
    }
}

/// Deltas drawn by one metric tick, reported for logging and tests.
#[derive(Debug, Clone, Copy)]
pub struct MetricTick {
    pub input_delta: u64,
    pub output_delta: u64,
}

impl MetricGenerator {
    /// Run one metric tick: draw deltas, apply them to `tokens`, and
    /// regenerate the `tps` readout.
    pub fn tick(
        &self,
        rng: &mut dyn RandomSource,
        tokens: &mut TokenMetrics,
        performance: &mut PerformanceMetrics,
    ) -> MetricTick {
        let input_delta = rng.next_range(0, self.input_delta_max.max(1));
        let output_delta = rng.next_range(0, self.output_delta_max.max(1));

        tokens.input += input_delta;
        tokens.output += output_delta;
        tokens.cost += self.cost_increment;

        let fill_delta = input_delta as f64 / self.context_denominator;
        tokens.context_fill = clamp_pct(tokens.context_fill + fill_delta);

        performance.tps = self.tps_base + rng.next_f64() * self.tps_spread;

        MetricTick {
            input_delta,
            output_delta,
        }
    }

    /// Draw one chart sample for the given clock string.
    pub fn sample_point(&self, rng: &mut dyn RandomSource, time: String) -> TimeSeriesPoint {
        TimeSeriesPoint {
            time,
            tokens: rng.next_range(self.chart_tokens_min, self.chart_tokens_max),
            cost: self.chart_cost,
        }
    }
}

/// Clamp a percentage to `[0, 100]`.
pub fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
