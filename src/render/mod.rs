//! Terminal rendering of a session snapshot.
//!
//! Stateless presentation: every frame is drawn from a [`SessionSnapshot`] —
//! header, KPI cards, token chart, thought stream, terminal log, and the
//! static task pipeline. Colors via `colored`, chart as a unicode sparkline.

use colored::Colorize;

use crate::session::types::{LogLine, StepStatus, ThoughtStep, TimeSeriesPoint};
use crate::session::{FeedVariant, SessionSnapshot};
use crate::utils::{format_number, format_uptime, truncate};

/// The static task-pipeline panel. Presentation-only.
const TASK_PIPELINE: [(&str, StepStatus); 5] = [
    ("Parse DSL Structure", StepStatus::Completed),
    ("Identify Impacted Components", StepStatus::Completed),
    ("Synthesize Logical patch", StepStatus::Active),
    ("Validate & Lint Fixes", StepStatus::Pending),
    ("Final Output Serialization", StepStatus::Pending),
];

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Clear the terminal and move the cursor home. Used between live frames.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

/// Draw one full dashboard frame.
pub fn render(snapshot: &SessionSnapshot) {
    render_header(snapshot);
    render_cards(snapshot);
    render_chart(&snapshot.time_series);
    if snapshot.variant == FeedVariant::ThoughtStream {
        render_thoughts(&snapshot.thoughts);
    }
    render_logs(&snapshot.logs);
    render_pipeline();
    render_footer(snapshot);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn render_header(snapshot: &SessionSnapshot) {
    println!(
        "{} {}   {}",
        "AIDEN".bold(),
        "ENGINE_MONITOR".bold().cyan(),
        "● SYSTEM ACTIVE".green().bold(),
    );
    println!(
        "  {} {} | {}   {} {}   {} {}",
        "MODEL:".dimmed(),
        snapshot.model_name,
        snapshot.model_version,
        "SESSION:".dimmed(),
        snapshot.started_at,
        "UPTIME:".dimmed(),
        format_uptime(snapshot.uptime_secs),
    );
    println!("{}", "═".repeat(72).dimmed());
}

fn render_cards(snapshot: &SessionSnapshot) {
    let tokens = &snapshot.tokens;
    let perf = &snapshot.performance;

    println!(
        "  {:<22} {:<22} {:<14} {}",
        "INPUT TOKENS".dimmed(),
        "OUTPUT TOKENS".dimmed(),
        "SESSION COST".dimmed(),
        "CONTEXT FILL".dimmed(),
    );
    println!(
        "  {:<22} {:<22} {:<14} {} {}",
        format_number(tokens.input).cyan().bold(),
        format_number(tokens.output).blue().bold(),
        format!("${:.2}", tokens.cost).green().bold(),
        format!("{:>5.1}%", tokens.context_fill).yellow().bold(),
        fill_bar(tokens.context_fill),
    );
    println!();
    println!(
        "  {} {}  {} {}  {} net {} / think {} / io {}",
        "TTFT".dimmed(),
        format!("{}ms", perf.ttft_ms).bold(),
        "TPS".dimmed(),
        format!("{:.1}", perf.tps).bold(),
        "LATENCY".dimmed(),
        format!("{}ms", perf.latencies.network_ms),
        format!("{}ms", perf.latencies.thinking_ms),
        format!("{}ms", perf.latencies.io_ms),
    );
    println!();
}

fn render_chart(series: &[TimeSeriesPoint]) {
    println!("{}", "  TOKEN FLOW".bold());
    if series.is_empty() {
        println!("  {}", "waiting for first sample...".dimmed());
        println!();
        return;
    }
    let spark: String = series.iter().map(|p| spark_char(p.tokens, 30, 90)).collect();
    let latest = series.last().map(|p| p.tokens).unwrap_or(0);
    println!("  {} {}", spark.cyan(), format!("{latest} tk/s").dimmed());
    let window_cost: f64 = series.iter().map(|p| p.cost).sum();
    println!(
        "  {} samples, window cost ${:.2}",
        series.len(),
        window_cost
    );
    println!();
}

fn render_thoughts(thoughts: &[ThoughtStep]) {
    println!("{} {}", "  THOUGHT STREAM".bold(), "LIVE".purple().bold());
    for step in thoughts.iter().rev().take(6).rev() {
        let marker = match step.status {
            StepStatus::Completed => "✓".green(),
            StepStatus::Active => "▶".cyan().bold(),
            StepStatus::Pending => "·".dimmed(),
            StepStatus::Error => "✗".red().bold(),
        };
        println!(
            "  {} {} {:<10} {}",
            marker,
            step.timestamp.dimmed(),
            step.stage.to_string().bold(),
            truncate(&step.content, 52),
        );
    }
    println!();
}

fn render_logs(logs: &[LogLine]) {
    println!("{}", "  AIDEN_CLI_RUNTIME".bold());
    for line in logs.iter().rev().take(8).rev() {
        println!(
            "  {} {} {}",
            "$".green().dimmed(),
            format!("[{}]", line.tag).purple(),
            line.body.dimmed(),
        );
    }
    println!();
}

fn render_pipeline() {
    println!("{}", "  TASK PIPELINE".bold());
    for (label, status) in TASK_PIPELINE {
        let (marker, text) = match status {
            StepStatus::Completed => ("●".green(), label.dimmed().strikethrough()),
            StepStatus::Active => ("●".cyan(), label.bold()),
            _ => ("○".dimmed(), label.dimmed()),
        };
        println!("  {marker} {text}");
    }
    println!();
}

fn render_footer(snapshot: &SessionSnapshot) {
    let health = &snapshot.health;
    println!(
        "  {} {:.1}%  {} {:.2}  {} {}  {} {}",
        "SELF-HEAL".dimmed(),
        health.self_heal_rate,
        "DIFF RATIO".dimmed(),
        health.code_diff_ratio,
        "LINT FIXES".dimmed(),
        health.lint_fixes,
        "ACTIVE ERRORS".dimmed(),
        health.active_errors,
    );
    println!(
        "  {}",
        format!(
            "ticks: {} metric / {} event | variant: {}",
            snapshot.metric_ticks, snapshot.event_ticks, snapshot.variant
        )
        .dimmed()
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a sample to a sparkline glyph over the expected `[lo, hi)` range.
/// Out-of-range samples saturate at the edges.
fn spark_char(value: u64, lo: u64, hi: u64) -> char {
    let span = (hi - lo).max(1);
    let clamped = value.clamp(lo, hi.saturating_sub(1)) - lo;
    let idx = (clamped * SPARK_LEVELS.len() as u64 / span) as usize;
    SPARK_LEVELS[idx.min(SPARK_LEVELS.len() - 1)]
}

/// A 20-cell context-fill bar.
fn fill_bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * 20.0).round() as usize;
    let filled = filled.min(20);
    format!(
        "{}{}",
        "█".repeat(filled).yellow(),
        "░".repeat(20 - filled).dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spark_saturates_at_the_edges() {
        assert_eq!(spark_char(0, 30, 90), SPARK_LEVELS[0]);
        assert_eq!(spark_char(30, 30, 90), SPARK_LEVELS[0]);
        assert_eq!(spark_char(500, 30, 90), SPARK_LEVELS[7]);
    }

    #[test]
    fn spark_is_monotone_over_the_range() {
        let mut last = 0usize;
        for v in 30..90 {
            let idx = SPARK_LEVELS
                .iter()
                .position(|&c| c == spark_char(v, 30, 90))
                .unwrap();
            assert!(idx >= last);
            last = idx;
        }
    }

    #[test]
    fn fill_bar_is_always_twenty_cells() {
        for pct in [0.0, 12.4, 50.0, 99.9, 100.0] {
            let bar = fill_bar(pct);
            let cells = bar.chars().filter(|c| *c == '█' || *c == '░').count();
            assert_eq!(cells, 20);
        }
    }
}
