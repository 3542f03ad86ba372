//! CLI command implementations for the AIDEN monitor.
//!
//! Provides subcommand handlers for:
//! - `aidenmon run` — live dashboard in the terminal
//! - `aidenmon snapshot --ticks N` — advance a session virtually and print it
//! - `aidenmon config show|init|path` — configuration management
//!
//! `aidenmon web` lives in [`crate::web`]; this module only routes to it.

use std::thread;
use std::time::{Duration as StdDuration, Instant};

use anyhow::Result;
use chrono::Duration;
use colored::Colorize;

use crate::clock::{Clock, SystemClock};
use crate::config;
use crate::generators::random;
use crate::render;
use crate::session::{EngineSession, FeedVariant, SessionSnapshot};
use crate::utils::{format_number, truncate};

/// Output format for the snapshot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str_opt(s: Option<&str>) -> Self {
        match s {
            Some("json") => Self::Json,
            Some("csv") => Self::Csv,
            _ => Self::Table,
        }
    }
}

/// CLI overrides applied on top of the layered config.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOverrides {
    pub seed: Option<u64>,
    pub variant: Option<FeedVariant>,
}

/// Build a session from config plus CLI overrides, anchored at `now`.
fn build_session(overrides: SessionOverrides, now: chrono::DateTime<chrono::Local>) -> EngineSession {
    let mut cfg = config::load();
    if let Some(variant) = overrides.variant {
        cfg.session.variant = variant;
    }
    let seed = overrides.seed.or(cfg.session.seed);
    let settings = cfg.session_settings();
    EngineSession::new(settings, random::make_source(seed), now)
}

// ---------------------------------------------------------------------------
// aidenmon run
// ---------------------------------------------------------------------------

/// Poll granularity for the live loop. Fine enough that ticks land close to
/// their deadlines, coarse enough to stay idle between them.
const POLL_MS: u64 = 200;

/// Drive a live session, redrawing the dashboard whenever a tick fires.
///
/// Runs until `duration_secs` elapses, or forever (Ctrl+C) when it is
/// `None`. The loop is the session's only mutator: it polls
/// [`EngineSession::advance`] with the real clock and re-renders on change.
pub fn run_live(duration_secs: Option<u64>, overrides: SessionOverrides) -> Result<()> {
    let clock = SystemClock;
    let mut session = build_session(overrides, clock.now());

    let started = Instant::now();
    let deadline = duration_secs.map(StdDuration::from_secs);

    render::clear_screen();
    render::render(&session.snapshot(clock.now()));

    loop {
        if let Some(limit) = deadline
            && started.elapsed() >= limit
        {
            break;
        }
        thread::sleep(StdDuration::from_millis(POLL_MS));

        let now = clock.now();
        if session.advance(now).fired() {
            render::clear_screen();
            render::render(&session.snapshot(now));
        }
    }

    // Leave a final frame on screen with a clean shutdown note.
    println!();
    println!("{}", "session stopped — timers cleared".dimmed());
    Ok(())
}

// ---------------------------------------------------------------------------
// aidenmon snapshot
// ---------------------------------------------------------------------------

/// Advance a fresh session through `ticks` metric periods of virtual time
/// and print the result. No wall-clock waiting: the clock is stepped one
/// metric period at a time, so event ticks fire at their configured ratio.
pub fn run_snapshot(ticks: u64, format: OutputFormat, overrides: SessionOverrides) -> Result<()> {
    let start = SystemClock.now();
    let mut session = build_session(overrides, start);

    let period = session.settings().metric_interval_ms as i64;
    let mut now = start;
    for _ in 0..ticks {
        now += Duration::milliseconds(period);
        session.advance(now);
    }

    let snapshot = session.snapshot(now);
    match format {
        OutputFormat::Json => print_snapshot_json(&snapshot)?,
        OutputFormat::Csv => print_snapshot_csv(&snapshot),
        OutputFormat::Table => print_snapshot_table(&snapshot),
    }
    Ok(())
}

fn print_snapshot_table(snapshot: &SessionSnapshot) {
    println!("{}", "AIDEN Session Snapshot".bold().cyan());
    println!("{}", "=".repeat(60));
    println!();

    println!(
        "  {} {} | {}",
        "Model:      ".bold(),
        snapshot.model_name,
        snapshot.model_version
    );
    println!("  {} {}", "Started:    ".bold(), snapshot.started_at);
    println!(
        "  {} {} metric / {} event",
        "Ticks:      ".bold(),
        snapshot.metric_ticks,
        snapshot.event_ticks
    );
    println!("  {} {}", "Variant:    ".bold(), snapshot.variant);
    println!();

    println!("{}", "Token Metrics".bold().cyan());
    println!(
        "  input {}  output {}  cost ${:.3}  context {:.1}%",
        format_number(snapshot.tokens.input),
        format_number(snapshot.tokens.output),
        snapshot.tokens.cost,
        snapshot.tokens.context_fill,
    );
    println!();

    println!("{}", "Performance".bold().cyan());
    let perf = &snapshot.performance;
    println!(
        "  ttft {}ms  tps {:.1}  latency net/think/io {}/{}/{}ms",
        perf.ttft_ms,
        perf.tps,
        perf.latencies.network_ms,
        perf.latencies.thinking_ms,
        perf.latencies.io_ms,
    );
    println!();

    if !snapshot.thoughts.is_empty() {
        println!("{}", "Thought Stream (most recent)".bold().cyan());
        for (i, step) in snapshot.thoughts.iter().rev().take(5).rev().enumerate() {
            let line = format!(
                "  {} {:<10} {}",
                step.timestamp,
                step.stage.to_string(),
                truncate(&step.content, 48)
            );
            if i % 2 == 0 {
                println!("{line}");
            } else {
                println!("{}", line.dimmed());
            }
        }
        println!();
    }

    println!("{}", "Terminal Log (tail)".bold().cyan());
    for line in snapshot.logs.iter().rev().take(5).rev() {
        println!("  [{}] {}", line.tag, truncate(&line.body, 56));
    }
}

fn print_snapshot_json(snapshot: &SessionSnapshot) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

/// CSV output covers the chart window — the only tabular series in the
/// snapshot.
fn print_snapshot_csv(snapshot: &SessionSnapshot) {
    println!("time,tokens,cost");
    for point in &snapshot.time_series {
        println!("{},{},{}", point.time, point.tokens, point.cost);
    }
}

// ---------------------------------------------------------------------------
// aidenmon config show | init | path
// ---------------------------------------------------------------------------

/// Show the effective (merged) configuration as TOML.
pub fn run_config_show() -> Result<()> {
    let cfg = config::load();
    let toml_str = toml::to_string_pretty(&cfg)?;
    println!("{}", "Effective aidenmon Configuration".bold().cyan());
    println!("{}", "=".repeat(50));
    println!();
    println!("{toml_str}");

    let global_exists = config::global_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);
    let project_exists = config::project_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);
    println!(
        "  {} global={} project={}",
        "Sources:".dimmed(),
        if global_exists { "yes" } else { "no" },
        if project_exists { "yes" } else { "no" },
    );
    Ok(())
}

/// Write the default annotated config file.
pub fn run_config_init(force: bool) -> Result<()> {
    let path = config::init_config(force)?;
    println!(
        "{} Config written to {}",
        "✓".green().bold(),
        path.display()
    );
    Ok(())
}

/// Print the config search paths.
pub fn run_config_path() -> Result<()> {
    if let Some(path) = config::global_config_file() {
        println!("global:  {}", path.display());
    }
    if let Some(path) = config::project_config_file() {
        println!("project: {}", path.display());
    }
    Ok(())
}
