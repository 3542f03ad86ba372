//! Session-level behavior: tick arithmetic, clamping, variants, timers.

use chrono::{DateTime, Duration, Local, TimeZone};

use aidenmon::generators::random::{RandomSource, SeededRandom};
use aidenmon::session::{EngineSession, FeedVariant, SessionSettings};

fn start() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 5, 20, 10, 0, 0).unwrap()
}

fn seeded_session(settings: SessionSettings, seed: u64) -> EngineSession {
    EngineSession::new(settings, Box::new(SeededRandom::new(seed)), start())
}

/// A random source that replays a fixed script. `next_range` returns the
/// scripted value clamped into the requested range; `next_f64` pops from a
/// separate float script.
struct ScriptedRandom {
    ints: Vec<u64>,
    floats: Vec<f64>,
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.floats.is_empty() {
            0.5
        } else {
            self.floats.remove(0)
        }
    }

    fn next_range(&mut self, lo: u64, hi: u64) -> u64 {
        let raw = if self.ints.is_empty() {
            lo
        } else {
            self.ints.remove(0)
        };
        raw.clamp(lo, hi.saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Metric ticks
// ---------------------------------------------------------------------------

#[test]
fn one_tick_moves_input_within_the_delta_range() {
    let mut session = seeded_session(SessionSettings::default(), 1);
    session.tick_metrics(start());
    let input = session.tokens().input;
    assert!((125_430..125_480).contains(&input), "input={input}");
    let output = session.tokens().output;
    assert!((45_210..45_240).contains(&output), "output={output}");
}

#[test]
fn counters_are_monotonically_non_decreasing() {
    let mut session = seeded_session(SessionSettings::default(), 2);
    let mut now = start();
    let (mut input, mut output, mut cost) = (0u64, 0u64, 0.0f64);
    for _ in 0..500 {
        now += Duration::seconds(2);
        session.tick_metrics(now);
        let t = session.tokens();
        assert!(t.input >= input && t.output >= output && t.cost >= cost);
        input = t.input;
        output = t.output;
        cost = t.cost;
    }
}

#[test]
fn context_fill_never_leaves_the_percentage_range() {
    let mut settings = SessionSettings::default();
    // A tiny denominator makes every tick try to overshoot the gauge.
    settings.context_denominator = 1.0;
    let mut session = seeded_session(settings, 3);
    let mut now = start();
    for _ in 0..200 {
        now += Duration::seconds(2);
        session.tick_metrics(now);
        let fill = session.tokens().context_fill;
        assert!((0.0..=100.0).contains(&fill), "fill={fill}");
    }
    assert_eq!(session.tokens().context_fill, 100.0);
}

#[test]
fn each_metric_tick_appends_one_chart_sample() {
    let settings = SessionSettings::default();
    let cap = settings.series_capacity;
    let mut session = seeded_session(settings, 4);
    let mut now = start();
    for expected in 1..=cap {
        now += Duration::seconds(2);
        session.tick_metrics(now);
        assert_eq!(session.time_series().len(), expected);
    }
    // Window full — length stays pinned at capacity.
    for _ in 0..10 {
        now += Duration::seconds(2);
        session.tick_metrics(now);
        assert_eq!(session.time_series().len(), cap);
    }
}

#[test]
fn chart_samples_carry_the_tick_clock() {
    let mut session = seeded_session(SessionSettings::default(), 5);
    let now = Local.with_ymd_and_hms(2026, 5, 20, 14, 30, 9).unwrap();
    session.tick_metrics(now);
    assert_eq!(session.time_series().latest().unwrap().time, "14:30:09");
}

// ---------------------------------------------------------------------------
// Event ticks and variants
// ---------------------------------------------------------------------------

#[test]
fn thought_stream_caps_at_its_window() {
    let settings = SessionSettings::default();
    assert_eq!(settings.thought_capacity, 16);
    let mut session = seeded_session(settings, 6);
    let mut now = start();
    for _ in 0..40 {
        now += Duration::seconds(5);
        session.tick_event(now);
    }
    assert_eq!(session.thoughts().len(), 16);
    // The boot steps were evicted long ago; everything left is generated.
    assert!(session.thoughts().iter().all(|s| s.id.len() == 9));
}

#[test]
fn event_ticks_mirror_into_the_log() {
    let mut session = seeded_session(SessionSettings::default(), 7);
    let logs_before = session.logs().len();
    session.tick_event(start());
    assert_eq!(session.logs().len(), logs_before + 1);

    let line = session.logs().latest().unwrap();
    let step = session.thoughts().latest().unwrap();
    assert_eq!(line.tag, "AIDEN");
    assert!(line.body.contains(&step.stage.to_string()));
    assert!(line.body.contains(&step.content));
}

#[test]
fn log_only_variant_produces_no_thought_steps() {
    let settings = SessionSettings::for_variant(FeedVariant::LogOnly);
    assert_eq!(settings.log_capacity, 51);
    assert_eq!(settings.series_capacity, 31);
    let mut session = seeded_session(settings, 8);
    let mut now = start();
    for _ in 0..20 {
        now += Duration::seconds(5);
        session.tick_event(now);
    }
    assert!(session.thoughts().is_empty());
}

#[test]
fn sixty_certain_appends_fill_a_fifty_line_log_exactly() {
    let mut settings = SessionSettings::for_variant(FeedVariant::LogOnly);
    settings.log_capacity = 50;
    settings.log_probability = 1.0;
    let mut session = seeded_session(settings, 9);

    let mut now = start();
    for _ in 0..60 {
        now += Duration::seconds(2);
        session.tick_metrics(now);
    }
    // 3 boot lines + 60 appends, capped at 50: the boots and the oldest
    // 13 generated lines are gone.
    assert_eq!(session.logs().len(), 50);
    assert!(session.logs().iter().all(|l| l.tag != "BOOTSTRAP"));
}

#[test]
fn zero_probability_means_the_log_only_feed_stays_at_boot() {
    let mut settings = SessionSettings::for_variant(FeedVariant::LogOnly);
    settings.log_probability = 0.0;
    let mut session = seeded_session(settings, 10);
    let mut now = start();
    for _ in 0..50 {
        now += Duration::seconds(2);
        session.tick_metrics(now);
    }
    assert_eq!(session.logs().len(), 3);
}

// ---------------------------------------------------------------------------
// Advance / timers
// ---------------------------------------------------------------------------

#[test]
fn advance_fires_timers_at_their_configured_ratio() {
    let mut session = seeded_session(SessionSettings::default(), 11);
    // 10 s elapsed: 5 metric periods (2 s) and 2 event periods (5 s).
    let report = session.advance(start() + Duration::seconds(10));
    assert_eq!(report.metric_ticks, 5);
    assert_eq!(report.event_ticks, 2);
}

#[test]
fn advance_before_the_first_period_is_a_no_op() {
    let mut session = seeded_session(SessionSettings::default(), 12);
    let report = session.advance(start() + Duration::seconds(1));
    assert!(!report.fired());
    assert_eq!(session.time_series().len(), 0);
}

#[test]
fn stalled_caller_catches_up_without_dropping_ticks() {
    let mut session = seeded_session(SessionSettings::default(), 13);
    let mut total = 0;
    // Irregular polling: the tick count still tracks elapsed time.
    for secs in [3, 7, 8, 20, 21] {
        total += session.advance(start() + Duration::seconds(secs)).metric_ticks;
    }
    assert_eq!(total, 10); // 21 s / 2 s per metric tick
}

#[test]
fn snapshot_reflects_uptime_and_tick_counts() {
    let mut session = seeded_session(SessionSettings::default(), 14);
    let now = start() + Duration::seconds(10);
    session.advance(now);
    let snapshot = session.snapshot(now);
    assert_eq!(snapshot.uptime_secs, 10);
    assert_eq!(snapshot.metric_ticks, 5);
    assert_eq!(snapshot.event_ticks, 2);
    assert_eq!(snapshot.started_at, "2026-05-20 10:00:00");
    assert_eq!(snapshot.time_series.len(), 5);
}

// ---------------------------------------------------------------------------
// Determinism and scripted draws
// ---------------------------------------------------------------------------

#[test]
fn equal_seeds_give_identical_sessions() {
    let mut a = seeded_session(SessionSettings::default(), 99);
    let mut b = seeded_session(SessionSettings::default(), 99);
    let now = start() + Duration::seconds(60);
    a.advance(now);
    b.advance(now);
    let ja = serde_json::to_string(&a.snapshot(now)).unwrap();
    let jb = serde_json::to_string(&b.snapshot(now)).unwrap();
    assert_eq!(ja, jb);
}

#[test]
fn scripted_draws_land_exactly_where_directed() {
    let rng = ScriptedRandom {
        // input delta, output delta, chart tokens
        ints: vec![49, 29, 88],
        floats: vec![0.0], // tps draw → exactly 40.0
    };
    let mut session = EngineSession::new(SessionSettings::default(), Box::new(rng), start());
    session.tick_metrics(start());

    assert_eq!(session.tokens().input, 125_430 + 49);
    assert_eq!(session.tokens().output, 45_210 + 29);
    assert_eq!(session.performance().tps, 40.0);
    assert_eq!(session.time_series().latest().unwrap().tokens, 88);
}

#[test]
fn performance_and_health_stay_static_apart_from_tps() {
    let mut session = seeded_session(SessionSettings::default(), 15);
    let health_before = *session.health();
    session.advance(start() + Duration::seconds(120));

    let perf = session.performance();
    assert_eq!(perf.ttft_ms, 850);
    assert_eq!(perf.latencies.network_ms, 120);
    assert_eq!(perf.latencies.thinking_ms, 730);
    assert_eq!(perf.latencies.io_ms, 45);

    let health = session.health();
    assert_eq!(health.self_heal_rate, health_before.self_heal_rate);
    assert_eq!(health.lint_fixes, health_before.lint_fixes);
    assert_eq!(health.active_errors, health_before.active_errors);
}
