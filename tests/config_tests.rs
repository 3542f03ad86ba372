//! Configuration schema and resolution tests.
//!
//! These parse TOML fragments directly rather than touching the filesystem —
//! the layered loader falls back silently on missing files, so the
//! interesting behavior is all in deserialization and settings resolution.

use aidenmon::config::MonitorConfig;
use aidenmon::session::FeedVariant;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn empty_toml_yields_the_builtin_defaults() {
    let cfg: MonitorConfig = toml::from_str("").unwrap();
    let settings = cfg.session_settings();
    assert_eq!(settings.variant, FeedVariant::ThoughtStream);
    assert_eq!(settings.metric_interval_ms, 2000);
    assert_eq!(settings.event_interval_ms, 5000);
    assert_eq!(settings.thought_capacity, 16);
    assert_eq!(settings.series_capacity, 21);
    assert_eq!(settings.log_capacity, 21);
    assert_eq!(settings.context_denominator, 20_000.0);
    assert_eq!(settings.log_probability, 0.3);
    assert_eq!(settings.model_name, "gemini-3-pro-preview");
    assert_eq!(settings.model_version, "v0.9.1-beta");
}

#[test]
fn log_only_variant_switches_the_window_defaults() {
    let cfg: MonitorConfig = toml::from_str(
        r#"
        [session]
        variant = "log-only"
        "#,
    )
    .unwrap();
    let settings = cfg.session_settings();
    assert_eq!(settings.variant, FeedVariant::LogOnly);
    assert_eq!(settings.series_capacity, 31);
    assert_eq!(settings.log_capacity, 51);
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[test]
fn explicit_limits_override_variant_defaults() {
    let cfg: MonitorConfig = toml::from_str(
        r#"
        [session]
        variant = "log-only"

        [limits]
        time_series = 12
        log_lines = 99
        context_denominator = 5000.0
        log_probability = 0.75
        "#,
    )
    .unwrap();
    let settings = cfg.session_settings();
    assert_eq!(settings.series_capacity, 12);
    assert_eq!(settings.log_capacity, 99);
    assert_eq!(settings.context_denominator, 5000.0);
    assert_eq!(settings.log_probability, 0.75);
}

#[test]
fn out_of_range_knobs_are_clamped() {
    let cfg: MonitorConfig = toml::from_str(
        r#"
        [limits]
        context_denominator = 0.0
        log_probability = 7.5
        "#,
    )
    .unwrap();
    let settings = cfg.session_settings();
    assert_eq!(settings.context_denominator, 1.0);
    assert_eq!(settings.log_probability, 1.0);
}

#[test]
fn intervals_and_identity_flow_through() {
    let cfg: MonitorConfig = toml::from_str(
        r#"
        [intervals]
        metric_ms = 250
        event_ms = 1000

        [identity]
        model_name = "local-debug"
        model_version = "v0.0.0"
        "#,
    )
    .unwrap();
    let settings = cfg.session_settings();
    assert_eq!(settings.metric_interval_ms, 250);
    assert_eq!(settings.event_interval_ms, 1000);
    assert_eq!(settings.model_name, "local-debug");
    assert_eq!(settings.model_version, "v0.0.0");
}

#[test]
fn seed_deserializes_when_present() {
    let cfg: MonitorConfig = toml::from_str(
        r#"
        [session]
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(cfg.session.seed, Some(42));
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn config_serializes_and_reparses() {
    let cfg = MonitorConfig::default();
    let toml_str = toml::to_string_pretty(&cfg).unwrap();
    let reparsed: MonitorConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(reparsed.intervals.metric_ms, cfg.intervals.metric_ms);
    assert_eq!(reparsed.session.variant, cfg.session.variant);
}
