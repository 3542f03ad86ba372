//! aidenmon — a simulated AIDEN engine-monitor session.
//!
//! Everything on the dashboard is mock data: bounded random deltas applied
//! on timer ticks, catalog-drawn thought steps and log lines, and
//! fixed-capacity history windows behind each scrolling feed. The library
//! exposes the session core; the binary wraps it in a terminal renderer and
//! an embedded web dashboard.

pub mod cli;
pub mod clock;
pub mod config;
pub mod generators;
pub mod history;
pub mod render;
pub mod session;
pub mod timer;
pub mod utils;
pub mod web;
