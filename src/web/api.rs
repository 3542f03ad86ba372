//! JSON API handlers for the web dashboard.
//!
//! Each handler corresponds to an API endpoint and returns a
//! `Response<Cursor<Vec<u8>>>` with JSON content. Handlers advance the
//! session from elapsed wall time before reading it, so the dashboard stays
//! live without any background thread.

use std::io::Cursor;
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::Serialize;
use tiny_http::{Response, StatusCode};

use crate::clock::Clock;
use crate::session::EngineSession;

use super::content_type_json;

// ---------------------------------------------------------------------------
// JSON response types
// ---------------------------------------------------------------------------

/// Health API response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    variant: String,
    uptime_secs: u64,
    metric_ticks: u64,
    event_ticks: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /api/snapshot` — advance the session and return the full snapshot.
pub fn get_snapshot(
    session: &Mutex<EngineSession>,
    clock: &dyn Clock,
) -> Result<Response<Cursor<Vec<u8>>>> {
    let now = clock.now();
    let mut session = session
        .lock()
        .map_err(|_| anyhow::anyhow!("session lock poisoned"))?;
    session.advance(now);
    let snapshot = session.snapshot(now);
    json_response(&snapshot)
}

/// `GET /api/health` — liveness summary for the dashboard header.
pub fn get_health(
    session: &Mutex<EngineSession>,
    clock: &dyn Clock,
) -> Result<Response<Cursor<Vec<u8>>>> {
    let now = clock.now();
    let mut session = session
        .lock()
        .map_err(|_| anyhow::anyhow!("session lock poisoned"))?;
    session.advance(now);
    let snapshot = session.snapshot(now);
    json_response(&HealthResponse {
        status: "active",
        variant: snapshot.variant.to_string(),
        uptime_secs: snapshot.uptime_secs,
        metric_ticks: snapshot.metric_ticks,
        event_ticks: snapshot.event_ticks,
    })
}

/// Serialize a value into a 200 JSON response.
fn json_response<T: Serialize>(value: &T) -> Result<Response<Cursor<Vec<u8>>>> {
    let body = serde_json::to_string(value).context("failed to serialize response")?;
    Ok(Response::from_data(body.into_bytes())
        .with_header(content_type_json())
        .with_status_code(StatusCode(200)))
}
