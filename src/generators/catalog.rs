//! Fixed content catalogs the generators draw from.
//!
//! The feeds are mock data: every thought step and log line is picked
//! uniformly from these constants.

use crate::session::types::Stage;

/// The five reasoning stages, in catalog order.
pub const STAGES: [Stage; 5] = [
    Stage::Parsing,
    Stage::Searching,
    Stage::Deciding,
    Stage::Executing,
    Stage::Repairing,
];

/// Thought-step content lines.
pub const THOUGHT_CONTENTS: [&str; 6] = [
    "Analyzing component dependency graph for Sidebar.tsx...",
    "Detected logic conflict in StateProvider hook implementation.",
    "Searching local codebase for similar architectural patterns...",
    "Synthesizing patch for hydration mismatch in Next.js layout.",
    "Running ESLint check on generated fragments...",
    "Refining reasoning chain based on context constraints.",
];

/// `(tag, message)` pairs for the log-only feed variant.
pub const LOG_MESSAGES: [(&str, &str); 8] = [
    ("SYSTEM", "Heartbeat acknowledged by GenAI Gateway (Region: US-CENTRAL-1)"),
    ("INFO", "Context window compaction pass completed."),
    ("SYSTEM", "Token accounting checkpoint flushed."),
    ("INFO", "Prompt cache warm; reuse ratio nominal."),
    ("NET", "Stream keepalive exchanged with inference endpoint."),
    ("INFO", "Telemetry sample batch emitted."),
    ("SYSTEM", "Sandbox watchdog reports no runaway processes."),
    ("NET", "Latency probe within budget."),
];

/// Boot-time log lines seeded before the first tick.
pub const BOOT_LOGS: [(&str, &str); 3] = [
    ("BOOTSTRAP", "Loading environment variables..."),
    ("SYSTEM", "Connecting to Google GenAI Gateway (Region: US-CENTRAL-1)"),
    ("INFO", "Engine 'Aiden' is now idling, awaiting task dispatch."),
];
