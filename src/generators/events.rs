//! Event generator — thought steps and terminal log lines.
//!
//! The thought-stream variant mints one completed [`ThoughtStep`] per event
//! tick and mirrors it into the log as an `[AIDEN]`-tagged line. The
//! log-only variant instead rolls a probability die on every *metric* tick
//! and, on success, appends a line drawn from the log catalog. Selection is
//! uniform over fixed catalogs; no failure modes.

use crate::generators::catalog;
use crate::generators::random::{self, RandomSource};
use crate::session::types::{LogLine, Stage, StepStatus, ThoughtStep};

/// Tunables for the event feed.
#[derive(Debug, Clone)]
pub struct EventGenerator {
    /// Chance, per metric tick, of appending a catalog line (log-only variant).
    pub log_probability: f64,
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self {
            log_probability: 0.3,
        }
    }
}

impl EventGenerator {
    /// Mint one thought step: uniform stage, uniform content, the given
    /// clock stamp, status `completed`.
    pub fn make_step(&self, rng: &mut dyn RandomSource, timestamp: String) -> ThoughtStep {
        let stage = catalog::STAGES[rng.pick_index(catalog::STAGES.len())];
        let content = catalog::THOUGHT_CONTENTS[rng.pick_index(catalog::THOUGHT_CONTENTS.len())];
        ThoughtStep {
            id: random::step_id(rng),
            timestamp,
            stage,
            content: content.to_string(),
            status: StepStatus::Completed,
        }
    }

    /// The terminal-log mirror of a thought step.
    pub fn step_log(&self, step: &ThoughtStep) -> LogLine {
        LogLine::new("AIDEN", format!("[{}] {}", step.stage, step.content))
    }

    /// Roll the per-tick die; on success, draw one catalog line.
    pub fn maybe_log(&self, rng: &mut dyn RandomSource) -> Option<LogLine> {
        if rng.next_f64() >= self.log_probability {
            return None;
        }
        let (tag, body) = catalog::LOG_MESSAGES[rng.pick_index(catalog::LOG_MESSAGES.len())];
        Some(LogLine::new(tag, body))
    }
}

/// Boot thought steps seeded before the timers start, so the stream opens
/// mid-task instead of empty.
pub fn boot_steps() -> Vec<ThoughtStep> {
    vec![
        ThoughtStep {
            id: "1".into(),
            timestamp: "10:00:01".into(),
            stage: Stage::Parsing,
            content: "Initializing Gemini CLI 3.0 session...".into(),
            status: StepStatus::Completed,
        },
        ThoughtStep {
            id: "2".into(),
            timestamp: "10:00:05".into(),
            stage: Stage::Searching,
            content: "Loading DSL project definition from 'aiden.config.json'...".into(),
            status: StepStatus::Completed,
        },
        ThoughtStep {
            id: "3".into(),
            timestamp: "10:00:10".into(),
            stage: Stage::Deciding,
            content: "Planning engine deployment strategy for high-throughput mode.".into(),
            status: StepStatus::Active,
        },
    ]
}

/// Boot log lines seeded before the timers start.
pub fn boot_logs() -> Vec<LogLine> {
    catalog::BOOT_LOGS
        .iter()
        .map(|(tag, body)| LogLine::new(*tag, *body))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::random::SeededRandom;

    #[test]
    fn steps_come_out_completed_with_catalog_content() {
        let r#gen = EventGenerator::default();
        let mut rng = SeededRandom::new(11);
        for _ in 0..50 {
            let step = r#gen.make_step(&mut rng, "12:00:00".into());
            assert_eq!(step.status, StepStatus::Completed);
            assert_eq!(step.id.len(), 9);
            assert!(catalog::THOUGHT_CONTENTS.contains(&step.content.as_str()));
            assert!(catalog::STAGES.contains(&step.stage));
        }
    }

    #[test]
    fn step_log_carries_stage_and_content() {
        let r#gen = EventGenerator::default();
        let mut rng = SeededRandom::new(2);
        let step = r#gen.make_step(&mut rng, "12:00:00".into());
        let line = r#gen.step_log(&step);
        assert_eq!(line.tag, "AIDEN");
        assert!(line.body.starts_with(&format!("[{}]", step.stage)));
        assert!(line.body.ends_with(&step.content));
    }

    #[test]
    fn log_probability_zero_never_fires() {
        let r#gen = EventGenerator {
            log_probability: 0.0,
        };
        let mut rng = SeededRandom::new(4);
        for _ in 0..100 {
            assert!(r#gen.maybe_log(&mut rng).is_none());
        }
    }

    #[test]
    fn log_probability_one_always_fires() {
        let r#gen = EventGenerator {
            log_probability: 1.0,
        };
        let mut rng = SeededRandom::new(4);
        for _ in 0..100 {
            let line = r#gen.maybe_log(&mut rng).unwrap();
            assert!(catalog::LOG_MESSAGES
                .iter()
                .any(|(tag, body)| *tag == line.tag && *body == line.body));
        }
    }
}
