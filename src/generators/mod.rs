//! Mock data generators.
//!
//! Everything the dashboard shows is synthesized here: bounded random deltas
//! for the token counters ([`metrics`]), catalog-drawn thought steps and log
//! lines ([`events`]), with all randomness behind the injectable
//! [`random::RandomSource`] trait.

pub mod catalog;
pub mod events;
pub mod metrics;
pub mod random;

pub use events::EventGenerator;
pub use metrics::MetricGenerator;
pub use random::RandomSource;
