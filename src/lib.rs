// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod places;
pub mod report;
pub mod sentiment;
pub mod signals;
pub mod website;
pub mod weights;

// ---- Re-exports for stable public API ----
// The two pure-core entry points callers are expected to use:
pub use crate::engine::{ScoreBreakdown, ScoringEngine};
pub use crate::signals::{extract, BusinessRecord, NormalizedSignals};

pub use crate::sentiment::SentimentAnalyzer;
pub use crate::weights::WeightTable;
