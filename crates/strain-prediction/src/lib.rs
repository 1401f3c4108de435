//! # strain-prediction
//!
//! Forecasts how a mutation family is likely to evolve next.
//!
//! Decomposed as independent signal detectors (pure functions:
//! history → signal) feeding one synthesizer (signals → ranked predictions
//! with template-generated example content). Thin history degrades each
//! signal to `InsufficientData` instead of failing the whole report.

pub mod engine;
pub mod history;
pub mod signals;
pub mod synthesis;

pub use engine::PredictionEngine;
pub use history::MutationHistory;
pub use signals::{PatternAnalysis, SignalStatus};
pub use synthesis::{Prediction, PredictionCategory, PredictionReport};
