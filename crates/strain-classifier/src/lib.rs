//! # strain-classifier
//!
//! Assigns one mutation-type label to a confirmed parent/child pair using an
//! ordered rule cascade — first matching rule wins, so rule order is part of
//! the contract (a change that is both numeric and emotional is
//! NUMERICAL_CHANGE).

pub mod changes;
pub mod rules;
pub mod scan;

pub use changes::analyze_changes;
pub use rules::{classify, matched_patterns, Rule, RULES};
pub use scan::ChangeScan;
