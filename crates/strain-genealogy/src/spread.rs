//! Derived spread views: chronological timeline and velocity metrics.
//! Recomputed on demand, never stored.

use chrono::{DateTime, Duration, Utc};

use strain_core::constants::SPREAD_TIMESPAN_FLOOR_HOURS;
use strain_core::models::{MutationFamily, SpreadAnalysis, TimelineEntry};

/// All nodes in chronological order, original first.
pub fn timeline(family: &MutationFamily) -> Vec<TimelineEntry> {
    let mut entries = vec![TimelineEntry {
        timestamp: family.original.timestamp,
        content_hash: family.original.content_hash.clone(),
        mutation_type: None,
        generation: 0,
    }];
    entries.extend(family.mutations.iter().map(|m| TimelineEntry {
        timestamp: m.timestamp,
        content_hash: m.content_hash.clone(),
        mutation_type: Some(m.mutation_type),
        generation: m.generation,
    }));
    entries.sort_by_key(|e| e.timestamp);
    entries
}

/// Spread metrics over the family lifetime.
///
/// `spread_rate` divides by the lifetime in hours, floored at one hour so a
/// burst inside the first hour does not explode the rate.
pub fn analyze(family: &MutationFamily, now: DateTime<Utc>, window_hours: i64) -> SpreadAnalysis {
    let last = family
        .mutations
        .iter()
        .map(|m| m.timestamp)
        .max()
        .unwrap_or(family.original.timestamp);
    let timespan_hours = ((last - family.original.timestamp).num_seconds() as f64 / 3600.0)
        .max(SPREAD_TIMESPAN_FLOOR_HOURS);
    let spread_rate = family.mutations.len() as f64 / timespan_hours;

    let cutoff = now - Duration::hours(window_hours);
    let active_branches = family
        .mutations
        .iter()
        .filter(|m| m.timestamp >= cutoff)
        .count();
    let mutation_velocity = active_branches as f64 / window_hours as f64;

    SpreadAnalysis {
        spread_rate,
        active_branches,
        mutation_velocity,
    }
}
