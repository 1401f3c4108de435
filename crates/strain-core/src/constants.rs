//! Engine-wide constants. Thresholds are empirically chosen and surfaced
//! through [`crate::config::EngineConfig`] rather than hard-wired at call
//! sites.

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default composite-similarity threshold for variant detection (inclusive).
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Boost added to the composite score per semantic cluster hit in both texts.
pub const CLUSTER_BOOST: f64 = 0.1;

/// Default relatedness threshold when comparing two mutation-type labels.
pub const DEFAULT_LABEL_RELATEDNESS_THRESHOLD: f64 = 0.6;

/// Number of tokens retained in the semantic fingerprint.
pub const SEMANTIC_FINGERPRINT_TOKENS: usize = 20;

/// Tokens this short never count as significant.
pub const MIN_SIGNIFICANT_TOKEN_LEN: usize = 4;

/// Default cap on `find_variants` results.
pub const DEFAULT_MAX_VARIANT_RESULTS: usize = 10;

/// Word-count growth ratio above which a mutation counts as a phrase addition.
pub const PHRASE_ADDITION_RATIO: f64 = 1.3;

/// Shared-word ratio band classified as word substitution.
pub const WORD_SUBSTITUTION_MIN: f64 = 0.7;
pub const WORD_SUBSTITUTION_MAX: f64 = 0.95;

/// Window (hours) used for the "recent" side of velocity trend comparison.
pub const DEFAULT_RECENT_WINDOW_HOURS: i64 = 6;

/// Window (hours) over which mutations count as active branches.
pub const DEFAULT_ACTIVE_BRANCH_WINDOW_HOURS: i64 = 24;

/// Minimum mutation history length before trend signals report data.
pub const MIN_HISTORY_FOR_TRENDS: usize = 3;

/// Floor (hours) applied to a family's timespan when computing spread rate,
/// so a burst of mutations inside the first hour does not divide by ~zero.
pub const SPREAD_TIMESPAN_FLOOR_HOURS: f64 = 1.0;
