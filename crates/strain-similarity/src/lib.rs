//! # strain-similarity
//!
//! Symmetric content similarity for variant detection.
//!
//! The composite score is lexical Jaccard over canonical significant tokens
//! plus a fixed boost per semantic cluster present in both texts, capped at
//! 1.0. Batch search is a rayon linear scan; clustering is a deterministic
//! greedy single pass.

pub mod engine;
pub mod relatedness;
pub mod search;
pub mod tokens;

pub use engine::SimilarityEngine;
pub use search::{SearchOptions, find_variants, cluster_texts};
