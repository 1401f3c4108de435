//! Prediction engine: resolves a family, derives its mutation history,
//! runs the signal detectors, and synthesizes a ranked report. Reports are
//! cached per (family, mutation count), so a family invalidates its own
//! cache entry simply by growing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use moka::sync::Cache;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use strain_core::config::PredictionConfig;
use strain_core::traits::FamilyStore;
use strain_core::StrainResult;
use strain_genealogy::{FamilyRegistry, MemoryFamilyStore};

use crate::history::MutationHistory;
use crate::signals::PatternAnalysis;
use crate::synthesis::{self, PredictionReport};

const REPORT_CACHE_CAPACITY: u64 = 1_000;

pub struct PredictionEngine<'a, S: FamilyStore = MemoryFamilyStore> {
    registry: &'a FamilyRegistry<S>,
    config: PredictionConfig,
    cache: Cache<String, PredictionReport>,
    /// Mixed into the per-report RNG seed. Fixed by default so repeated
    /// runs over the same family state produce identical rewrites.
    seed: u64,
}

impl<'a, S: FamilyStore> PredictionEngine<'a, S> {
    pub fn new(registry: &'a FamilyRegistry<S>) -> Self {
        Self::with_seed(registry, 0)
    }

    pub fn with_seed(registry: &'a FamilyRegistry<S>, seed: u64) -> Self {
        Self {
            registry,
            config: registry.config().prediction.clone(),
            cache: Cache::new(REPORT_CACHE_CAPACITY),
            seed,
        }
    }

    /// Forecast the family's next mutations. A family with no mutations
    /// yet still gets a report; every signal simply reports
    /// `insufficient_data` and no predictions fire.
    pub fn predict(&self, identifier: &str) -> StrainResult<PredictionReport> {
        let family = self.registry.resolve_family(identifier)?;
        let history = MutationHistory::from_family(&family);

        let key = format!("{}:{}", family.family_id, history.len());
        if let Some(report) = self.cache.get(&key) {
            debug!(family_id = %family.family_id, mutations = history.len(), "cached report");
            return Ok(report);
        }

        let analysis = PatternAnalysis::analyze(&history, &self.config);
        let mut rng = StdRng::seed_from_u64(self.seed ^ seed_of(&key));
        let report = synthesis::synthesize(&history, analysis, &self.config, &mut rng);

        info!(
            family_id = %family.family_id,
            predictions = report.predictions.len(),
            confidence = report.confidence,
            "generated prediction report"
        );
        self.cache.insert(key, report.clone());
        Ok(report)
    }
}

fn seed_of(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
