//! The family registry: owns every family and the content-hash index,
//! orchestrates ingestion.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use strain_classifier as classifier;
use strain_core::config::EngineConfig;
use strain_core::errors::{GenealogyError, StrainError, StrainResult};
use strain_core::fingerprint::ContentFingerprint;
use strain_core::models::{
    FamilyStats, FamilyView, IngestOutcome, MutationFamily, MutationNode, OriginalRecord,
    SemanticCluster,
};
use strain_core::traits::FamilyStore;
use strain_similarity::SimilarityEngine;

use crate::spread;
use crate::store::MemoryFamilyStore;
use crate::tree;

/// Where a known content hash lives.
#[derive(Debug, Clone)]
struct NodeLocator {
    family_id: String,
    generation: u32,
}

/// One entry of the linear-scan corpus, kept in first-seen order so
/// similarity ties resolve deterministically to the earliest candidate.
#[derive(Debug, Clone)]
struct CorpusEntry {
    content_hash: String,
    content: String,
}

/// Indexes derived from the stored families. Guarded by one lock: ingest
/// takes it for writing, which makes the whole hash-check/extend/create
/// sequence atomic per content hash.
#[derive(Debug, Default)]
struct Indexes {
    hash_owner: HashMap<String, NodeLocator>,
    /// parent_hash → child hashes, maintained incrementally on insert.
    children: HashMap<String, Vec<String>>,
    corpus: Vec<CorpusEntry>,
}

/// The authoritative registry. Exclusively owns all families and indexes;
/// nothing else mutates them.
pub struct FamilyRegistry<S: FamilyStore = MemoryFamilyStore> {
    store: S,
    similarity: SimilarityEngine,
    config: EngineConfig,
    indexes: RwLock<Indexes>,
}

impl FamilyRegistry<MemoryFamilyStore> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_store(MemoryFamilyStore::new(), config)
    }
}

impl Default for FamilyRegistry<MemoryFamilyStore> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: FamilyStore> FamilyRegistry<S> {
    pub fn with_store(store: S, config: EngineConfig) -> Self {
        let registry = Self {
            store,
            similarity: SimilarityEngine::new(config.clone()),
            config,
            indexes: RwLock::new(Indexes::default()),
        };
        registry.rehydrate();
        registry
    }

    /// Rebuild the in-memory indexes from the store. Called at construction
    /// so an injected, pre-populated backend is immediately queryable.
    fn rehydrate(&self) {
        let Ok(mut indexes) = self.indexes.write() else {
            return;
        };
        *indexes = Indexes::default();

        let mut entries: Vec<(DateTime<Utc>, CorpusEntry)> = Vec::new();
        for id in self.store.all_ids() {
            let Some(family) = self.store.get(&id) else {
                continue;
            };
            indexes.hash_owner.insert(
                family.original.content_hash.clone(),
                NodeLocator {
                    family_id: family.family_id.clone(),
                    generation: 0,
                },
            );
            entries.push((
                family.original.timestamp,
                CorpusEntry {
                    content_hash: family.original.content_hash.clone(),
                    content: family.original.content.clone(),
                },
            ));
            for node in &family.mutations {
                indexes.hash_owner.insert(
                    node.content_hash.clone(),
                    NodeLocator {
                        family_id: family.family_id.clone(),
                        generation: node.generation,
                    },
                );
                indexes
                    .children
                    .entry(node.parent_hash.clone())
                    .or_default()
                    .push(node.content_hash.clone());
                entries.push((
                    node.timestamp,
                    CorpusEntry {
                        content_hash: node.content_hash.clone(),
                        content: node.content.clone(),
                    },
                ));
            }
        }
        // First-seen order approximated by observation time. The store
        // iterates in arbitrary order, so equal timestamps need a stable
        // secondary key or the earliest-seen tie-break would vary between a
        // live registry and a rehydrated one.
        entries.sort_by(|(ts_a, a), (ts_b, b)| {
            ts_a.cmp(ts_b).then_with(|| a.content_hash.cmp(&b.content_hash))
        });
        indexes.corpus = entries.into_iter().map(|(_, e)| e).collect();
    }

    pub fn similarity(&self) -> &SimilarityEngine {
        &self.similarity
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ingest one piece of content observed now.
    pub fn ingest(
        &self,
        content: &str,
        metadata: HashMap<String, String>,
    ) -> StrainResult<IngestOutcome> {
        self.ingest_at(content, metadata, Utc::now())
    }

    /// Ingest with an explicit observation timestamp.
    ///
    /// The write lock is held across the duplicate gate, the similarity
    /// scan, and the index update: two racing ingests of identical content
    /// cannot both root a family, and appends to one family serialize.
    pub fn ingest_at(
        &self,
        content: &str,
        metadata: HashMap<String, String>,
        observed_at: DateTime<Utc>,
    ) -> StrainResult<IngestOutcome> {
        let fingerprint = ContentFingerprint::of(content);
        let mut indexes = self
            .indexes
            .write()
            .map_err(|_| StrainError::Internal {
                details: "registry index lock poisoned".to_string(),
            })?;

        // Step 1: exact-duplicate gate on the normalized hash.
        if let Some(owner) = indexes.hash_owner.get(&fingerprint.content_hash) {
            debug!(family_id = %owner.family_id, "exact duplicate, nothing created");
            return Ok(IngestOutcome::ExactDuplicate {
                family_id: owner.family_id.clone(),
                content_hash: fingerprint.content_hash,
            });
        }

        // Steps 2–3: scan all known content for the best candidate parent.
        // Strictly-greater comparison keeps the earliest-seen candidate on
        // ties. O(n) in total known content; the fingerprint bucket index in
        // the store is the sharding hook for larger corpora.
        let mut best: Option<(usize, f64)> = None;
        for (i, entry) in indexes.corpus.iter().enumerate() {
            let score = self.similarity.calculate(content, &entry.content).overall;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        match best {
            // Step 4: extend the candidate's family.
            Some((i, score)) if score >= self.config.similarity_threshold => {
                let parent = indexes.corpus[i].clone();
                self.append_mutation(
                    &mut indexes,
                    content,
                    fingerprint,
                    metadata,
                    observed_at,
                    &parent,
                    score,
                )
            }
            // Step 5: no candidate was close enough, root a new family.
            _ => Ok(self.create_family(&mut indexes, content, fingerprint, metadata, observed_at)),
        }
    }

    fn append_mutation(
        &self,
        indexes: &mut Indexes,
        content: &str,
        fingerprint: ContentFingerprint,
        metadata: HashMap<String, String>,
        observed_at: DateTime<Utc>,
        parent: &CorpusEntry,
        score: f64,
    ) -> StrainResult<IngestOutcome> {
        let parent_owner = indexes
            .hash_owner
            .get(&parent.content_hash)
            .cloned()
            .ok_or_else(|| StrainError::Internal {
                details: format!("corpus entry {} missing from hash index", parent.content_hash),
            })?;

        let mut family =
            self.store
                .get(&parent_owner.family_id)
                .ok_or_else(|| StrainError::Internal {
                    details: format!("family {} missing from store", parent_owner.family_id),
                })?;

        let mutation_type = classifier::classify(content, &parent.content);
        let changes = classifier::analyze_changes(content, &parent.content);
        let generation = parent_owner.generation + 1;
        let content_hash = fingerprint.content_hash.clone();

        let node = MutationNode {
            mutation_id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            content_hash: content_hash.clone(),
            fingerprint,
            parent_hash: parent.content_hash.clone(),
            mutation_type,
            similarity: score,
            generation,
            timestamp: observed_at,
            metadata,
            changes,
        };
        let mutation_id = node.mutation_id.clone();
        family.mutations.push(node);
        self.store.put(family);

        indexes.hash_owner.insert(
            content_hash.clone(),
            NodeLocator {
                family_id: parent_owner.family_id.clone(),
                generation,
            },
        );
        indexes
            .children
            .entry(parent.content_hash.clone())
            .or_default()
            .push(content_hash.clone());
        indexes.corpus.push(CorpusEntry {
            content_hash: content_hash.clone(),
            content: content.to_string(),
        });

        debug!(
            family_id = %parent_owner.family_id,
            %mutation_type,
            generation,
            similarity = score,
            "mutation appended"
        );

        Ok(IngestOutcome::Mutation {
            family_id: parent_owner.family_id,
            mutation_id,
            content_hash,
            parent_hash: parent.content_hash.clone(),
            mutation_type,
            generation,
            confidence: score,
        })
    }

    fn create_family(
        &self,
        indexes: &mut Indexes,
        content: &str,
        fingerprint: ContentFingerprint,
        metadata: HashMap<String, String>,
        observed_at: DateTime<Utc>,
    ) -> IngestOutcome {
        let family_id = Uuid::new_v4().to_string();
        let semantic_cluster = SemanticCluster::assign(content);
        let content_hash = fingerprint.content_hash.clone();

        let family = MutationFamily {
            family_id: family_id.clone(),
            created_at: observed_at,
            semantic_cluster,
            original: OriginalRecord {
                content: content.to_string(),
                content_hash: content_hash.clone(),
                fingerprint,
                timestamp: observed_at,
                metadata,
            },
            mutations: Vec::new(),
        };
        self.store.put(family);

        indexes.hash_owner.insert(
            content_hash.clone(),
            NodeLocator {
                family_id: family_id.clone(),
                generation: 0,
            },
        );
        indexes.corpus.push(CorpusEntry {
            content_hash: content_hash.clone(),
            content: content.to_string(),
        });

        info!(%family_id, %semantic_cluster, "new family rooted");

        IngestOutcome::Original {
            family_id,
            content_hash,
            semantic_cluster,
        }
    }

    /// Resolve a family id or a content hash to the owning family.
    pub fn resolve_family(&self, identifier: &str) -> StrainResult<MutationFamily> {
        if let Some(family) = self.store.get(identifier) {
            return Ok(family);
        }
        let indexes = self.read_indexes()?;
        let family_id = indexes
            .hash_owner
            .get(identifier)
            .map(|owner| owner.family_id.clone())
            .ok_or_else(|| GenealogyError::FamilyNotFound {
                identifier: identifier.to_string(),
            })?;
        drop(indexes);
        self.store
            .get(&family_id)
            .ok_or_else(|| {
                StrainError::Internal {
                    details: format!("indexed family {family_id} missing from store"),
                }
            })
    }

    /// Full query view: nested tree, chronological timeline, spread metrics.
    pub fn get_family(&self, identifier: &str) -> StrainResult<FamilyView> {
        let family = self.resolve_family(identifier)?;
        self.family_view(&family, Utc::now())
    }

    /// View with an explicit "now" for the active-branch window.
    pub fn family_view(
        &self,
        family: &MutationFamily,
        now: DateTime<Utc>,
    ) -> StrainResult<FamilyView> {
        let indexes = self.read_indexes()?;
        let root = tree::build_tree(family, &indexes.children)?;
        drop(indexes);

        Ok(FamilyView {
            family_id: family.family_id.clone(),
            semantic_cluster: family.semantic_cluster,
            original_content: family.original.content.clone(),
            mutation_count: family.mutations.len(),
            tree: root,
            timeline: spread::timeline(family),
            spread: spread::analyze(family, now, self.config.active_branch_window_hours),
        })
    }

    /// Registry-wide summary counters.
    pub fn stats(&self) -> StrainResult<FamilyStats> {
        let mut node_count = 0;
        let mut largest: Option<(String, usize)> = None;
        let ids = self.store.all_ids();
        let family_count = ids.len();
        for id in ids {
            if let Some(family) = self.store.get(&id) {
                let n = family.node_count();
                node_count += n;
                if largest.as_ref().map_or(true, |(_, l)| n > *l) {
                    largest = Some((family.family_id, n));
                }
            }
        }
        Ok(FamilyStats {
            family_count,
            node_count,
            largest_family: largest,
        })
    }

    /// Family id owning a content hash, if known.
    pub fn owner_of(&self, content_hash: &str) -> StrainResult<Option<String>> {
        Ok(self
            .read_indexes()?
            .hash_owner
            .get(content_hash)
            .map(|o| o.family_id.clone()))
    }

    fn read_indexes(&self) -> StrainResult<std::sync::RwLockReadGuard<'_, Indexes>> {
        self.indexes.read().map_err(|_| StrainError::Internal {
            details: "registry index lock poisoned".to_string(),
        })
    }
}
