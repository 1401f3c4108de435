//! End-to-end registry scenarios: the turmeric family from first sighting
//! through genealogy queries.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use strain_core::models::{IngestOutcome, MutationFamily, MutationType, OriginalRecord, SemanticCluster};
use strain_core::traits::FamilyStore;
use strain_core::{ContentFingerprint, EngineConfig};
use strain_genealogy::{DescendantOptions, FamilyRegistry, GenealogyEngine, MemoryFamilyStore};

const ORIGINAL: &str = "Turmeric can cure COVID-19 completely in 3 days";
const PARAPHRASE: &str = "Turmeric completely cures coronavirus in just 3 days";
const NUMERIC_VARIANT: &str = "COVID-19 can be fully healed with turmeric in 72 hours";
const UNRELATED: &str = "The weather is nice today";

fn meta() -> HashMap<String, String> {
    HashMap::new()
}

/// Ingest the four scenario texts and return (registry, family_id).
fn seeded_registry() -> (FamilyRegistry, String) {
    let registry = FamilyRegistry::default();
    let first = registry.ingest(ORIGINAL, meta()).unwrap();
    assert!(first.is_original());
    let family_id = first.family_id().to_string();
    registry.ingest(PARAPHRASE, meta()).unwrap();
    registry.ingest(NUMERIC_VARIANT, meta()).unwrap();
    (registry, family_id)
}

#[test]
fn paraphrase_joins_the_family_at_generation_one() {
    let registry = FamilyRegistry::default();
    let first = registry.ingest(ORIGINAL, meta()).unwrap();
    let second = registry.ingest(PARAPHRASE, meta()).unwrap();

    match second {
        IngestOutcome::Mutation {
            ref family_id,
            generation,
            mutation_type,
            ..
        } => {
            assert_eq!(family_id, first.family_id());
            assert_eq!(generation, 1);
            assert!(
                mutation_type == MutationType::WordSubstitution
                    || mutation_type == MutationType::ContextShift,
                "paraphrase classified as {mutation_type}"
            );
        }
        other => panic!("expected a mutation, got {other:?}"),
    }
}

#[test]
fn numeric_rewrite_is_a_numerical_change() {
    let registry = FamilyRegistry::default();
    let first = registry.ingest(ORIGINAL, meta()).unwrap();
    registry.ingest(PARAPHRASE, meta()).unwrap();
    let third = registry.ingest(NUMERIC_VARIANT, meta()).unwrap();

    match third {
        IngestOutcome::Mutation {
            ref family_id,
            mutation_type,
            ..
        } => {
            assert_eq!(family_id, first.family_id());
            assert_eq!(mutation_type, MutationType::NumericalChange);
        }
        other => panic!("expected a mutation, got {other:?}"),
    }
}

#[test]
fn unrelated_content_roots_a_second_family() {
    let (registry, family_id) = seeded_registry();
    let fourth = registry.ingest(UNRELATED, meta()).unwrap();
    assert!(fourth.is_original());
    assert_ne!(fourth.family_id(), family_id);

    let stats = registry.stats().unwrap();
    assert_eq!(stats.family_count, 2);
    assert_eq!(stats.node_count, 4);
    assert_eq!(stats.largest_family.unwrap().0, family_id);
}

fn stored_family(id: &str, content: &str, at: DateTime<Utc>) -> MutationFamily {
    let fingerprint = ContentFingerprint::of(content);
    MutationFamily {
        family_id: id.to_string(),
        created_at: at,
        semantic_cluster: SemanticCluster::Medical,
        original: OriginalRecord {
            content: content.to_string(),
            content_hash: fingerprint.content_hash.clone(),
            fingerprint,
            timestamp: at,
            metadata: HashMap::new(),
        },
        mutations: Vec::new(),
    }
}

/// Two token-identical originals with the same timestamp live in an
/// injected store. Whichever family a new variant attaches to after
/// rehydration must not depend on store iteration order.
#[test]
fn rehydrated_tie_break_is_stable() {
    let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let ingest_winner = || {
        let store = MemoryFamilyStore::new();
        store.put(stored_family("family-a", ORIGINAL, at));
        store.put(stored_family("family-b", NUMERIC_VARIANT, at));
        let registry = FamilyRegistry::with_store(store, EngineConfig::default());
        let outcome = registry.ingest(PARAPHRASE, meta()).unwrap();
        assert!(outcome.is_mutation(), "got {outcome:?}");
        outcome.family_id().to_string()
    };

    let first = ingest_winner();
    let second = ingest_winner();
    assert_eq!(first, second);

    // Equal scores and equal timestamps resolve by content hash.
    let hash_a = ContentFingerprint::of(ORIGINAL).content_hash;
    let hash_b = ContentFingerprint::of(NUMERIC_VARIANT).content_hash;
    let expected = if hash_a <= hash_b { "family-a" } else { "family-b" };
    assert_eq!(first, expected);
}

#[test]
fn contentless_texts_root_separate_families() {
    let registry = FamilyRegistry::default();
    let first = registry.ingest("it is what it is", meta()).unwrap();
    assert!(first.is_original());

    // All stopwords on both sides: no shared vocabulary, no family.
    let second = registry.ingest("they were there then", meta()).unwrap();
    assert!(second.is_original(), "got {second:?}");
    assert_ne!(second.family_id(), first.family_id());
}

#[test]
fn reingesting_identical_content_is_an_exact_duplicate() {
    let (registry, family_id) = seeded_registry();
    // Same normalized text: case and punctuation noise must not matter.
    let again = registry
        .ingest("turmeric can cure covid-19, completely, in 3 days!", meta())
        .unwrap();
    match again {
        IngestOutcome::ExactDuplicate {
            family_id: ref owner,
            ..
        } => assert_eq!(owner, &family_id),
        other => panic!("expected exact duplicate, got {other:?}"),
    }
    // Nothing was appended.
    assert_eq!(registry.get_family(&family_id).unwrap().mutation_count, 2);
}

#[test]
fn family_view_has_both_mutations_as_children_of_the_root() {
    let (registry, family_id) = seeded_registry();
    let view = registry.get_family(&family_id).unwrap();

    assert_eq!(view.mutation_count, 2);
    assert_eq!(view.original_content, ORIGINAL);
    assert_eq!(view.tree.generation, 0);
    assert_eq!(view.tree.children.len(), 2);
    for child in &view.tree.children {
        assert_eq!(child.generation, 1);
    }
    // Timeline: original first, then mutations in order.
    assert_eq!(view.timeline.len(), 3);
    assert_eq!(view.timeline[0].generation, 0);
}

#[test]
fn family_resolves_by_content_hash_too() {
    let (registry, family_id) = seeded_registry();
    let hash = strain_core::fingerprint::content_hash(ORIGINAL);
    let view = registry.get_family(&hash).unwrap();
    assert_eq!(view.family_id, family_id);
}

#[test]
fn unknown_identifier_is_family_not_found() {
    let (registry, _) = seeded_registry();
    let err = registry.get_family("no-such-family").unwrap_err();
    assert!(err.to_string().contains("family not found"));
}

#[test]
fn siblings_share_the_root_as_nearest_common_ancestor() {
    let (registry, family_id) = seeded_registry();
    let view = registry.get_family(&family_id).unwrap();
    let a = view.tree.children[0].content_hash.clone();
    let b = view.tree.children[1].content_hash.clone();

    let engine = GenealogyEngine::new(&registry);
    let ancestry = engine.common_ancestor(&a, &b).unwrap();
    assert_eq!(ancestry.nearest.content_hash, view.tree.content_hash);
    assert_eq!(ancestry.nearest.generation, 0);
    assert_eq!(ancestry.shared_path.len(), 1);
}

#[test]
fn cross_family_common_ancestor_is_an_error() {
    let (registry, family_id) = seeded_registry();
    let other = registry.ingest(UNRELATED, meta()).unwrap();
    let view = registry.get_family(&family_id).unwrap();
    let a = view.tree.children[0].content_hash.clone();
    let b = strain_core::fingerprint::content_hash(UNRELATED);
    assert!(other.is_original());

    let engine = GenealogyEngine::new(&registry);
    let err = engine.common_ancestor(&a, &b).unwrap_err();
    assert!(err.to_string().contains("different families"));
}

#[test]
fn genealogy_path_runs_root_to_node() {
    let (registry, family_id) = seeded_registry();
    let view = registry.get_family(&family_id).unwrap();
    let leaf = view.tree.children[1].content_hash.clone();

    let engine = GenealogyEngine::new(&registry);
    let path = engine.genealogy_path(&leaf).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].generation, 0);
    assert_eq!(path[1].content_hash, leaf);
}

#[test]
fn descendants_filter_by_type() {
    let (registry, family_id) = seeded_registry();
    let root_hash = registry.get_family(&family_id).unwrap().tree.content_hash;

    let engine = GenealogyEngine::new(&registry);
    let all = engine
        .descendants(&root_hash, &DescendantOptions::default())
        .unwrap();
    assert_eq!(all.len(), 2);

    let numeric_only = engine
        .descendants(
            &root_hash,
            &DescendantOptions {
                max_depth: None,
                filter_by_type: Some(MutationType::NumericalChange),
            },
        )
        .unwrap();
    assert_eq!(numeric_only.len(), 1);
    assert_eq!(
        numeric_only[0].mutation_type,
        Some(MutationType::NumericalChange)
    );
}

#[test]
fn descendants_respect_max_depth() {
    let (registry, family_id) = seeded_registry();
    let root_hash = registry.get_family(&family_id).unwrap().tree.content_hash;

    let engine = GenealogyEngine::new(&registry);
    let none = engine
        .descendants(
            &root_hash,
            &DescendantOptions {
                max_depth: Some(0),
                filter_by_type: None,
            },
        )
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn nodes_resolve_by_mutation_id() {
    let registry = FamilyRegistry::default();
    registry.ingest(ORIGINAL, meta()).unwrap();
    let outcome = registry.ingest(PARAPHRASE, meta()).unwrap();
    let IngestOutcome::Mutation {
        mutation_id,
        content_hash,
        ..
    } = outcome
    else {
        panic!("expected a mutation");
    };

    let engine = GenealogyEngine::new(&registry);
    let path = engine.genealogy_path(&mutation_id).unwrap();
    assert_eq!(path.last().unwrap().content_hash, content_hash);
}
