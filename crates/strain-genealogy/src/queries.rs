//! Genealogy queries: ancestor paths, descendants, common ancestors.

use serde::{Deserialize, Serialize};

use strain_core::errors::{GenealogyError, StrainResult};
use strain_core::models::{MutationFamily, MutationType};
use strain_core::traits::FamilyStore;

use crate::registry::FamilyRegistry;
use crate::tree::FamilyGraph;

/// One node on a genealogy path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    pub content_hash: String,
    pub content: String,
    /// `None` for the original.
    pub mutation_type: Option<MutationType>,
    pub generation: u32,
}

/// One node from a descendant traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescendantEntry {
    pub content_hash: String,
    pub content: String,
    pub mutation_type: Option<MutationType>,
    pub generation: u32,
    /// Edge distance from the traversal origin.
    pub depth: u32,
}

/// Bounds for a descendant traversal.
#[derive(Debug, Clone, Default)]
pub struct DescendantOptions {
    pub max_depth: Option<u32>,
    pub filter_by_type: Option<MutationType>,
}

/// Result of a common-ancestor query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonAncestry {
    /// The nearest (deepest) shared ancestor.
    pub nearest: PathEntry,
    /// The shared root-to-ancestor prefix of both paths.
    pub shared_path: Vec<PathEntry>,
}

/// Read-only query engine over the registry.
pub struct GenealogyEngine<'a, S: FamilyStore> {
    registry: &'a FamilyRegistry<S>,
}

impl<'a, S: FamilyStore> GenealogyEngine<'a, S> {
    pub fn new(registry: &'a FamilyRegistry<S>) -> Self {
        Self { registry }
    }

    /// Root-to-node ordered ancestor path.
    pub fn genealogy_path(&self, node_id: &str) -> StrainResult<Vec<PathEntry>> {
        let (family, hash) = self.resolve_node(node_id)?;
        let graph = FamilyGraph::build(&family)?;
        path_to(&graph, &hash, &family)
    }

    /// All descendants of a node, depth-bounded and optionally filtered by
    /// mutation type. Depth-first, children in insertion order.
    pub fn descendants(
        &self,
        node_id: &str,
        options: &DescendantOptions,
    ) -> StrainResult<Vec<DescendantEntry>> {
        let (family, hash) = self.resolve_node(node_id)?;
        let graph = FamilyGraph::build(&family)?;
        let origin = graph.get(&hash).ok_or_else(|| GenealogyError::NodeNotFound {
            identifier: node_id.to_string(),
        })?;

        let mut out = Vec::new();
        let mut stack: Vec<(petgraph::stable_graph::NodeIndex, u32)> = graph
            .children(origin)
            .into_iter()
            .rev()
            .map(|c| (c, 1))
            .collect();

        while let Some((idx, depth)) = stack.pop() {
            if options.max_depth.is_some_and(|max| depth > max) {
                continue;
            }
            let node = graph.node(idx);
            let keep = options
                .filter_by_type
                .map_or(true, |t| node.mutation_type == Some(t));
            if keep {
                out.push(DescendantEntry {
                    content_hash: node.content_hash.clone(),
                    content: node.content.clone(),
                    mutation_type: node.mutation_type,
                    generation: node.generation,
                    depth,
                });
            }
            for child in graph.children(idx).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(out)
    }

    /// Nearest common ancestor of two nodes. Fails with `CrossFamily` when
    /// the nodes live in different families.
    pub fn common_ancestor(&self, a: &str, b: &str) -> StrainResult<CommonAncestry> {
        let (family_a, hash_a) = self.resolve_node(a)?;
        let (family_b, hash_b) = self.resolve_node(b)?;
        if family_a.family_id != family_b.family_id {
            return Err(GenealogyError::CrossFamily {
                a: a.to_string(),
                b: b.to_string(),
            }
            .into());
        }

        let graph = FamilyGraph::build(&family_a)?;
        let path_a = path_to(&graph, &hash_a, &family_a)?;
        let path_b = path_to(&graph, &hash_b, &family_a)?;

        // Both paths start at the root; the last node of the shared prefix
        // is the nearest common ancestor.
        let shared_path: Vec<PathEntry> = path_a
            .iter()
            .zip(path_b.iter())
            .take_while(|(x, y)| x.content_hash == y.content_hash)
            .map(|(x, _)| x.clone())
            .collect();

        let nearest = shared_path
            .last()
            .cloned()
            .ok_or_else(|| GenealogyError::Inconsistent {
                family_id: family_a.family_id.clone(),
                details: "paths share no prefix despite a common root".to_string(),
            })?;

        Ok(CommonAncestry {
            nearest,
            shared_path,
        })
    }

    /// Resolve a content hash or mutation id to its family and content hash.
    fn resolve_node(&self, node_id: &str) -> StrainResult<(MutationFamily, String)> {
        // Content hash first: the cheap indexed path.
        if let Some(family_id) = self.registry.owner_of(node_id)? {
            let family = self.registry.resolve_family(&family_id)?;
            return Ok((family, node_id.to_string()));
        }
        // Fall back to a mutation-id scan.
        for family_id in self.registry.store().all_ids() {
            if let Some(family) = self.registry.store().get(&family_id) {
                if let Some(node) = family.mutations.iter().find(|m| m.mutation_id == node_id) {
                    let hash = node.content_hash.clone();
                    return Ok((family, hash));
                }
            }
        }
        Err(GenealogyError::NodeNotFound {
            identifier: node_id.to_string(),
        }
        .into())
    }
}

/// Root-first path to a node, walking parent edges backward.
fn path_to(
    graph: &FamilyGraph,
    content_hash: &str,
    family: &MutationFamily,
) -> StrainResult<Vec<PathEntry>> {
    let mut idx = graph.get(content_hash).ok_or_else(|| {
        GenealogyError::NodeNotFound {
            identifier: content_hash.to_string(),
        }
    })?;

    let mut reversed = Vec::new();
    loop {
        let node = graph.node(idx);
        reversed.push(PathEntry {
            content_hash: node.content_hash.clone(),
            content: node.content.clone(),
            mutation_type: node.mutation_type,
            generation: node.generation,
        });
        match graph.parent(idx) {
            Some(parent) => {
                // A family is a tree; the walk must terminate at the root.
                if reversed.len() > family.node_count() {
                    return Err(GenealogyError::Inconsistent {
                        family_id: family.family_id.clone(),
                        details: format!("parent walk from {content_hash} did not terminate"),
                    }
                    .into());
                }
                idx = parent;
            }
            None => break,
        }
    }
    reversed.reverse();
    Ok(reversed)
}
