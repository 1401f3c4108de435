//! Family tree construction.
//!
//! Two representations: the nested [`FamilyTreeNode`] view built from the
//! registry's incrementally-maintained children index, and a petgraph-backed
//! [`FamilyGraph`] used by the traversal queries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;

use strain_core::errors::{GenealogyError, StrainResult};
use strain_core::models::{FamilyTreeNode, MutationFamily, MutationType};

/// Build the nested tree view for a family from a `parent_hash → children`
/// index. O(n) in family size; children are ordered by observation time.
pub fn build_tree(
    family: &MutationFamily,
    children: &HashMap<String, Vec<String>>,
) -> StrainResult<FamilyTreeNode> {
    let mut root = FamilyTreeNode {
        content_hash: family.original.content_hash.clone(),
        content: family.original.content.clone(),
        mutation_type: None,
        generation: 0,
        timestamp: family.original.timestamp,
        children: Vec::new(),
    };
    attach_children(family, children, &mut root)?;
    Ok(root)
}

fn attach_children(
    family: &MutationFamily,
    children: &HashMap<String, Vec<String>>,
    node: &mut FamilyTreeNode,
) -> StrainResult<()> {
    let Some(child_hashes) = children.get(&node.content_hash) else {
        return Ok(());
    };
    for hash in child_hashes {
        let mutation = family.node_by_hash(hash).ok_or_else(|| {
            GenealogyError::Inconsistent {
                family_id: family.family_id.clone(),
                details: format!("child hash {hash} not found in family"),
            }
        })?;
        let mut child = FamilyTreeNode {
            content_hash: mutation.content_hash.clone(),
            content: mutation.content.clone(),
            mutation_type: Some(mutation.mutation_type),
            generation: mutation.generation,
            timestamp: mutation.timestamp,
            children: Vec::new(),
        };
        attach_children(family, children, &mut child)?;
        node.children.push(child);
    }
    Ok(())
}

/// Node payload in the family graph.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub content_hash: String,
    pub content: String,
    /// `None` for the original.
    pub mutation_type: Option<MutationType>,
    pub generation: u32,
    pub timestamp: DateTime<Utc>,
}

/// A family's rooted tree as a directed graph (edges parent → child) with a
/// hash index for O(1) node lookup.
#[derive(Debug)]
pub struct FamilyGraph {
    pub graph: StableDiGraph<GraphNode, ()>,
    index: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl FamilyGraph {
    /// Build from a family. Fails with `Inconsistent` when any node's parent
    /// hash does not resolve within the family.
    pub fn build(family: &MutationFamily) -> StrainResult<Self> {
        let mut graph = StableDiGraph::new();
        let mut index = HashMap::new();

        let root = graph.add_node(GraphNode {
            content_hash: family.original.content_hash.clone(),
            content: family.original.content.clone(),
            mutation_type: None,
            generation: 0,
            timestamp: family.original.timestamp,
        });
        index.insert(family.original.content_hash.clone(), root);

        for node in &family.mutations {
            let idx = graph.add_node(GraphNode {
                content_hash: node.content_hash.clone(),
                content: node.content.clone(),
                mutation_type: Some(node.mutation_type),
                generation: node.generation,
                timestamp: node.timestamp,
            });
            index.insert(node.content_hash.clone(), idx);
        }

        for node in &family.mutations {
            let child = index[&node.content_hash];
            let parent = *index.get(&node.parent_hash).ok_or_else(|| {
                GenealogyError::Inconsistent {
                    family_id: family.family_id.clone(),
                    details: format!(
                        "parent hash {} of node {} does not resolve",
                        node.parent_hash, node.content_hash
                    ),
                }
            })?;
            graph.add_edge(parent, child, ());
        }

        Ok(Self { graph, index, root })
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn get(&self, content_hash: &str) -> Option<NodeIndex> {
        self.index.get(content_hash).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    /// The unique parent of a node, `None` for the root.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
    }

    /// Children in insertion order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        // petgraph yields neighbors in reverse insertion order.
        out.reverse();
        out
    }
}
