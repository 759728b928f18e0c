//! # Connectivity Analyzer
//!
//! Builds an undirected graph whose nodes are the *species sets* found on one side of a
//! reaction (not single species) and whose edges join the educt set and the product set of
//! each reaction. Two reactions are therefore adjacent only when one side of the first is the
//! very same set as one side of the second; sharing a subset of species is not enough.
//!
//! Reactions with an empty educt side or an empty product side add no edge and no node.
//!
//! ## Main functions
//! - `is_connected()`, `count_components()`: depth-first traversal over the node graph
//! - `connected_components()`: node-disjoint groups of reactions
//! - `extract_sub_crns()`: one new `CRN` per component, `<name>_sub_<i>` with `i` starting at 1
//! - `all_reactions_touch_fast_species()`, `validate_all_sub_crns()`: checks that fast species
//!   separate the sub-networks, reported as verdicts and never as errors
use super::crn_model::{CRN, Reaction};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet, HashMap};

type Node = BTreeSet<String>;

/// undirected graph over educt/product species sets
#[derive(Debug, Clone, Default)]
pub struct ReactionGraph {
    /// nodes in order of first appearance
    nodes: Vec<Node>,
    index: HashMap<Node, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl ReactionGraph {
    pub fn from_reactions(reactions: &[Reaction]) -> Self {
        let mut graph = Self::default();
        for reaction in reactions {
            let educts = reaction.educt_set();
            let products = reaction.product_set();
            if educts.is_empty() || products.is_empty() {
                continue;
            }
            let a = graph.node_id(educts);
            let b = graph.node_id(products);
            graph.adjacency[a].push(b);
            if a != b {
                graph.adjacency[b].push(a);
            }
        }
        graph
    }

    fn node_id(&mut self, node: Node) -> usize {
        if let Some(id) = self.index.get(&node) {
            return *id;
        }
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_index(&self, node: &Node) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// iterative depth-first traversal, marks and returns every node reached from `start`
    fn traverse(&self, start: usize, visited: &mut [bool]) -> Vec<usize> {
        let mut reached = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            reached.push(node);
            for next in self.adjacency[node].iter().rev() {
                if !visited[*next] {
                    stack.push(*next);
                }
            }
        }
        reached
    }

    /// node ids of every component; each node appears in exactly one component
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.nodes.len()];
        let mut components = Vec::new();
        for root in 0..self.nodes.len() {
            if !visited[root] {
                components.push(self.traverse(root, &mut visited));
            }
        }
        components
    }

    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut visited = vec![false; self.nodes.len()];
        self.traverse(0, &mut visited).len() == self.nodes.len()
    }
}

/// true iff the reaction graph is non-empty and every node is reachable from any other
pub fn is_connected(reactions: &[Reaction]) -> bool {
    ReactionGraph::from_reactions(reactions).is_connected()
}

/// number of traversal roots needed to cover the graph, 0 for an empty graph
pub fn count_components(reactions: &[Reaction]) -> usize {
    ReactionGraph::from_reactions(reactions).components().len()
}

/// Groups reactions by the component holding their educt-set or product-set node.
///
/// Components are node-disjoint, so a reaction lands in at most one group. A reaction with an
/// empty side only joins a group when its other side is a node created by some other reaction.
pub fn connected_components(reactions: &[Reaction]) -> Vec<Vec<Reaction>> {
    let graph = ReactionGraph::from_reactions(reactions);
    let components = graph.components();
    let mut component_of = vec![0; graph.node_count()];
    for (c, nodes) in components.iter().enumerate() {
        for node in nodes {
            component_of[*node] = c;
        }
    }
    let mut groups: Vec<Vec<Reaction>> = vec![Vec::new(); components.len()];
    for reaction in reactions {
        let found = [reaction.educt_set(), reaction.product_set()]
            .iter()
            .filter(|side| !side.is_empty())
            .find_map(|side| graph.node_index(side));
        match found {
            Some(node) => groups[component_of[node]].push(reaction.clone()),
            None => debug!(
                "reaction with rate '{}' touches no graph node and belongs to no component",
                reaction.rate()
            ),
        }
    }
    groups
}

/// One sub-network per connected component. Species lists keep only the species that occur
/// in the component's reactions, in their original order.
pub fn extract_sub_crns(crn: &CRN) -> Vec<CRN> {
    connected_components(crn.reactions())
        .into_iter()
        .enumerate()
        .map(|(i, reactions)| {
            let (slow, fast) = {
                let occurring: BTreeSet<&String> =
                    reactions.iter().flat_map(|r| r.species()).collect();
                let restrict = |species: &[String]| -> Vec<String> {
                    species
                        .iter()
                        .filter(|s| occurring.contains(s))
                        .cloned()
                        .collect()
                };
                (restrict(crn.slow_species()), restrict(crn.fast_species()))
            };
            let name = format!("{}_sub_{}", crn.name(), i + 1);
            CRN::derived(&name, crn.natnum(), slow, fast, reactions)
        })
        .collect()
}

/// every reaction consumes at least one fast species and produces at least one fast species
pub fn all_reactions_touch_fast_species(reactions: &[Reaction], fast_set: &[String]) -> bool {
    reactions.iter().all(|reaction| {
        fast_set.iter().any(|f| reaction.has_educt(f))
            && fast_set.iter().any(|f| reaction.has_product(f))
    })
}

/// separation verdict for every sub-network, keyed by sub-network name
pub fn validate_all_sub_crns(crn: &CRN) -> BTreeMap<String, bool> {
    let mut verdicts = BTreeMap::new();
    for sub in extract_sub_crns(crn) {
        let passed = all_reactions_touch_fast_species(sub.reactions(), crn.fast_species());
        if !passed {
            warn!(
                "sub-network '{}' has a reaction that does not touch a fast species on both sides",
                sub.name()
            );
        }
        verdicts.insert(sub.name().to_string(), passed);
    }
    verdicts
}

impl CRN {
    pub fn is_connected(&self) -> bool {
        is_connected(self.reactions())
    }

    pub fn component_count(&self) -> usize {
        count_components(self.reactions())
    }

    pub fn sub_crns(&self) -> Vec<CRN> {
        extract_sub_crns(self)
    }

    pub fn validate_fast_separation(&self) -> BTreeMap<String, bool> {
        validate_all_sub_crns(self)
    }
}
