//! Backward cost propagation from leaves
//!
//! The cost of an attribute is the minimum number of rule applications needed
//! to ground it in leaf attributes. Leaves cost 1; every rule application adds
//! 1 to the cheapest member of its tail.

use crate::graph::DependencyHypergraph;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rtd_core::Attribute;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Grounding cost of an attribute.
///
/// `Finite` always orders before `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cost {
    Finite(u32),
    /// No finite chain of rules grounds the attribute in a leaf
    Unreachable,
}

impl Cost {
    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn value(self) -> Option<u32> {
        match self {
            Cost::Finite(n) => Some(n),
            Cost::Unreachable => None,
        }
    }

    /// Cost after one more rule application
    fn step(self) -> Cost {
        match self {
            Cost::Finite(n) => Cost::Finite(n.saturating_add(1)),
            Cost::Unreachable => Cost::Unreachable,
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(n) => write!(f, "{}", n),
            Cost::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cost::Finite(n) => serializer.serialize_u32(*n),
            Cost::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

/// Cost of every attribute in a hypergraph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CostMap {
    costs: BTreeMap<Attribute, Cost>,
}

impl CostMap {
    /// Cost of `attribute`, or `None` if it is not in the map
    pub fn get(&self, attribute: &str) -> Option<Cost> {
        self.costs.get(attribute).copied()
    }

    /// Cost of `attribute`, treating unknown attributes as unreachable
    pub fn cost_of(&self, attribute: &str) -> Cost {
        self.get(attribute).unwrap_or(Cost::Unreachable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, Cost)> {
        self.costs.iter().map(|(a, c)| (a, *c))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Attributes with no finite grounding, in name order
    pub fn unreachable(&self) -> Vec<&Attribute> {
        self.costs
            .iter()
            .filter(|(_, c)| !c.is_finite())
            .map(|(a, _)| a)
            .collect()
    }
}

/// Compute the grounding cost of every attribute.
///
/// Leaves are seeded with cost 1 and processed FIFO. When an attribute is
/// dequeued, every rule holding it in its tail may assign a cost to that
/// rule's unvisited heads: `1 + min(tail costs)`. Since every rule costs
/// the same, FIFO order finalizes each attribute at its minimum the first
/// time it becomes finite, and each attribute is enqueued at most once.
///
/// A rule only fires once **every** tail attribute is finite, even though
/// the cost it assigns depends on the cheapest tail member alone. One
/// unreachable tail member therefore blocks the whole rule. Whether that
/// conservative gating was intended, or whether the cheapest finite member
/// should be enough, is an open question; the gating is kept because
/// callers may rely on the blocking.
pub fn propagate_costs(graph: &DependencyHypergraph) -> CostMap {
    let mut costs: BTreeMap<Attribute, Cost> = graph
        .all_attributes()
        .iter()
        .map(|a| (a.clone(), Cost::Unreachable))
        .collect();

    let mut visited: HashSet<&Attribute> = HashSet::new();
    let mut queue: VecDeque<&Attribute> = VecDeque::new();

    for leaf in graph.leaves() {
        costs.insert(leaf.clone(), Cost::Finite(1));
        visited.insert(leaf);
        queue.push_back(leaf);
    }
    log::debug!("Seeded cost propagation with {} leaves", queue.len());

    while let Some(current) = queue.pop_front() {
        for (id, rule) in graph.rules_with_tail(current) {
            for head in rule.head() {
                if visited.contains(head) {
                    continue;
                }

                let Some(cheapest) = gated_min_tail_cost(rule.tail(), &costs) else {
                    log::trace!("Rule {} blocked for '{}': tail not fully grounded", id, head);
                    continue;
                };

                let candidate = cheapest.step();
                let cost = costs.entry(head.clone()).or_insert(Cost::Unreachable);
                if candidate < *cost {
                    *cost = candidate;
                }

                if cost.is_finite() && visited.insert(head) {
                    log::trace!("'{}' grounded at cost {} via rule {}", head, cost, id);
                    queue.push_back(head);
                }
            }
        }
    }

    CostMap { costs }
}

/// Cheapest tail cost, or `None` unless every tail attribute is finite
fn gated_min_tail_cost(tail: &[Attribute], costs: &BTreeMap<Attribute, Cost>) -> Option<Cost> {
    let mut cheapest: Option<Cost> = None;
    for attribute in tail {
        let cost = costs.get(attribute).copied().unwrap_or(Cost::Unreachable);
        if !cost.is_finite() {
            return None;
        }
        cheapest = Some(cheapest.map_or(cost, |c| c.min(cost)));
    }
    cheapest
}

/// Groups of unreachable attributes that only derive each other.
///
/// Projects every rule onto head -> tail edges and returns the strongly
/// connected components with more than one member whose attributes are all
/// unreachable: mutual dependencies with no leaf to ground them. Members and
/// clusters are sorted by name.
pub fn deadlock_clusters<'a>(
    graph: &'a DependencyHypergraph,
    costs: &CostMap,
) -> Vec<Vec<&'a Attribute>> {
    let mut projection: DiGraph<&Attribute, ()> = DiGraph::new();
    let mut nodes: HashMap<&Attribute, NodeIndex> = HashMap::new();
    for attribute in graph.all_attributes() {
        nodes.insert(attribute, projection.add_node(attribute));
    }
    for rule in graph.rules() {
        for head in rule.head() {
            for tail in rule.tail() {
                projection.update_edge(nodes[head], nodes[tail], ());
            }
        }
    }

    let mut clusters: Vec<Vec<&Attribute>> = tarjan_scc(&projection)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut members: Vec<&Attribute> =
                component.into_iter().map(|idx| projection[idx]).collect();
            members.sort();
            members
        })
        .filter(|members| members.iter().all(|a| !costs.cost_of(a).is_finite()))
        .collect();
    clusters.sort();
    clusters
}

#[cfg(test)]
#[path = "cost_test.rs"]
mod tests;
