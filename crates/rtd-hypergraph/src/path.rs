//! Greedy forward selection of a minimal deletion set

use crate::cost::{Cost, CostMap};
use crate::error::GraphResult;
use crate::graph::DependencyHypergraph;
use rtd_core::Attribute;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// Attributes to delete together with a target attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionSet {
    target: Attribute,
    /// Target first, then companions in selection order
    attributes: Vec<Attribute>,
    /// Expanded attributes whose deriving rules offered no grounded candidate
    unexplained: Vec<Attribute>,
}

impl DeletionSet {
    fn new(target: Attribute) -> Self {
        Self {
            attributes: vec![target.clone()],
            target,
            unexplained: Vec::new(),
        }
    }

    /// Insert with set semantics; returns whether the attribute was new
    fn insert(&mut self, attribute: &Attribute) -> bool {
        if self.contains(attribute) {
            false
        } else {
            self.attributes.push(attribute.clone());
            true
        }
    }

    pub fn target(&self) -> &Attribute {
        &self.target
    }

    /// All attributes in the set, target first
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attributes that must be deleted in addition to the target
    pub fn companions(&self) -> &[Attribute] {
        &self.attributes[1..]
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the set has no members; a selected set always holds its target
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes whose branch ended with no further explanation available
    pub fn unexplained(&self) -> &[Attribute] {
        &self.unexplained
    }

    /// Whether every expanded branch ended at a leaf or a grounded attribute
    pub fn is_fully_explained(&self) -> bool {
        self.unexplained.is_empty()
    }
}

/// Select the attributes to delete alongside `target`.
///
/// Starting from the target, each expanded attribute looks at every rule
/// that derives it and follows the single tail attribute with the smallest
/// finite cost across all of those rules (first one in rule then tail order
/// on ties). Only that cheapest child joins the set, so the result is a
/// minimal companion set rather than every possible explanation.
///
/// An attribute with no deriving rule ends its branch normally. An attribute
/// whose candidates are all unreachable ends its branch as unexplained; the
/// set accumulated so far is still returned. Attributes missing from `costs`
/// count as unreachable.
pub fn select_deletion_set(
    graph: &DependencyHypergraph,
    costs: &CostMap,
    target: &str,
) -> GraphResult<DeletionSet> {
    let target = graph.require(target)?;
    let mut deletion = DeletionSet::new(target.clone());
    let mut queue: VecDeque<&Attribute> = VecDeque::from([target]);
    let mut seen: HashSet<&Attribute> = HashSet::new();

    while let Some(current) = queue.pop_front() {
        if !seen.insert(current) {
            continue;
        }

        let mut deriving = graph.rules_with_head(current).peekable();
        if deriving.peek().is_none() {
            log::debug!("Path ends at '{}': no rule derives it", current);
            continue;
        }

        let mut cheapest: Option<(&Attribute, Cost)> = None;
        for (_, rule) in deriving {
            for candidate in rule.tail() {
                let cost = costs.cost_of(candidate);
                if !cost.is_finite() {
                    continue;
                }
                if cheapest.map_or(true, |(_, best)| cost < best) {
                    cheapest = Some((candidate, cost));
                }
            }
        }

        match cheapest {
            Some((child, cost)) => {
                log::debug!(
                    "Traversing from '{}' to cheapest child '{}' (cost {})",
                    current,
                    child,
                    cost
                );
                deletion.insert(child);
                queue.push_back(child);
            }
            None => {
                log::debug!("Path ends at '{}': no grounded explanation", current);
                deletion.unexplained.push(current.clone());
            }
        }
    }

    Ok(deletion)
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
