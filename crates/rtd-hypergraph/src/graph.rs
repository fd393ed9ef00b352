//! The dependency hypergraph and its head/tail indices

use crate::error::{GraphError, GraphResult};
use crate::rule::{Rule, RuleId};
use rtd_core::Attribute;
use std::collections::{BTreeSet, HashMap};

/// Derivability rules over the attribute universe of a constraint set.
///
/// The `rules_by_head` and `rules_by_tail` indices are extended on every
/// rule insertion and always agree with `rules`. The leaf set is computed
/// once when construction finishes and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct DependencyHypergraph {
    rules: Vec<Rule>,
    all_attributes: BTreeSet<Attribute>,
    rules_by_head: HashMap<Attribute, Vec<RuleId>>,
    rules_by_tail: HashMap<Attribute, Vec<RuleId>>,
    leaves: BTreeSet<Attribute>,
}

impl DependencyHypergraph {
    /// Build a hypergraph directly from an attribute universe and rules.
    ///
    /// Attributes mentioned by a rule join the universe even when absent from
    /// `attributes`.
    pub fn from_rules(
        attributes: impl IntoIterator<Item = Attribute>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        let mut graph = Self::default();
        for attribute in attributes {
            graph.insert_attribute(attribute);
        }
        for rule in rules {
            graph.insert_rule(rule);
        }
        graph.seal()
    }

    pub(crate) fn insert_attribute(&mut self, attribute: Attribute) {
        self.all_attributes.insert(attribute);
    }

    pub(crate) fn insert_rule(&mut self, rule: Rule) -> RuleId {
        let id = RuleId(self.rules.len());
        for attribute in rule.head() {
            self.all_attributes.insert(attribute.clone());
            self.rules_by_head
                .entry(attribute.clone())
                .or_default()
                .push(id);
        }
        for attribute in rule.tail() {
            self.all_attributes.insert(attribute.clone());
            self.rules_by_tail
                .entry(attribute.clone())
                .or_default()
                .push(id);
        }
        self.rules.push(rule);
        id
    }

    /// Finish construction by fixing the leaf set
    pub(crate) fn seal(mut self) -> Self {
        self.leaves = self
            .all_attributes
            .iter()
            .filter(|a| !self.rules_by_head.contains_key(*a))
            .cloned()
            .collect();
        self
    }

    /// All rules in insertion order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// All rules paired with their ids, in insertion order
    pub fn rules_with_ids(&self) -> impl Iterator<Item = (RuleId, &Rule)> + '_ {
        self.rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| (RuleId(idx), rule))
    }

    /// Look up a rule by id
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.0)
    }

    /// Every attribute discovered while building
    pub fn all_attributes(&self) -> &BTreeSet<Attribute> {
        &self.all_attributes
    }

    /// Attributes that are never the head of a rule
    pub fn leaves(&self) -> &BTreeSet<Attribute> {
        &self.leaves
    }

    pub fn is_leaf(&self, attribute: &str) -> bool {
        self.leaves.contains(attribute)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.all_attributes.contains(attribute)
    }

    /// Resolve an attribute name, failing with `AttributeNotFound`
    pub fn require(&self, attribute: &str) -> GraphResult<&Attribute> {
        self.all_attributes
            .get(attribute)
            .ok_or_else(|| GraphError::AttributeNotFound {
                attribute: attribute.to_string(),
            })
    }

    /// Rules whose head contains `attribute`, in insertion order
    pub fn rules_with_head<'a>(
        &'a self,
        attribute: &str,
    ) -> impl Iterator<Item = (RuleId, &'a Rule)> + 'a {
        self.indexed(self.rules_by_head.get(attribute))
    }

    /// Rules whose tail contains `attribute`, in insertion order
    pub fn rules_with_tail<'a>(
        &'a self,
        attribute: &str,
    ) -> impl Iterator<Item = (RuleId, &'a Rule)> + 'a {
        self.indexed(self.rules_by_tail.get(attribute))
    }

    fn indexed<'a>(
        &'a self,
        ids: Option<&'a Vec<RuleId>>,
    ) -> impl Iterator<Item = (RuleId, &'a Rule)> + 'a {
        ids.into_iter()
            .flatten()
            .map(move |&id| (id, &self.rules[id.0]))
    }

    /// Render the hypergraph in Graphviz DOT format.
    ///
    /// Each rule becomes a point node with tail arrows flowing in and head
    /// arrows flowing out; leaves are drawn as double circles.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph dependencies {\n  rankdir=LR;\n  node [shape=ellipse];\n\n");

        for attribute in &self.all_attributes {
            if self.leaves.contains(attribute) {
                dot.push_str(&format!("  \"{}\" [shape=doublecircle];\n", attribute));
            } else {
                dot.push_str(&format!("  \"{}\";\n", attribute));
            }
        }

        dot.push('\n');

        for (id, rule) in self.rules_with_ids() {
            dot.push_str(&format!("  \"{}\" [shape=point];\n", id));
            for tail in rule.tail() {
                dot.push_str(&format!("  \"{}\" -> \"{}\" [arrowhead=none];\n", tail, id));
            }
            for head in rule.head() {
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", id, head));
            }
        }

        dot.push_str("}\n");
        dot
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
