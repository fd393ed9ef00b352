//! Directed hyperedges of the dependency hypergraph

use crate::error::{GraphError, GraphResult};
use rtd_core::Attribute;
use serde::Serialize;

/// Index of a rule inside its [`DependencyHypergraph`](crate::DependencyHypergraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub(crate) usize);

impl RuleId {
    /// Position of the rule in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A derivability rule: the tail attributes jointly stand in for the head.
///
/// Members keep their first-seen order, which fixes the enumeration order
/// used for tie-breaking during deletion-set selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    tail: Vec<Attribute>,
    head: Vec<Attribute>,
}

impl Rule {
    /// Create a rule, dropping duplicate members.
    ///
    /// Fails when either side is empty or the sides overlap.
    pub fn new(
        tail: impl IntoIterator<Item = Attribute>,
        head: impl IntoIterator<Item = Attribute>,
    ) -> GraphResult<Self> {
        let tail = dedup(tail);
        let head = dedup(head);

        if tail.is_empty() || head.is_empty() {
            return Err(GraphError::InvalidRule {
                reason: "tail and head must both be non-empty".to_string(),
            });
        }
        if let Some(shared) = tail.iter().find(|a| head.contains(*a)) {
            return Err(GraphError::InvalidRule {
                reason: format!("attribute '{}' is in both tail and head", shared),
            });
        }

        Ok(Self { tail, head })
    }

    pub fn tail(&self) -> &[Attribute] {
        &self.tail
    }

    pub fn head(&self) -> &[Attribute] {
        &self.head
    }

    pub fn tail_contains(&self, attribute: &str) -> bool {
        self.tail.iter().any(|a| a == attribute)
    }

    pub fn head_contains(&self, attribute: &str) -> bool {
        self.head.iter().any(|a| a == attribute)
    }
}

fn dedup(attrs: impl IntoIterator<Item = Attribute>) -> Vec<Attribute> {
    let mut out: Vec<Attribute> = Vec::new();
    for attr in attrs {
        if !out.contains(&attr) {
            out.push(attr);
        }
    }
    out
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = |attrs: &[Attribute]| {
            attrs
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "{{{}}} -> {{{}}}", side(&self.tail), side(&self.head))
    }
}
