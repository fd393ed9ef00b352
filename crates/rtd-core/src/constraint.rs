//! Denial constraints and their predicates
//!
//! A denial constraint is an ordered list of predicates over a pair of tuples.
//! Constraints are never evaluated against data here; they are only a source
//! of attribute co-occurrence for the dependency hypergraph.

use crate::attribute::{Attribute, TupleVar};
use crate::cell::Cell;
use crate::error::{CoreError, CoreResult};
use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One `left op right` comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub left: Cell,
    pub op: Operator,
    pub right: Cell,
}

impl Predicate {
    /// Create a predicate from already-parsed parts
    pub fn new(left: Cell, op: Operator, right: Cell) -> Self {
        Self { left, op, right }
    }

    /// Parse a predicate from its three textual parts
    pub fn from_parts(left: &str, op: &str, right: &str) -> CoreResult<Self> {
        Ok(Self::new(Cell::parse(left)?, op.parse()?, Cell::parse(right)?))
    }

    /// Both sides of the predicate, left first
    pub fn cells(&self) -> [&Cell; 2] {
        [&self.left, &self.right]
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl FromStr for Predicate {
    type Err = CoreError;

    /// Parse the whitespace-separated form, e.g. `t1.age == t2.age`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [left, op, right] => Self::from_parts(left, op, right),
            _ => Err(CoreError::InvalidPredicate {
                text: s.to_string(),
            }),
        }
    }
}

/// Predicate as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPredicate {
    /// `[t1.age, "==", t2.age]`
    Triple(String, String, String),
    /// `"t1.age == t2.age"`
    Text(String),
}

impl RawPredicate {
    /// Build the triple form from string slices
    pub fn triple(left: &str, op: &str, right: &str) -> Self {
        RawPredicate::Triple(left.to_string(), op.to_string(), right.to_string())
    }

    fn parse(&self) -> CoreResult<Predicate> {
        match self {
            RawPredicate::Triple(left, op, right) => Predicate::from_parts(left, op, right),
            RawPredicate::Text(text) => text.parse(),
        }
    }
}

/// Unparsed constraint: one entry per predicate
pub type RawConstraint = Vec<RawPredicate>;

/// A validated denial constraint over at most two tuple variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenialConstraint {
    predicates: Vec<Predicate>,
}

impl DenialConstraint {
    /// Create a constraint from parsed predicates.
    ///
    /// `index` is the position of the constraint in its set and only appears
    /// in error messages.
    pub fn new(index: usize, predicates: Vec<Predicate>) -> CoreResult<Self> {
        let constraint = Self { predicates };
        if constraint.predicates.is_empty() {
            return Err(CoreError::MalformedConstraint {
                index,
                reason: "constraint has no predicates".to_string(),
            });
        }
        let vars = constraint.tuple_vars();
        if vars.len() > 2 {
            let names: Vec<&str> = vars.iter().map(|v| v.as_str()).collect();
            return Err(CoreError::MalformedConstraint {
                index,
                reason: format!(
                    "constraint compares more than two tuples ({})",
                    names.join(", ")
                ),
            });
        }
        Ok(constraint)
    }

    /// Parse a raw constraint; no predicate is ingested unless all of them parse
    pub fn parse(index: usize, raw: &[RawPredicate]) -> CoreResult<Self> {
        let predicates = raw
            .iter()
            .map(|p| {
                p.parse().map_err(|e| CoreError::MalformedConstraint {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(index, predicates)
    }

    /// The predicates in declaration order
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Distinct tuple variables in first-seen order
    pub fn tuple_vars(&self) -> Vec<&TupleVar> {
        let mut vars: Vec<&TupleVar> = Vec::new();
        for cell in self.referenced_cells() {
            if !vars.contains(&cell.tuple_var()) {
                vars.push(cell.tuple_var());
            }
        }
        vars
    }

    /// Whether the constraint compares two distinct tuples
    pub fn spans_two_tuples(&self) -> bool {
        self.tuple_vars().len() == 2
    }

    /// Distinct referenced cells in first-seen order (left before right)
    pub fn cells(&self) -> Vec<&Cell> {
        let mut cells: Vec<&Cell> = Vec::new();
        for cell in self.referenced_cells() {
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
        cells
    }

    /// Distinct attributes referenced through `tuple_var`, in first-seen order.
    ///
    /// The set does not depend on predicate order; only the listing does.
    pub fn attributes_of(&self, tuple_var: &TupleVar) -> Vec<&Attribute> {
        let mut attrs: Vec<&Attribute> = Vec::new();
        for cell in self.referenced_cells() {
            if cell.tuple_var() == tuple_var && !attrs.contains(&cell.attribute()) {
                attrs.push(cell.attribute());
            }
        }
        attrs
    }

    fn referenced_cells(&self) -> impl Iterator<Item = &Cell> {
        self.predicates.iter().flat_map(|p| p.cells())
    }
}

impl std::fmt::Display for DenialConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.predicates.iter().map(|p| p.to_string()).collect();
        write!(f, "not({})", parts.join(" and "))
    }
}

/// Parse a whole constraint set, failing on the first malformed constraint
pub fn parse_constraints(raw: &[RawConstraint]) -> CoreResult<Vec<DenialConstraint>> {
    raw.iter()
        .enumerate()
        .map(|(index, predicates)| DenialConstraint::parse(index, predicates))
        .collect()
}

/// Parse constraints written as `(left, op, right)` triples
///
/// ```
/// use rtd_core::{parse_triples, TupleVar};
///
/// let constraints = parse_triples(&[
///     &[("t1.education", "==", "t2.education"), ("t1.education_num", "!=", "t2.education_num")],
/// ])
/// .unwrap();
/// assert_eq!(constraints[0].attributes_of(&TupleVar::primary()).len(), 2);
/// ```
pub fn parse_triples(constraints: &[&[(&str, &str, &str)]]) -> CoreResult<Vec<DenialConstraint>> {
    let raw: Vec<RawConstraint> = constraints
        .iter()
        .map(|predicates| {
            predicates
                .iter()
                .map(|(left, op, right)| RawPredicate::triple(left, op, right))
                .collect()
        })
        .collect();
    parse_constraints(&raw)
}

#[cfg(test)]
#[path = "constraint_test.rs"]
mod tests;
