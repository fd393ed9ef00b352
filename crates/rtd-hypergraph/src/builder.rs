//! Turning denial constraints into a dependency hypergraph
//!
//! Two views are derived from the same constraint set:
//!
//! - the directed rule view ([`HypergraphBuilder::build`]) used by cost
//!   propagation and deletion-set selection, and
//! - the undirected boundary/internal split ([`HypergraphBuilder::partition`])
//!   used by explanation enumeration.

use crate::error::GraphResult;
use crate::graph::DependencyHypergraph;
use crate::rule::Rule;
use rtd_core::{Cell, Config, DenialConstraint, TupleVar};
use serde::Serialize;
use std::collections::BTreeSet;

/// Builds hypergraph views over an explicit constraint set
#[derive(Debug, Clone)]
pub struct HypergraphBuilder {
    constraints: Vec<DenialConstraint>,
    tuple_var: TupleVar,
}

impl HypergraphBuilder {
    /// Builder whose rules range over the attributes of `t1`
    pub fn new(constraints: Vec<DenialConstraint>) -> Self {
        Self {
            constraints,
            tuple_var: TupleVar::primary(),
        }
    }

    /// Create a builder from the constraints declared in a config.
    ///
    /// Rules range over the target's tuple variable when a target is set.
    pub fn from_config(config: &Config) -> GraphResult<Self> {
        let builder = Self::new(config.denial_constraints()?);
        Ok(match &config.target {
            Some(target) => builder.with_tuple_var(target.tuple_var.clone()),
            None => builder,
        })
    }

    /// Collect rule attributes through `tuple_var` instead of `t1`
    pub fn with_tuple_var(mut self, tuple_var: TupleVar) -> Self {
        self.tuple_var = tuple_var;
        self
    }

    pub fn constraints(&self) -> &[DenialConstraint] {
        &self.constraints
    }

    pub fn tuple_var(&self) -> &TupleVar {
        &self.tuple_var
    }

    /// Build the directed rule hypergraph.
    ///
    /// Every constraint referencing `n >= 2` attributes through the builder's
    /// tuple variable yields `n` rules, each deriving one of those attributes
    /// from the other `n - 1`. Constraints with fewer local attributes still
    /// contribute their attribute to the universe but emit no rule; a
    /// constraint that never mentions the tuple variable contributes nothing.
    pub fn build(&self) -> GraphResult<DependencyHypergraph> {
        let mut graph = DependencyHypergraph::default();

        for (index, constraint) in self.constraints.iter().enumerate() {
            let local = constraint.attributes_of(&self.tuple_var);
            for attribute in &local {
                graph.insert_attribute((*attribute).clone());
            }

            if local.len() < 2 {
                log::debug!(
                    "Constraint #{} has {} attribute(s) on {}; no rules emitted",
                    index,
                    local.len(),
                    self.tuple_var
                );
                continue;
            }

            for (i, head) in local.iter().enumerate() {
                let tail = local
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, a)| (*a).clone());
                graph.insert_rule(Rule::new(tail, [(*head).clone()])?);
            }
        }

        let graph = graph.seal();
        log::info!(
            "Built hypergraph with {} rules over {} attributes ({} leaves) from {} constraints",
            graph.rules().len(),
            graph.all_attributes().len(),
            graph.leaves().len(),
            self.constraints.len()
        );
        Ok(graph)
    }

    /// Split constraints into boundary edges (spanning both tuples) and
    /// internal edges (confined to one tuple).
    pub fn partition(&self) -> ConstraintPartition {
        let mut partition = ConstraintPartition::default();

        for constraint in &self.constraints {
            let cells: Vec<Cell> = constraint.cells().into_iter().cloned().collect();
            partition.cells.extend(cells.iter().cloned());

            if constraint.spans_two_tuples() {
                partition.boundary_cells.extend(cells.iter().cloned());
                partition.boundary_edges.push(cells);
            } else {
                partition.internal_edges.push(cells);
            }
        }

        log::debug!(
            "Partitioned {} constraints into {} boundary and {} internal edges ({} boundary cells)",
            self.constraints.len(),
            partition.boundary_edges.len(),
            partition.internal_edges.len(),
            partition.boundary_cells.len()
        );
        partition
    }
}

/// Undirected view of a constraint set, split by whether each constraint
/// compares two tuples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstraintPartition {
    boundary_edges: Vec<Vec<Cell>>,
    internal_edges: Vec<Vec<Cell>>,
    boundary_cells: BTreeSet<Cell>,
    cells: BTreeSet<Cell>,
}

impl ConstraintPartition {
    /// Cell sets of constraints that reference both tuple variables
    pub fn boundary_edges(&self) -> &[Vec<Cell>] {
        &self.boundary_edges
    }

    /// Cell sets of constraints confined to a single tuple variable
    pub fn internal_edges(&self) -> &[Vec<Cell>] {
        &self.internal_edges
    }

    /// Every cell of every boundary edge
    pub fn boundary_cells(&self) -> &BTreeSet<Cell> {
        &self.boundary_cells
    }

    /// Every cell referenced by any constraint
    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn is_boundary(&self, cell: &Cell) -> bool {
        self.boundary_cells.contains(cell)
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
