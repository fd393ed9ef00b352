//! Explanation paths from a target cell to the boundary frontier

use crate::builder::ConstraintPartition;
use crate::error::{GraphError, GraphResult};
use rtd_core::{Cell, DepthMode, EnumerationConfig};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Search limits for [`ExplanationEnumerator::enumerate`].
///
/// With [`DepthMode::Enforced`] no state deeper than `max_depth` is expanded.
/// [`DepthMode::Unbounded`] accepts `max_depth` but ignores it and searches
/// until every branch dead-ends or reaches a boundary cell. Callers that
/// expect the bound to hold must not select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationOptions {
    pub max_depth: usize,
    pub depth_mode: DepthMode,
}

impl EnumerationOptions {
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth_mode: DepthMode::Enforced,
        }
    }

    pub fn unbounded(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth_mode: DepthMode::Unbounded,
        }
    }
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        EnumerationConfig::default().into()
    }
}

impl From<EnumerationConfig> for EnumerationOptions {
    fn from(config: EnumerationConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            depth_mode: config.depth_mode,
        }
    }
}

/// Cells collected along one search branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationPath {
    cells: BTreeSet<Cell>,
    /// Boundary cell that ended the branch
    boundary: Cell,
    depth: usize,
}

impl ExplanationPath {
    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn boundary(&self) -> &Cell {
        &self.boundary
    }

    /// Number of internal-edge hops from the target
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Breadth-first search over the internal edges of a [`ConstraintPartition`].
///
/// Two cells are adjacent when they occur in the same internal edge. The
/// enumerator only borrows the partition and can be shared across threads.
#[derive(Debug)]
pub struct ExplanationEnumerator<'a> {
    partition: &'a ConstraintPartition,
    edges_by_cell: HashMap<&'a Cell, Vec<usize>>,
}

impl<'a> ExplanationEnumerator<'a> {
    pub fn new(partition: &'a ConstraintPartition) -> Self {
        let mut edges_by_cell: HashMap<&'a Cell, Vec<usize>> = HashMap::new();
        for (idx, edge) in partition.internal_edges().iter().enumerate() {
            for cell in edge {
                edges_by_cell.entry(cell).or_default().push(idx);
            }
        }
        Self {
            partition,
            edges_by_cell,
        }
    }

    /// Neighbours of `cell` in internal-edge order, then member order
    fn neighbours(&self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + '_ {
        let edges = self.partition.internal_edges();
        let target = cell.clone();
        self.edges_by_cell
            .get(cell)
            .into_iter()
            .flatten()
            .flat_map(move |&idx| edges[idx].iter())
            .filter(move |next| **next != target)
    }

    /// Enumerate explanation paths connecting `target` to the boundary cells.
    ///
    /// The search runs level by level. Within one level each cell is claimed
    /// by the first branch that reaches it, so a cell may be revisited through
    /// a branch of different length. A branch stops as soon as it reaches a
    /// boundary cell and its accumulated cells are emitted; a target that is
    /// itself a boundary cell yields exactly `{target}`. Branches with
    /// identical cell sets are reported once, in BFS order.
    ///
    /// Each level is determined by the previous one alone, so unbounded mode
    /// stops at the first level that repeats an earlier one: from there on the
    /// search would only cycle through levels it has already seen.
    pub fn enumerate(
        &self,
        target: &Cell,
        options: &EnumerationOptions,
    ) -> GraphResult<Vec<ExplanationPath>> {
        if !self.partition.contains(target) {
            return Err(GraphError::CellNotFound {
                cell: target.to_string(),
            });
        }

        let limit = match options.depth_mode {
            DepthMode::Enforced => Some(options.max_depth),
            DepthMode::Unbounded => {
                log::warn!(
                    "Explanation search for '{}' ignores max_depth {}",
                    target,
                    options.max_depth
                );
                None
            }
        };

        let mut explanations: Vec<ExplanationPath> = Vec::new();
        let mut emitted: HashSet<BTreeSet<Cell>> = HashSet::new();
        let mut seen_levels: HashSet<Vec<(&Cell, BTreeSet<Cell>)>> = HashSet::new();
        let mut level: Vec<(&Cell, BTreeSet<Cell>)> =
            vec![(target, BTreeSet::from([target.clone()]))];
        let mut depth = 0;
        let mut states = 0;

        while !level.is_empty() {
            if limit.is_none() && !seen_levels.insert(level.clone()) {
                log::debug!("Level {} repeats an earlier level; stopping", depth);
                break;
            }
            states += level.len();

            let mut claimed: HashSet<&Cell> = HashSet::new();
            let mut next_level: Vec<(&Cell, BTreeSet<Cell>)> = Vec::new();

            for (current, path) in level {
                if self.partition.is_boundary(current) {
                    log::trace!("Reached boundary cell '{}' at depth {}", current, depth);
                    if emitted.insert(path.clone()) {
                        explanations.push(ExplanationPath {
                            cells: path,
                            boundary: current.clone(),
                            depth,
                        });
                    }
                    continue;
                }

                if limit.is_some_and(|max| depth >= max) {
                    continue;
                }

                for next in self.neighbours(current) {
                    if claimed.insert(next) {
                        let mut extended = path.clone();
                        extended.insert(next.clone());
                        next_level.push((next, extended));
                    }
                }
            }

            level = next_level;
            depth += 1;
        }

        log::debug!(
            "Found {} explanation path(s) for '{}' ({} states visited)",
            explanations.len(),
            target,
            states
        );
        Ok(explanations)
    }
}

#[cfg(test)]
#[path = "explain_test.rs"]
mod tests;
