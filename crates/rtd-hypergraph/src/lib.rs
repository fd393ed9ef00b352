//! rtd-hypergraph - Dependency hypergraph algorithms for rtd
//!
//! Given a set of denial constraints, this crate answers which other
//! attributes must be deleted or explained together with a target so that no
//! constraint is left unverifiable:
//!
//! - [`HypergraphBuilder`] turns constraints into a [`DependencyHypergraph`]
//!   of derivability rules, plus a boundary/internal [`ConstraintPartition`]
//! - [`propagate_costs`] grounds every attribute in the leaves
//! - [`select_deletion_set`] greedily picks the cheapest companions
//! - [`ExplanationEnumerator`] walks internal edges to the boundary cells
//!
//! All structures are immutable once built and safe to share across threads.

pub mod builder;
pub mod cost;
pub mod error;
pub mod explain;
pub mod graph;
pub mod path;
pub mod rule;

pub use builder::{ConstraintPartition, HypergraphBuilder};
pub use cost::{deadlock_clusters, propagate_costs, Cost, CostMap};
pub use error::{GraphError, GraphResult};
pub use explain::{EnumerationOptions, ExplanationEnumerator, ExplanationPath};
pub use graph::DependencyHypergraph;
pub use path::{select_deletion_set, DeletionSet};
pub use rule::{Rule, RuleId};
