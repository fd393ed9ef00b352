//! CLI command implementations

pub(crate) mod common;
pub(crate) mod costs;
pub(crate) mod delete;
pub(crate) mod explain;
pub(crate) mod graph;
