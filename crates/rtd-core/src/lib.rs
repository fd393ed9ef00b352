//! rtd-core - Core library for rtd
//!
//! This crate provides the denial-constraint model shared by every rtd
//! component: strongly-typed attribute and cell references, predicate and
//! constraint parsing, and configuration loading from `rtd.yml`.

pub mod attribute;
pub mod cell;
pub mod config;
pub mod constraint;
pub mod error;
pub mod identifier;
pub mod operator;

pub use attribute::{Attribute, TupleVar};
pub use cell::Cell;
pub use config::{Config, DepthMode, EnumerationConfig, RecordKey, TargetConfig};
pub use constraint::{
    parse_constraints, parse_triples, DenialConstraint, Predicate, RawConstraint, RawPredicate,
};
pub use error::{CoreError, CoreResult};
pub use operator::Operator;
