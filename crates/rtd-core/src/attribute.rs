//! Strongly-typed attribute and tuple-variable names.

use crate::identifier::define_identifier;

define_identifier! {
    /// A column name in the governed relation.
    ///
    /// In the directed-rule algorithms a cell is identified by its attribute
    /// alone, so this is the node type of the dependency hypergraph.
    pub struct Attribute;
}

define_identifier! {
    /// A tuple variable of a denial constraint (`t1`, `t2`, ...).
    pub struct TupleVar;
}

impl TupleVar {
    /// `t1`, the tuple whose attributes form the directed rules by default
    pub fn primary() -> Self {
        TupleVar::new("t1")
    }
}

#[cfg(test)]
#[path = "attribute_test.rs"]
mod tests;
