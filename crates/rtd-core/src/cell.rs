//! Fully-qualified cell references (`tupleVar.attribute`)

use crate::attribute::{Attribute, TupleVar};
use crate::error::{CoreError, CoreResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

static CELL_REF_RE: OnceLock<Regex> = OnceLock::new();

/// Get the compiled attribute-reference regex (built once, reused)
fn cell_ref_regex() -> &'static Regex {
    CELL_REF_RE.get_or_init(|| {
        Regex::new(r"^([a-zA-Z_][a-zA-Z0-9_]*)\.([a-zA-Z_][a-zA-Z0-9_]*)$").expect("valid regex")
    })
}

/// A reference to one attribute of one tuple variable, e.g. `t1.education`.
///
/// Serialized as its `tupleVar.attribute` string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cell {
    tuple_var: TupleVar,
    attribute: Attribute,
}

impl Cell {
    /// Create a cell from its parts
    pub fn new(tuple_var: TupleVar, attribute: Attribute) -> Self {
        Self {
            tuple_var,
            attribute,
        }
    }

    /// Parse a `tupleVar.attribute` reference
    pub fn parse(reference: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidReference {
            reference: reference.to_string(),
        };
        let caps = cell_ref_regex().captures(reference).ok_or_else(invalid)?;
        let tuple_var = TupleVar::try_new(&caps[1]).ok_or_else(invalid)?;
        let attribute = Attribute::try_new(&caps[2]).ok_or_else(invalid)?;
        Ok(Self::new(tuple_var, attribute))
    }

    /// The tuple variable this cell belongs to
    pub fn tuple_var(&self) -> &TupleVar {
        &self.tuple_var
    }

    /// The attribute (column) this cell refers to
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tuple_var, self.attribute)
    }
}

impl FromStr for Cell {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cell {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}
