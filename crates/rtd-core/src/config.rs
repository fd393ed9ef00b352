//! Configuration types and parsing for rtd.yml

use crate::attribute::{Attribute, TupleVar};
use crate::cell::Cell;
use crate::constraint::{parse_constraints, DenialConstraint, RawConstraint};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file names searched by [`Config::load_from_dir`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["rtd.yml", "rtd.yaml"];

/// Constraint-set configuration from rtd.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the constraint set
    pub name: String,

    /// Dataset identifier, passed through to reports
    #[serde(default)]
    pub dataset: Option<String>,

    /// Discovery threshold, passed through to reports
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Default target for `delete` and `explain`
    #[serde(default)]
    pub target: Option<TargetConfig>,

    /// Explanation enumeration settings
    #[serde(default)]
    pub enumeration: EnumerationConfig,

    /// Denial constraints, one list of predicates each
    #[serde(default)]
    pub constraints: Vec<RawConstraint>,
}

/// Target cell descriptor supplied by the constraint-discovery collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Key of the record holding the target cell
    #[serde(default)]
    pub key: Option<RecordKey>,

    /// Target attribute
    pub attribute: Attribute,

    /// Tuple variable used to address the target cell in constraints
    #[serde(default = "default_tuple_var")]
    pub tuple_var: TupleVar,
}

impl TargetConfig {
    /// The target as a qualified cell reference
    pub fn cell(&self) -> Cell {
        Cell::new(self.tuple_var.clone(), self.attribute.clone())
    }
}

fn default_tuple_var() -> TupleVar {
    TupleVar::primary()
}

/// Opaque record key, either numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Integer(i64),
    Text(String),
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKey::Integer(k) => write!(f, "{}", k),
            RecordKey::Text(k) => f.write_str(k),
        }
    }
}

/// How the explanation search treats its depth bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepthMode {
    /// Stop expanding branches once they reach `max_depth`
    #[default]
    Enforced,
    /// Accept `max_depth` but search until every branch terminates on its own
    Unbounded,
}

impl std::fmt::Display for DepthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthMode::Enforced => write!(f, "enforced"),
            DepthMode::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Explanation enumeration configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumerationConfig {
    /// Depth bound (theta)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Whether `max_depth` is enforced
    #[serde(default)]
    pub depth_mode: DepthMode,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            depth_mode: DepthMode::default(),
        }
    }
}

fn default_max_depth() -> usize {
    3
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!(
            "Loaded config '{}' with {} constraint(s) from {}",
            config.name,
            config.constraints.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load configuration from a directory (looks for rtd.yml or rtd.yaml)
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                return Self::load(&path);
            }
        }
        Err(CoreError::ConfigNotFound {
            path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
        })
    }

    /// Validate configuration values that serde cannot check
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Constraint set name cannot be empty".to_string(),
            });
        }

        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("threshold must be within [0, 1], got {}", threshold),
                });
            }
        }

        if self.constraints.is_empty() {
            log::warn!("Config '{}' declares no constraints", self.name);
        }

        Ok(())
    }

    /// Parse every configured constraint
    pub fn denial_constraints(&self) -> CoreResult<Vec<DenialConstraint>> {
        parse_constraints(&self.constraints)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
