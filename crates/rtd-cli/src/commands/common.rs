//! Shared utilities for CLI commands

use anyhow::{bail, Context, Result};
use rtd_core::{Cell, Config, RecordKey};
use rtd_hypergraph::HypergraphBuilder;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load the constraint-set config named by the global CLI arguments.
///
/// `--config` wins over `--project-dir`.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    log::debug!(
        "Loading constraint set (project dir {}, config {:?})",
        global.project_dir,
        global.config
    );
    match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Config::load_from_dir(Path::new(&global.project_dir))
            .context("Failed to load constraint set"),
    }
}

/// Builder over the parsed constraints of a config
pub(crate) fn load_builder(config: &Config) -> Result<HypergraphBuilder> {
    HypergraphBuilder::from_config(config).context("Invalid denial constraints")
}

/// Passthrough fields echoed at the top of every report
#[derive(Debug, Serialize)]
pub(crate) struct ReportHeader<'a> {
    pub name: &'a str,
    pub dataset: Option<&'a str>,
    pub threshold: Option<f64>,
    pub target_key: Option<&'a RecordKey>,
}

impl<'a> ReportHeader<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self {
            name: &config.name,
            dataset: config.dataset.as_deref(),
            threshold: config.threshold,
            target_key: config.target.as_ref().and_then(|t| t.key.as_ref()),
        }
    }

    /// Print the header lines of a table report
    pub(crate) fn print(&self) {
        println!("Constraint set: {}", self.name);
        if let Some(dataset) = self.dataset {
            println!("Dataset:        {}", dataset);
        }
        if let Some(threshold) = self.threshold {
            println!("Threshold:      {}", threshold);
        }
        if let Some(key) = self.target_key {
            println!("Target key:     {}", key);
        }
        println!();
    }
}

/// Target attribute from `--attribute`, falling back to the config target
pub(crate) fn resolve_target_attribute(arg: Option<&str>, config: &Config) -> Result<String> {
    if let Some(attribute) = arg {
        return Ok(attribute.to_string());
    }
    match &config.target {
        Some(target) => Ok(target.attribute.to_string()),
        None => bail!("No target attribute: pass --attribute or set target.attribute in rtd.yml"),
    }
}

/// Target cell from `--cell`, falling back to the config target
pub(crate) fn resolve_target_cell(arg: Option<&str>, config: &Config) -> Result<Cell> {
    if let Some(reference) = arg {
        return Cell::parse(reference).with_context(|| format!("Invalid cell '{}'", reference));
    }
    match &config.target {
        Some(target) => Ok(target.cell()),
        None => bail!("No target cell: pass --cell or set target.attribute in rtd.yml"),
    }
}

/// Render items as `{a, b, c}`
pub(crate) fn braced<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}

/// Print `value` as pretty JSON
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize report")?
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Table-printing utilities
// ---------------------------------------------------------------------------

/// Calculate column widths for a table given headers and row data.
///
/// For each column, returns the maximum width across the header and all
/// row values so that data aligns when printed with left-padding.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Columns are left-aligned and separated by two spaces, with a dashed
/// separator under the header row.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  ").trim_end());

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  ").trim_end());
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
