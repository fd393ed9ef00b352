//! Explain command implementation - explanation paths to the boundary cells

use anyhow::{Context, Result};
use rtd_core::{Cell, DepthMode};
use rtd_hypergraph::{EnumerationOptions, ExplanationEnumerator, ExplanationPath};
use serde::Serialize;

use crate::cli::{ExplainArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{
    braced, load_builder, load_config, print_json, print_table, resolve_target_cell, ReportHeader,
};

#[derive(Serialize)]
struct ExplainReport<'a> {
    #[serde(flatten)]
    header: ReportHeader<'a>,
    target: &'a Cell,
    max_depth: usize,
    depth_mode: DepthMode,
    paths: &'a [ExplanationPath],
}

/// Resolve search options: config first, then command-line overrides
fn enumeration_options(args: &ExplainArgs, config: EnumerationOptions) -> EnumerationOptions {
    let mut options = config;
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if args.unbounded {
        options.depth_mode = DepthMode::Unbounded;
    }
    options
}

/// Execute the explain command
pub fn execute(args: &ExplainArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let target = resolve_target_cell(args.cell.as_deref(), &config)?;
    let options = enumeration_options(args, config.enumeration.into());

    let partition = load_builder(&config)?.partition();
    let enumerator = ExplanationEnumerator::new(&partition);
    let paths = enumerator
        .enumerate(&target, &options)
        .with_context(|| format!("Cannot explain '{}'", target))?;

    match args.output {
        OutputFormat::Json => print_json(&ExplainReport {
            header: ReportHeader::new(&config),
            target: &target,
            max_depth: options.max_depth,
            depth_mode: options.depth_mode,
            paths: &paths,
        })?,
        OutputFormat::Table => {
            ReportHeader::new(&config).print();
            println!(
                "Target cell: {} (max depth {}, {})",
                target, options.max_depth, options.depth_mode
            );
            println!();

            if paths.is_empty() {
                println!(
                    "No paths found from '{}' to the boundary within {} step(s).",
                    target, options.max_depth
                );
                return Ok(());
            }

            let rows: Vec<Vec<String>> = paths
                .iter()
                .map(|path| {
                    vec![
                        path.depth().to_string(),
                        path.boundary().to_string(),
                        braced(path.cells()),
                    ]
                })
                .collect();
            print_table(&["DEPTH", "BOUNDARY", "CELLS"], &rows);
            println!("\n{} explanation path(s) found.", paths.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(max_depth: Option<usize>, unbounded: bool) -> ExplainArgs {
        ExplainArgs {
            cell: None,
            max_depth,
            unbounded,
            output: OutputFormat::Table,
        }
    }

    #[test]
    fn test_config_options_kept_without_flags() {
        let options = enumeration_options(&args(None, false), EnumerationOptions::bounded(4));
        assert_eq!(options, EnumerationOptions::bounded(4));
    }

    #[test]
    fn test_flags_override_config() {
        let options = enumeration_options(&args(Some(1), true), EnumerationOptions::bounded(4));
        assert_eq!(options, EnumerationOptions::unbounded(1));
    }
}
