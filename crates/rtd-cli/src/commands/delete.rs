//! Delete command implementation - companion deletion set for one attribute

use anyhow::{Context, Result};
use rtd_hypergraph::{propagate_costs, select_deletion_set, Cost, DeletionSet};
use serde::Serialize;

use crate::cli::{DeleteArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{
    braced, load_builder, load_config, print_json, resolve_target_attribute, ReportHeader,
};

#[derive(Serialize)]
struct DeleteReport<'a> {
    #[serde(flatten)]
    header: ReportHeader<'a>,
    target_cost: Cost,
    deletion: &'a DeletionSet,
}

/// Execute the delete command
pub fn execute(args: &DeleteArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let target = resolve_target_attribute(args.attribute.as_deref(), &config)?;

    let graph = load_builder(&config)?.build()?;
    let costs = propagate_costs(&graph);
    let deletion = select_deletion_set(&graph, &costs, &target)
        .with_context(|| format!("Cannot select a deletion set for '{}'", target))?;

    match args.output {
        OutputFormat::Json => print_json(&DeleteReport {
            header: ReportHeader::new(&config),
            target_cost: costs.cost_of(&target),
            deletion: &deletion,
        })?,
        OutputFormat::Table => {
            ReportHeader::new(&config).print();
            println!(
                "Target attribute: {} (cost {})",
                deletion.target(),
                costs.cost_of(&target)
            );
            println!("Deletion set:     {}", braced(deletion.attributes()));

            if deletion.companions().is_empty() {
                println!("\nNo companion deletions selected.");
            } else {
                println!("\n{} companion deletion(s):", deletion.companions().len());
                for attribute in deletion.companions() {
                    println!("  {} (cost {})", attribute, costs.cost_of(attribute));
                }
            }

            if !deletion.is_fully_explained() {
                println!(
                    "\nNo further explanation available for: {}",
                    braced(deletion.unexplained())
                );
            }
        }
    }

    Ok(())
}
