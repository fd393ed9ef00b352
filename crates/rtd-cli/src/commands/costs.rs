//! Costs command implementation

use anyhow::Result;
use rtd_core::Attribute;
use rtd_hypergraph::{deadlock_clusters, propagate_costs, CostMap};
use serde::Serialize;

use crate::cli::{CostsArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{braced, load_builder, load_config, print_json, print_table, ReportHeader};

#[derive(Serialize)]
struct CostsReport<'a> {
    #[serde(flatten)]
    header: ReportHeader<'a>,
    costs: &'a CostMap,
    deadlocks: &'a [Vec<&'a Attribute>],
}

/// Execute the costs command
pub fn execute(args: &CostsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let graph = load_builder(&config)?.build()?;
    let costs = propagate_costs(&graph);
    let deadlocks = deadlock_clusters(&graph, &costs);

    match args.output {
        OutputFormat::Json => print_json(&CostsReport {
            header: ReportHeader::new(&config),
            costs: &costs,
            deadlocks: &deadlocks,
        })?,
        OutputFormat::Table => {
            ReportHeader::new(&config).print();

            let rows: Vec<Vec<String>> = costs
                .iter()
                .map(|(attribute, cost)| {
                    vec![
                        attribute.to_string(),
                        cost.to_string(),
                        if graph.is_leaf(attribute) { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["ATTRIBUTE", "COST", "LEAF"], &rows);

            let unreachable = costs.unreachable().len();
            println!(
                "\n{} attribute(s), {} unreachable.",
                costs.len(),
                unreachable
            );

            if !deadlocks.is_empty() {
                println!("\nDeadlocked attribute groups (mutual dependency with no leaf):");
                for cluster in &deadlocks {
                    println!("  {}", braced(cluster));
                }
            }
        }
    }

    Ok(())
}
