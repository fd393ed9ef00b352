//! Graph command implementation - rules, leaves, and the boundary split

use anyhow::Result;
use rtd_core::Attribute;
use rtd_hypergraph::{ConstraintPartition, DependencyHypergraph, RuleId};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::cli::{GlobalArgs, GraphArgs, GraphOutput};
use crate::commands::common::{
    braced, load_builder, load_config, print_json, print_table, ReportHeader,
};

#[derive(Serialize)]
struct RuleReport<'a> {
    id: RuleId,
    tail: &'a [Attribute],
    head: &'a [Attribute],
}

#[derive(Serialize)]
struct GraphReport<'a> {
    #[serde(flatten)]
    header: ReportHeader<'a>,
    constraints: usize,
    attributes: &'a BTreeSet<Attribute>,
    leaves: &'a BTreeSet<Attribute>,
    rules: Vec<RuleReport<'a>>,
    partition: &'a ConstraintPartition,
}

/// Execute the graph command
pub fn execute(args: &GraphArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let builder = load_builder(&config)?;
    let graph = builder.build()?;

    match args.output {
        GraphOutput::Dot => print!("{}", graph.to_dot()),
        GraphOutput::Json => {
            let partition = builder.partition();
            let rules = graph
                .rules_with_ids()
                .map(|(id, rule)| RuleReport {
                    id,
                    tail: rule.tail(),
                    head: rule.head(),
                })
                .collect();
            print_json(&GraphReport {
                header: ReportHeader::new(&config),
                constraints: builder.constraints().len(),
                attributes: graph.all_attributes(),
                leaves: graph.leaves(),
                rules,
                partition: &partition,
            })?;
        }
        GraphOutput::Table => {
            ReportHeader::new(&config).print();
            print_rules(&graph);
            print_partition(&builder.partition());
        }
    }

    Ok(())
}

fn print_rules(graph: &DependencyHypergraph) {
    if graph.rules().is_empty() {
        println!("No rules: every constraint has fewer than two local attributes.");
    } else {
        let rows: Vec<Vec<String>> = graph
            .rules_with_ids()
            .map(|(id, rule)| {
                vec![
                    id.to_string(),
                    braced(rule.tail()),
                    braced(rule.head()),
                ]
            })
            .collect();
        print_table(&["RULE", "TAIL", "HEAD"], &rows);
    }

    println!(
        "\n{} rule(s) over {} attribute(s).",
        graph.rules().len(),
        graph.all_attributes().len()
    );
    if graph.leaves().is_empty() {
        println!("Leaves: none");
    } else {
        println!("Leaves: {}", braced(graph.leaves()));
    }
}

fn print_partition(partition: &ConstraintPartition) {
    println!(
        "\n{} boundary edge(s), {} internal edge(s), {} boundary cell(s).",
        partition.boundary_edges().len(),
        partition.internal_edges().len(),
        partition.boundary_cells().len()
    );
    for edge in partition.internal_edges() {
        println!("  internal {}", braced(edge));
    }
}
