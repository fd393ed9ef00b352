//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// rtd - Find the cells that must be deleted together with a target cell
#[derive(Parser, Debug)]
#[command(name = "rtd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the directory holding rtd.yml
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the rules, leaves, and boundary split derived from the constraints
    Graph(GraphArgs),

    /// Show the grounding cost of every attribute
    Costs(CostsArgs),

    /// Select the attributes to delete together with a target attribute
    Delete(DeleteArgs),

    /// Enumerate explanation paths from a target cell to the boundary
    Explain(ExplainArgs),
}

/// Report output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Graph output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphOutput {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Graphviz DOT
    Dot,
}

/// Arguments for the graph command
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: GraphOutput,
}

/// Arguments for the costs command
#[derive(Args, Debug)]
pub struct CostsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Target attribute (default: target.attribute from rtd.yml)
    #[arg(short, long)]
    pub attribute: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the explain command
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Target cell such as t1.age (default: the target from rtd.yml)
    #[arg(long)]
    pub cell: Option<String>,

    /// Override the configured depth bound
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Search until every branch terminates, ignoring the depth bound
    #[arg(long)]
    pub unbounded: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
