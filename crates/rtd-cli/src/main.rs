//! rtd CLI - companion deletion analysis over denial constraints

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{costs, delete, explain, graph};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.command {
        cli::Commands::Graph(args) => graph::execute(args, &cli.global),
        cli::Commands::Costs(args) => costs::execute(args, &cli.global),
        cli::Commands::Delete(args) => delete::execute(args, &cli.global),
        cli::Commands::Explain(args) => explain::execute(args, &cli.global),
    }
}
