//! RCA Tree CLI Binary
//!
//! Command-line interface for inspecting grievance topic feeds: build the
//! drill-down tree, resolve nodes, and replay click trails.

use clap::Parser;
use rca_tree::config::ConfigLoader;
use rca_tree::logging::init_logging;
use rca_tree::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let logging_config = ConfigLoader::load(cli.config.as_deref())
        .ok()
        .map(|c| c.logging);
    if let Err(e) = init_logging(logging_config.as_ref(), cli.log_level.as_deref()) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
