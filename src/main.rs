//! Docnav - sub-page navigation heuristics for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod nav;
mod page;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::NavConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = NavConfig::load(cli)?;

    match &cli.command {
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Validate { args } => cli::validate::validate_index(args, &config),
    }
}
