//! Command line tool for indexing reservoir simulation binaries
#![doc = include_str!("../readme.md")]

mod cli;
mod commands;

// internal
use cli::{Cli, Command};

// external crates
use anyhow::Result;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging_init(&cli);

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Keywords(args) => commands::keywords(&args),
        Command::Dates(args) => commands::dates(&args),
    }
}

/// Library crates only log through the facade, the binary owns the logger
fn logging_init(cli: &Cli) {
    let result = stderrlog::new()
        .module(module_path!())
        .module("restools_scan")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init();

    if let Err(e) = result {
        eprintln!("failed to start logging: {e}");
    }
}
