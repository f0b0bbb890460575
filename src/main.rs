mod cli;
mod config;
mod generate;
mod logging;
mod merge_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Generate(args) => generate::run(args, &config.generate),
        Command::Merge(args) => merge_cmd::run(args, &config.merge),
    }
}
