use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Koyomi academic calendar tool.
#[derive(Parser)]
#[command(
    name = "koyomi",
    version,
    about = "Generate and merge academic calendar JSON for the timetable front-end"
)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: koyomi.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the year document for one calendar table.
    Generate(GenerateArgs),
    /// Merge every calendar_data_YYYY.json into one dated document.
    Merge(MergeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Calendar table TOML file; the built-in table is used when omitted.
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `merge` subcommand.
#[derive(clap::Args)]
pub struct MergeArgs {
    /// Directory to search for year files; repeat in priority order.
    #[arg(short, long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Output path for the merged document; repeat to write several copies.
    #[arg(short, long = "output", value_name = "FILE")]
    pub outputs: Vec<PathBuf>,
}
