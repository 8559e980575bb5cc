//! Wordle Curator - CLI
//!
//! Builds the curated tier lists and the premium/daily lists from the source
//! wordlists in a data directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_curator::{
    commands::{CurateConfig, run_combine, run_premium},
    curation::DAILY_CAP,
    output::{print_combine_result, print_premium_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_curator",
    about = "Curate tiered five-letter word lists from ranked source wordlists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the source wordlists
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Directory receiving the curated lists (default: the data directory)
    #[arg(short, long, global = true)]
    out_dir: Option<PathBuf>,

    /// Suppress the run summary and progress bar
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both pipelines (default)
    All {
        /// Maximum size of the daily list
        #[arg(long, default_value_t = DAILY_CAP)]
        daily_cap: usize,
    },

    /// Priority-merge all sources into high/good/all tiers
    Combine,

    /// Build the premium and daily lists from the top three sources
    Premium {
        /// Maximum size of the daily list
        #[arg(long, default_value_t = DAILY_CAP)]
        daily_cap: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CurateConfig::new(&cli.data_dir).quiet(cli.quiet);
    if let Some(out_dir) = &cli.out_dir {
        config = config.with_out_dir(out_dir);
    }

    // Default to running everything if no command given
    let command = cli.command.unwrap_or(Commands::All {
        daily_cap: DAILY_CAP,
    });

    match command {
        Commands::All { daily_cap } => {
            let config = config.with_daily_cap(daily_cap);
            run_combine_command(&config)?;
            run_premium_command(&config)
        }
        Commands::Combine => run_combine_command(&config),
        Commands::Premium { daily_cap } => run_premium_command(&config.with_daily_cap(daily_cap)),
    }
}

fn run_combine_command(config: &CurateConfig) -> Result<()> {
    let result = run_combine(config).with_context(|| {
        format!(
            "combining wordlists from {} into {}",
            config.data_dir.display(),
            config.out_dir.display()
        )
    })?;

    if !config.quiet {
        print_combine_result(&result);
    }
    Ok(())
}

fn run_premium_command(config: &CurateConfig) -> Result<()> {
    let result = run_premium(config).with_context(|| {
        format!(
            "building premium lists from {} into {}",
            config.data_dir.display(),
            config.out_dir.display()
        )
    })?;

    if !config.quiet {
        print_premium_result(&result);
    }
    Ok(())
}
