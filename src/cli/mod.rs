//! Command-line interface for catalog-rank
//!
//! Provides `search`, `batch`, `categories`, `interactive` and `completions`
//! subcommands sharing one configuration layer.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod batch;
mod categories;
mod interactive;
mod search;
mod utils;

/// Rank the top products of a catalog category by review volume and rating
#[derive(Parser)]
#[command(name = "catalog-rank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (catalog-rank.toml or .catalog-rank.yml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the top products of one category
    Search(search::SearchArgs),

    /// Read the query from an input file and write the report file
    Batch(batch::BatchArgs),

    /// List the categories available in the catalog
    Categories(categories::CategoriesArgs),

    /// Pick a category and count from terminal prompts
    Interactive(interactive::InteractiveArgs),

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Search(args) => search::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Categories(args) => categories::run(args, config_path),
        Commands::Interactive(args) => interactive::run(args, config_path),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "catalog-rank", &mut std::io::stdout());
            Ok(())
        }
    }
}
