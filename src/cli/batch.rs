//! Batch command: query from an input file, results to the report file.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{open_catalog, parse_malformed_policy, resolve_config};
use crate::config::CliOverrides;
use crate::query::read_query_file;
use crate::render::write_report;

#[derive(Args)]
pub struct BatchArgs {
    /// Input CSV whose first row is `item_type,category,count`
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Catalog CSV file
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Report CSV file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Handling of catalog rows with unparseable numbers: error or skip
    #[arg(long, value_name = "POLICY")]
    pub on_malformed: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        catalog_path: args.catalog.clone(),
        output_path: args.output.clone(),
        on_malformed: parse_malformed_policy(args.on_malformed.as_deref())?,
        ..CliOverrides::default()
    };
    let config = resolve_config(config_path, overrides)?;

    let query = read_query_file(&args.input)
        .with_context(|| format!("Invalid query file {}", args.input.display()))?;
    let catalog = open_catalog(&config)?;
    let results = catalog.search(&query);

    // The report is the whole point of batch mode, so `write_output` is ignored.
    write_report(&config.output_path, &query, &results)?;
    println!("Wrote {} results to {}", results.len(), config.output_path.display());
    Ok(())
}
