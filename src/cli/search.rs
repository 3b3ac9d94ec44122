//! Search command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{
    open_catalog, parse_malformed_policy, present_results, print_companion, resolve_config,
    OutputFormat,
};
use crate::config::CliOverrides;
use crate::domain::SearchQuery;

#[derive(Args)]
pub struct SearchArgs {
    /// Primary category to rank (exact, case-sensitive)
    #[arg(short = 'c', long, value_name = "CATEGORY")]
    pub category: String,

    /// Number of products to return (defaults to `default_count` from config)
    #[arg(short = 'n', long, value_name = "COUNT", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Catalog CSV file
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Report CSV file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not write the report file
    #[arg(long)]
    pub no_output: bool,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Item type recorded in the report
    #[arg(long, value_name = "TYPE")]
    pub item_type: Option<String>,

    /// Handling of catalog rows with unparseable numbers: error or skip
    #[arg(long, value_name = "POLICY")]
    pub on_malformed: Option<String>,

    /// Companion content file to show after the results
    #[arg(long, value_name = "FILE")]
    pub companion: Option<PathBuf>,
}

pub fn run(args: SearchArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        catalog_path: args.catalog.clone(),
        output_path: args.output.clone(),
        item_type: args.item_type.clone(),
        on_malformed: parse_malformed_policy(args.on_malformed.as_deref())?,
        write_output: if args.no_output { Some(false) } else { None },
    };
    let config = resolve_config(config_path, overrides)?;

    // Reject a bad count before touching the catalog.
    let count_text = args.count.unwrap_or_else(|| config.default_count.to_string());
    let query = SearchQuery::new(config.item_type.clone(), args.category, &count_text)?;

    let catalog = open_catalog(&config)?;
    let results = catalog.search(&query);
    present_results(&config, &query, &results, args.format)?;
    print_companion(args.companion.as_deref())
}
