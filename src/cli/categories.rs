//! Categories command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{open_catalog, parse_malformed_policy, resolve_config};
use crate::config::CliOverrides;

#[derive(Args)]
pub struct CategoriesArgs {
    /// Catalog CSV file
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Handling of catalog rows with unparseable numbers: error or skip
    #[arg(long, value_name = "POLICY")]
    pub on_malformed: Option<String>,
}

pub fn run(args: CategoriesArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        catalog_path: args.catalog,
        on_malformed: parse_malformed_policy(args.on_malformed.as_deref())?,
        ..CliOverrides::default()
    };
    let config = resolve_config(config_path, overrides)?;
    let catalog = open_catalog(&config)?;

    for category in catalog.categories() {
        println!("{category}");
    }
    Ok(())
}
