//! Interactive category search prompts.

use anyhow::Result;
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::{Path, PathBuf};

use super::utils::{
    open_catalog, parse_malformed_policy, present_results, print_companion, resolve_config,
    OutputFormat,
};
use crate::config::CliOverrides;
use crate::domain::SearchQuery;
use crate::query::parse_count;

#[derive(Args)]
pub struct InteractiveArgs {
    /// Catalog CSV file
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Report CSV file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not write the report file
    #[arg(long)]
    pub no_output: bool,

    /// Handling of catalog rows with unparseable numbers: error or skip
    #[arg(long, value_name = "POLICY")]
    pub on_malformed: Option<String>,

    /// Companion content file to show after the results
    #[arg(long, value_name = "FILE")]
    pub companion: Option<PathBuf>,
}

pub fn run(args: InteractiveArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        catalog_path: args.catalog.clone(),
        output_path: args.output.clone(),
        on_malformed: parse_malformed_policy(args.on_malformed.as_deref())?,
        write_output: if args.no_output { Some(false) } else { None },
        ..CliOverrides::default()
    };
    let config = resolve_config(config_path, overrides)?;
    let catalog = open_catalog(&config)?;

    let categories = catalog.categories();
    if categories.is_empty() {
        anyhow::bail!("Catalog {} has no categories to choose from", config.catalog_path.display());
    }

    println!();
    println!(
        "{} ({} products)",
        style("Enter a category and number of top products to generate").bold(),
        catalog.len()
    );

    let theme = ColorfulTheme::default();
    let selection = Select::with_theme(&theme)
        .with_prompt("Category")
        .default(0)
        .items(&categories)
        .interact()?;

    let count_text: String = Input::with_theme(&theme)
        .with_prompt("Number of products")
        .default(config.default_count.to_string())
        .validate_with(|input: &String| parse_count(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let query = SearchQuery::new(config.item_type.clone(), categories[selection], &count_text)?;
    let results = catalog.search(&query);

    println!();
    present_results(&config, &query, &results, OutputFormat::Table)?;
    print_companion(args.companion.as_deref())
}
