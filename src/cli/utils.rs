//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

use crate::catalog::{load_catalog, Catalog};
use crate::companion::CompanionContent;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, MalformedPolicy, ProductRecord, SearchQuery};
use crate::render::{render_json, render_table, write_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Config for this run: file and environment, then command-line overrides.
pub fn resolve_config(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let file_config = load_config(&cwd, config_path)?;
    Ok(merge_cli_with_config(file_config, overrides))
}

pub fn parse_malformed_policy(value: Option<&str>) -> Result<Option<MalformedPolicy>> {
    value.map(str::parse).transpose()
}

pub fn open_catalog(config: &Config) -> Result<Catalog> {
    load_catalog(&config.catalog_path, config.on_malformed)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))
}

/// Print results in `format`, then write the report file when enabled.
pub fn present_results(
    config: &Config,
    query: &SearchQuery,
    results: &[&ProductRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(results)),
        OutputFormat::Json => println!("{}", render_json(query, results)?),
    }

    if config.write_output {
        write_report(&config.output_path, query, results)?;
    }
    Ok(())
}

pub fn print_companion(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let content = CompanionContent::load(path)
        .with_context(|| format!("Failed to read companion content {}", path.display()))?;
    if let Some(content) = content {
        println!();
        print!("{}", content.render());
    }
    Ok(())
}
