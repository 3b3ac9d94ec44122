//! CLI overrides on top of file/env config

use std::path::PathBuf;

use crate::domain::{Config, MalformedPolicy};

/// Values given on the command line; `None` leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub item_type: Option<String>,
    pub on_malformed: Option<MalformedPolicy>,
    pub write_output: Option<bool>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(path) = cli.catalog_path {
        config.catalog_path = path;
    }
    if let Some(path) = cli.output_path {
        config.output_path = path;
    }
    if let Some(item_type) = cli.item_type {
        config.item_type = item_type;
    }
    if let Some(policy) = cli.on_malformed {
        config.on_malformed = policy;
    }
    if let Some(write) = cli.write_output {
        config.write_output = write;
    }
    config
}
