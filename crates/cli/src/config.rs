//! Resolved runtime configuration.

use std::path::PathBuf;

use salvage_inventory::SourceFormat;
use salvage_observability::LogFormat;

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub format: SourceFormat,
    pub log_format: LogFormat,
    pub json_output: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let format = cli
            .format
            .map(SourceFormat::from)
            .unwrap_or_else(|| SourceFormat::from_path(&cli.file));

        Self {
            file: cli.file.clone(),
            format,
            log_format: cli.log_format.into(),
            json_output: cli.json,
        }
    }
}
