use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use salvage_inventory::SourceFormat;
use salvage_observability::LogFormat;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_FILE: &str = "items.csv";

#[derive(Debug, Parser)]
#[command(name = "salvage")]
#[command(about = "Browse and analyze the survivors' item table")]
#[command(version)]
pub struct Cli {
    /// Item table to load (.csv or .json)
    #[arg(short, long, env = "SALVAGE_FILE", default_value = DEFAULT_FILE, global = true)]
    pub file: PathBuf,

    /// Input format (default: inferred from the file extension)
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Diagnostic log layout on stderr
    #[arg(long, value_enum, env = "SALVAGE_LOG_FORMAT", default_value_t = LogFormatArg::Text, global = true)]
    pub log_format: LogFormatArg,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Display items page by page
    List {
        /// Page number (1-based)
        #[arg(default_value_t = 1)]
        page: usize,

        /// Page size; 0 falls back to the default
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: usize,
    },

    /// Retrieve an item by ID
    Get {
        /// Item ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Search items by (part of) their name, case-sensitive
    Search {
        /// Name or part of the item name
        name: String,
    },

    /// Condition percentage ratio for all items
    AnalyzeAll,

    /// Condition percentage ratio for items whose name contains NAME
    AnalyzeName {
        /// Name or part of the item name
        name: String,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for SourceFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => SourceFormat::Csv,
            FormatArg::Json => SourceFormat::Json,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
