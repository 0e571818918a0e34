//! Record loaders: turn a file on disk into an ordered sequence of items.
//!
//! The two formats differ in strictness on purpose:
//! - [`CsvItemReader`] fails the whole load on a malformed row, but reports a
//!   missing file as the recoverable [`LoadError::NotFound`].
//! - [`JsonItemReader`] never fails; every problem becomes an empty result
//!   plus a logged diagnostic.

mod structured;
mod tabular;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::item::Item;

pub use structured::JsonItemReader;
pub use tabular::CsvItemReader;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found at path {}", path.display())]
    NotFound { path: PathBuf },

    #[error("line {line}: column `{column}` expects an integer, found {value:?}")]
    MalformedField {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: row has no value for column `{column}`")]
    MissingField { line: u64, column: &'static str },

    #[error("missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Recoverable errors leave the repository empty instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    pub(crate) fn from_open(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Capability to read items from a source file.
pub trait ItemReader {
    /// Short format label used in diagnostics.
    fn format(&self) -> &'static str;

    /// Read every item from `source`, preserving file order.
    fn read(&self, source: &Path) -> Result<Vec<Item>, LoadError>;
}

impl<R> ItemReader for Box<R>
where
    R: ItemReader + ?Sized,
{
    fn format(&self) -> &'static str {
        (**self).format()
    }

    fn read(&self, source: &Path) -> Result<Vec<Item>, LoadError> {
        (**self).read(source)
    }
}

/// Supported on-disk formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Guess the format from the file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Csv,
        }
    }

    pub fn reader(self) -> Box<dyn ItemReader> {
        match self {
            SourceFormat::Csv => Box::new(CsvItemReader::new()),
            SourceFormat::Json => Box::new(JsonItemReader::new()),
        }
    }
}
