use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use super::{ItemReader, LoadError};
use crate::item::Item;

/// Reads a JSON array of item objects.
///
/// Tolerant of every failure: a missing file, bad syntax or a wrongly shaped
/// object all yield an empty sequence and an error-level log event.
#[derive(Debug, Clone, Default)]
pub struct JsonItemReader;

impl JsonItemReader {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
enum DecodeFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

fn decode(source: &Path) -> Result<Vec<Item>, DecodeFailure> {
    let file = File::open(source)?;
    let items = serde_json::from_reader(BufReader::new(file))?;
    Ok(items)
}

impl ItemReader for JsonItemReader {
    fn format(&self) -> &'static str {
        "json"
    }

    fn read(&self, source: &Path) -> Result<Vec<Item>, LoadError> {
        match decode(source) {
            Ok(items) => {
                tracing::debug!(path = %source.display(), count = items.len(), "json items read");
                Ok(items)
            }
            Err(error) => {
                tracing::error!(path = %source.display(), %error, "reading JSON items failed");
                Ok(Vec::new())
            }
        }
    }
}
