use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::{ItemReader, LoadError};
use crate::item::Item;

const COL_ID: &str = "ID";
const COL_NAME: &str = "Name";
const COL_TYPE: &str = "Type";
const COL_CONDITION: &str = "Condition";
const COL_AMOUNT: &str = "Amount";

/// Reads a comma-delimited table with the header `ID,Name,Type,Condition,Amount`.
///
/// Header names are matched exactly (case-sensitive); extra columns are
/// ignored, and so are surplus trailing fields on a row. A non-integer `ID` or
/// `Amount`, or a row too short to hold every required column, aborts the
/// whole load.
///
/// The header is validated even when no data rows follow, so a header-only
/// file with a misnamed column fails with [`LoadError::MissingColumn`] rather
/// than loading as empty.
#[derive(Debug, Clone, Default)]
pub struct CsvItemReader;

impl CsvItemReader {
    pub fn new() -> Self {
        Self
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Copy, Clone)]
struct Columns {
    id: usize,
    name: usize,
    item_type: usize,
    condition: usize,
    amount: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn { column })
        };

        Ok(Self {
            id: find(COL_ID)?,
            name: find(COL_NAME)?,
            item_type: find(COL_TYPE)?,
            condition: find(COL_CONDITION)?,
            amount: find(COL_AMOUNT)?,
        })
    }

    fn item(&self, record: &StringRecord, line: u64) -> Result<Item, LoadError> {
        let text = |idx: usize, column: &'static str| {
            record
                .get(idx)
                .ok_or(LoadError::MissingField { line, column })
        };

        Ok(Item::new(
            parse_int(text(self.id, COL_ID)?, COL_ID, line)?,
            text(self.name, COL_NAME)?,
            text(self.item_type, COL_TYPE)?,
            text(self.condition, COL_CONDITION)?,
            parse_int(text(self.amount, COL_AMOUNT)?, COL_AMOUNT, line)?,
        ))
    }
}

fn parse_int(value: &str, column: &'static str, line: u64) -> Result<i64, LoadError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| LoadError::MalformedField {
            line,
            column,
            value: value.to_string(),
        })
}

impl ItemReader for CsvItemReader {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn read(&self, source: &Path) -> Result<Vec<Item>, LoadError> {
        let file = File::open(source).map_err(|e| LoadError::from_open(source, e))?;

        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            // Zero-byte file: nothing to load, not a schema error.
            return Ok(Vec::new());
        }
        let columns = Columns::resolve(&headers)?;

        let mut items = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            items.push(columns.item(&record, line)?);
        }

        tracing::debug!(path = %source.display(), count = items.len(), "csv items read");
        Ok(items)
    }
}
