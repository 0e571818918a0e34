//! Inventory domain module.
//!
//! Loads a flat item table from disk (CSV or JSON) into an in-memory
//! repository and answers read-only queries over it: pagination, lookup by id,
//! name search and condition distribution.

pub mod distribution;
pub mod item;
pub mod loader;
pub mod repository;

pub use distribution::ConditionDistribution;
pub use item::Item;
pub use loader::{CsvItemReader, ItemReader, JsonItemReader, LoadError, SourceFormat};
pub use repository::{ItemRepository, LoadOutcome};
