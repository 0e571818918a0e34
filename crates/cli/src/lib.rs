//! `salvage` command-line front end.
//!
//! Parses arguments, loads the item table once, then runs a single read-only
//! command against the repository.

pub mod app;
pub mod cli;
pub mod config;
pub mod render;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::Config;
