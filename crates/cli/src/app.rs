//! Application context: the configuration plus the one repository instance,
//! handed to every command handler.

use std::io::Write;

use anyhow::Context;

use salvage_inventory::{ItemReader, ItemRepository, LoadOutcome};

use crate::cli::{Command, DEFAULT_PAGE_SIZE};
use crate::config::Config;
use crate::render;

pub struct App {
    config: Config,
    repo: ItemRepository<Box<dyn ItemReader>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let repo = ItemRepository::new(config.format.reader());
        Self { config, repo }
    }

    pub fn repository(&self) -> &ItemRepository<Box<dyn ItemReader>> {
        &self.repo
    }

    /// Load the configured file into the repository.
    ///
    /// A missing or empty file is reported on `warn` and is not an error.
    pub fn load(&mut self, warn: &mut dyn Write) -> anyhow::Result<()> {
        let file = &self.config.file;
        let outcome = self
            .repo
            .load(file)
            .with_context(|| format!("Error loading data from {}", file.display()))?;

        match outcome {
            LoadOutcome::Missing { path } => {
                writeln!(warn, "Warning: File not found at path {}; no items loaded.", path.display())?;
            }
            LoadOutcome::Loaded { count: 0 } => {
                writeln!(
                    warn,
                    "Warning: File '{}' is empty or contains no valid data.",
                    file.display()
                )?;
            }
            LoadOutcome::Loaded { .. } => {}
        }
        Ok(())
    }

    pub fn run(&self, command: &Command, out: &mut dyn Write) -> anyhow::Result<()> {
        tracing::debug!(?command, "running command");
        match command {
            Command::List { page, size } => self.list(*page, *size, out),
            Command::Get { id } => self.get(*id, out),
            Command::Search { name } => self.search(name, out),
            Command::AnalyzeAll => self.analyze_all(out),
            Command::AnalyzeName { name } => self.analyze_name(name, out),
        }
    }

    fn list(&self, page: usize, size: usize, out: &mut dyn Write) -> anyhow::Result<()> {
        let size = if size > 0 { size } else { DEFAULT_PAGE_SIZE };
        let items = self.repo.get_page(page, size)?;

        if self.config.json_output {
            render::json(out, &items)?;
        } else if items.is_empty() {
            writeln!(out, "Page {page} is empty or does not exist.")?;
        } else {
            let total = self.repo.page_count(size)?;
            render::items(out, &format!("Page {page} of {total} (Size: {size})"), &items)?;
        }
        Ok(())
    }

    fn get(&self, id: i64, out: &mut dyn Write) -> anyhow::Result<()> {
        let item = self.repo.get_by_id(id);

        if self.config.json_output {
            render::json(out, &item)?;
            return Ok(());
        }
        match item {
            Some(item) => {
                writeln!(out)?;
                writeln!(out, "--- Found Item ---")?;
                writeln!(out, "{}", render::item_line(item))?;
                writeln!(out, "-------------------------")?;
            }
            None => writeln!(out, "Item with ID={id} not found.")?,
        }
        Ok(())
    }

    fn search(&self, name: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        let results = self.repo.search_by_name(name);

        if self.config.json_output {
            render::json(out, &results)?;
        } else if results.is_empty() {
            writeln!(out, "No items found with name containing '{name}'.")?;
        } else {
            let title = format!("Search Results for '{name}' ({} found)", results.len());
            render::items(out, &title, results)?;
        }
        Ok(())
    }

    fn analyze_all(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        let dist = self.repo.condition_distribution();
        if self.config.json_output {
            render::json(out, &dist)?;
        } else {
            render::distribution(out, "Condition Percentage Ratio for ALL Items", &dist)?;
        }
        Ok(())
    }

    fn analyze_name(&self, name: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        let dist = self.repo.condition_distribution_by_name(name);
        if self.config.json_output {
            render::json(out, &dist)?;
        } else {
            render::distribution(out, &format!("Condition Percentage Ratio for '{name}'"), &dist)?;
        }
        Ok(())
    }
}
