//! Text and JSON rendering of command results.

use std::io::{self, Write};

use serde::Serialize;

use salvage_inventory::{ConditionDistribution, Item};

pub fn item_line(item: &Item) -> String {
    format!(
        "| ID: {:<4} | Name: {:<15} | Type: {:<15} | Condition: {:<10} | Amount: {:>5} |",
        item.id_typed(),
        item.name(),
        item.item_type(),
        item.condition(),
        item.amount()
    )
}

pub fn items<'a>(
    out: &mut dyn Write,
    title: &str,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")?;
    for item in items {
        writeln!(out, "{}", item_line(item))?;
    }
    writeln!(out, "{}", "-".repeat(67))
}

pub fn distribution(out: &mut dyn Write, title: &str, dist: &ConditionDistribution) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")?;
    if dist.is_empty() {
        return writeln!(out, "No data to display.");
    }
    for (condition, percentage) in dist.iter() {
        writeln!(out, "  {condition:<10}: {percentage}")?;
    }
    writeln!(out, "-------------------")
}

pub fn json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
