//! Condition distribution: share of items per condition label.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use salvage_core::ValueObject;

use crate::item::Item;

/// Ordered mapping from condition label to a percentage string such as `"33.33%"`.
///
/// Entries appear in first-occurrence order of each label in the source items.
/// Always derived on demand; never stored by the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionDistribution {
    entries: Vec<(String, String)>,
}

impl ValueObject for ConditionDistribution {}

impl ConditionDistribution {
    /// Compute the distribution over `items`. No items yields an empty mapping.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut order: Vec<(&'a str, usize)> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut total = 0usize;

        for item in items {
            total += 1;
            match index.get(item.condition()) {
                Some(&slot) => order[slot].1 += 1,
                None => {
                    index.insert(item.condition(), order.len());
                    order.push((item.condition(), 1));
                }
            }
        }

        let entries = order
            .into_iter()
            .map(|(condition, count)| (condition.to_string(), format_percentage(count, total)))
            .collect();

        Self { entries }
    }

    pub fn get(&self, condition: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == condition)
            .map(|(_, p)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn format_percentage(count: usize, total: usize) -> String {
    let share = (count as f64 / total as f64) * 100.0;
    format!("{share:.2}%")
}

impl Serialize for ConditionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (condition, percentage) in &self.entries {
            map.serialize_entry(condition, percentage)?;
        }
        map.end()
    }
}
