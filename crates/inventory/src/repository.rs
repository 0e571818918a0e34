//! In-memory item repository.
//!
//! Holds exactly one ordered sequence of items, replaced wholesale by
//! [`ItemRepository::load`]. Every query is a linear scan over that sequence.
//! Loading needs `&mut self`, so a load can never overlap a query.

use std::path::{Path, PathBuf};

use salvage_core::{DomainError, DomainResult, Entity, ItemId};

use crate::distribution::ConditionDistribution;
use crate::item::Item;
use crate::loader::{ItemReader, LoadError};

/// What happened on a successful (or tolerated) load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The reader returned `count` items (possibly zero).
    Loaded { count: usize },
    /// The source did not exist; the repository is now empty.
    Missing { path: PathBuf },
}

#[derive(Debug)]
pub struct ItemRepository<R> {
    reader: R,
    items: Vec<Item>,
}

impl<R> ItemRepository<R>
where
    R: ItemReader,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            items: Vec::new(),
        }
    }

    /// Replace the held items with the contents of `source`.
    ///
    /// The previous items are discarded before the outcome is known: a missing
    /// file or a fatal error both leave the repository empty. Only fatal errors
    /// are returned as `Err`.
    pub fn load(&mut self, source: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
        let source = source.as_ref();
        self.items.clear();

        match self.reader.read(source) {
            Ok(items) => {
                self.items = items;
                tracing::info!(
                    path = %source.display(),
                    format = self.reader.format(),
                    count = self.items.len(),
                    "items loaded"
                );
                Ok(LoadOutcome::Loaded {
                    count: self.items.len(),
                })
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(path = %source.display(), error = %err, "item source not found; repository is empty");
                Ok(LoadOutcome::Missing {
                    path: source.to_path_buf(),
                })
            }
            Err(err) => {
                tracing::error!(path = %source.display(), error = %err, "item load failed");
                Err(err)
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return the 1-based page `page_number` of at most `page_size` items.
    ///
    /// Pages past the end are empty. Zero for either argument is rejected.
    pub fn get_page(&self, page_number: usize, page_size: usize) -> DomainResult<Vec<Item>> {
        if page_number == 0 {
            return Err(DomainError::validation("page_number must be at least 1"));
        }
        if page_size == 0 {
            return Err(DomainError::validation("page_size must be at least 1"));
        }

        let start = (page_number - 1).saturating_mul(page_size);
        Ok(self
            .items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect())
    }

    /// Number of non-empty pages for `page_size`; zero when the repository is empty.
    pub fn page_count(&self, page_size: usize) -> DomainResult<usize> {
        if page_size == 0 {
            return Err(DomainError::validation("page_size must be at least 1"));
        }
        Ok(self.items.len().div_ceil(page_size))
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Item> {
        let id = ItemId::new(id);
        self.items.iter().find(|item| item.has_id(&id))
    }

    /// Items whose name contains `fragment` (case-sensitive), in load order.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.name().contains(fragment))
            .collect()
    }

    pub fn condition_distribution(&self) -> ConditionDistribution {
        ConditionDistribution::from_items(&self.items)
    }

    /// Distribution over the items matched by [`Self::search_by_name`],
    /// relative to the size of that subset.
    pub fn condition_distribution_by_name(&self, fragment: &str) -> ConditionDistribution {
        ConditionDistribution::from_items(self.search_by_name(fragment))
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    struct FixedReader(Vec<Item>);

    impl ItemReader for FixedReader {
        fn format(&self) -> &'static str {
            "fixed"
        }

        fn read(&self, _source: &Path) -> Result<Vec<Item>, LoadError> {
            Ok(self.0.clone())
        }
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            any::<i64>(),
            "[A-Za-z ]{0,12}",
            "[A-Za-z]{1,8}",
            prop_oneof![Just("Mint"), Just("Good"), Just("Worn"), Just("Bad")],
            any::<i64>(),
        )
            .prop_map(|(id, name, ty, condition, amount)| Item::new(id, name, ty, condition, amount))
    }

    fn repo_with(items: Vec<Item>) -> ItemRepository<FixedReader> {
        let mut repo = ItemRepository::new(FixedReader(items));
        repo.load("fixed").unwrap();
        repo
    }

    fn parse_percentage(value: &str) -> f64 {
        value.trim_end_matches('%').parse().unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: concatenated pages reconstruct the loaded sequence exactly.
        #[test]
        fn pages_reconstruct_sequence(items in prop::collection::vec(arb_item(), 0..40), size in 1usize..8) {
            let repo = repo_with(items.clone());

            let mut rebuilt = Vec::new();
            for page in 1.. {
                let chunk = repo.get_page(page, size).unwrap();
                if chunk.is_empty() {
                    break;
                }
                rebuilt.extend(chunk);
            }

            prop_assert_eq!(rebuilt, items);
        }

        /// Property: search returns exactly the name matches, in order.
        #[test]
        fn search_is_an_ordered_filter(items in prop::collection::vec(arb_item(), 0..40), fragment in "[A-Za-z]{0,2}") {
            let repo = repo_with(items.clone());

            let expected: Vec<&Item> = items.iter().filter(|i| i.name().contains(&fragment)).collect();
            prop_assert_eq!(repo.search_by_name(&fragment), expected);
        }

        /// Property: lookup finds an id iff some item carries it.
        #[test]
        fn get_by_id_agrees_with_membership(items in prop::collection::vec(arb_item(), 0..20), probe in any::<i64>()) {
            let repo = repo_with(items.clone());

            match repo.get_by_id(probe) {
                Some(found) => prop_assert_eq!(found.id_typed().get(), probe),
                None => prop_assert!(items.iter().all(|i| i.id_typed().get() != probe)),
            }
            if let Some(first) = items.first() {
                prop_assert!(repo.get_by_id(first.id_typed().get()).is_some());
            }
        }

        /// Property: percentages sum to 100 and match 100 * count / total.
        #[test]
        fn distribution_sums_to_hundred(items in prop::collection::vec(arb_item(), 1..60)) {
            let repo = repo_with(items.clone());
            let dist = repo.condition_distribution();

            let total: f64 = dist.iter().map(|(_, p)| parse_percentage(p)).sum();
            prop_assert!((total - 100.0).abs() <= 0.01 * dist.len() as f64);
            prop_assert_eq!(repo.condition_distribution_by_name(""), dist.clone());

            for (condition, percentage) in dist.iter() {
                let count = items.iter().filter(|i| i.condition() == condition).count();
                let expected = format!("{:.2}%", count as f64 / items.len() as f64 * 100.0);
                prop_assert_eq!(percentage, expected.as_str());
            }
        }
    }
}
