//! Category tabs and the client-side visibility filter.

use crate::expense::{Category, ExpenseRecord};
use std::fmt;

/// Selected category tab. `All` shows every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tabs in the order they are displayed.
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Parse a tab key; "All" and unknown keys both select everything.
    pub fn from_tab_key(key: &str) -> Self {
        key.parse::<Category>()
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn tab_key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// The category to send as a list query constraint, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(*category),
        }
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }

    /// Records visible under this filter, in input order.
    pub fn visible<'a>(&self, records: &'a [ExpenseRecord]) -> Vec<&'a ExpenseRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{ExpenseDate, ExpenseId};

    fn record(id: &str, category: Category) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            amount: 10.0,
            category,
            date: ExpenseDate::from_ymd(2024, 1, 15).unwrap(),
            description: format!("{} expense", category),
        }
    }

    fn mixed_records() -> Vec<ExpenseRecord> {
        vec![
            record("1", Category::Food),
            record("2", Category::Transport),
            record("3", Category::Food),
            record("4", Category::Transport),
            record("5", Category::Food),
        ]
    }

    #[test]
    fn test_all_is_identity() {
        let records = mixed_records();
        let visible: Vec<ExpenseRecord> = CategoryFilter::All
            .visible(&records)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(visible, records);
    }

    #[test]
    fn test_transport_tab_shows_only_transport() {
        let records = mixed_records();
        let visible = CategoryFilter::Only(Category::Transport).visible(&records);
        let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_every_record_visible_under_its_own_category() {
        let records = mixed_records();
        for r in &records {
            let visible = CategoryFilter::Only(r.category).visible(&records);
            assert!(visible.iter().any(|v| v.id == r.id));
            assert!(visible.iter().all(|v| v.category == r.category));
        }
    }

    #[test]
    fn test_record_outside_input_never_visible() {
        let records = mixed_records();
        let stranger = record("99", Category::Food);
        let visible = CategoryFilter::Only(Category::Food).visible(&records);
        assert!(!visible.iter().any(|v| v.id == stranger.id));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = mixed_records();
        let filter = CategoryFilter::Only(Category::Food);
        let once: Vec<ExpenseRecord> = filter.visible(&records).into_iter().cloned().collect();
        let twice: Vec<ExpenseRecord> = filter.visible(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_category() {
        let records = mixed_records();
        assert!(CategoryFilter::Only(Category::Health).visible(&records).is_empty());
    }

    #[test]
    fn test_tab_keys() {
        let keys: Vec<&str> = CategoryFilter::tabs().map(|tab| tab.tab_key()).collect();
        assert_eq!(keys, vec!["All", "Food", "Transport", "Entertainment", "Health", "Others"]);
        assert_eq!(CategoryFilter::from_tab_key("Health"), CategoryFilter::Only(Category::Health));
        assert_eq!(CategoryFilter::from_tab_key("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_tab_key("bogus"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.category(), None);
        assert_eq!(CategoryFilter::Only(Category::Food).category(), Some(Category::Food));
    }
}
