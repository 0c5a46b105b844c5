//! In-memory expense store.
//!
//! Behaves like the REST backend: assigns ids, rejects malformed writes,
//! reports unknown ids as `NotFound` and computes the report aggregates. The
//! synchronous methods are what the dev server calls from its handlers; the
//! async trait impls serve tests that exercise the client-side flows.

use crate::expense::{ExpenseId, ExpenseInput, ExpenseRecord};
use crate::filter::CategoryFilter;
use crate::reports::{BucketLabel, CategoryTotal, MonthlyTotal};
use crate::store::{ExpenseStore, ReportSource, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct MemoryExpenseStore {
    records: Arc<Mutex<Vec<ExpenseRecord>>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ExpenseRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_input(input: &ExpenseInput) -> Result<(), StoreError> {
        if !input.amount.is_finite() || input.amount < 0.0 {
            return Err(StoreError::Submission(
                "Amount must be a non-negative number".to_string(),
            ));
        }
        if input.description.trim().is_empty() {
            return Err(StoreError::Submission("Description is required".to_string()));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Records matching `filter`, in insertion order.
    pub fn find_all(&self, filter: CategoryFilter) -> Vec<ExpenseRecord> {
        self.lock()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    pub fn insert(&self, input: ExpenseInput) -> Result<ExpenseRecord, StoreError> {
        Self::check_input(&input)?;
        let id = ExpenseId::new(Uuid::new_v4().simple().to_string());
        let record = ExpenseRecord::from_input(id, input);
        self.lock().push(record.clone());
        Ok(record)
    }

    pub fn replace(&self, id: &ExpenseId, input: ExpenseInput) -> Result<ExpenseRecord, StoreError> {
        Self::check_input(&input)?;
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        *slot = ExpenseRecord::from_input(id.clone(), input);
        Ok(slot.clone())
    }

    pub fn remove(&self, id: &ExpenseId) -> Result<(), StoreError> {
        let mut records = self.lock();
        let position = records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        records.remove(position);
        Ok(())
    }

    /// Totals per category, in category order, omitting categories with no expenses.
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals = BTreeMap::new();
        for record in self.lock().iter() {
            *totals.entry(record.category).or_insert(0.0) += record.amount;
        }
        totals
            .into_iter()
            .map(|(category, total_amount)| CategoryTotal {
                category: category.to_string(),
                total_amount,
            })
            .collect()
    }

    /// Totals per `YYYY-MM` period, oldest first.
    pub fn totals_by_month(&self) -> Vec<MonthlyTotal> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for record in self.lock().iter() {
            let period = record.date.date().format("%Y-%m").to_string();
            *totals.entry(period).or_insert(0.0) += record.amount;
        }
        totals
            .into_iter()
            .map(|(period, total_amount)| MonthlyTotal {
                period: BucketLabel::Text(period),
                total_amount,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl ExpenseStore for MemoryExpenseStore {
    async fn list(&self, filter: CategoryFilter) -> Result<Vec<ExpenseRecord>, StoreError> {
        Ok(self.find_all(filter))
    }

    async fn create(&self, input: &ExpenseInput) -> Result<ExpenseRecord, StoreError> {
        self.insert(input.clone())
    }

    async fn update(&self, id: &ExpenseId, input: &ExpenseInput) -> Result<ExpenseRecord, StoreError> {
        self.replace(id, input.clone())
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), StoreError> {
        self.remove(id)
    }
}

#[async_trait(?Send)]
impl ReportSource for MemoryExpenseStore {
    async fn category_totals(&self) -> Result<Vec<CategoryTotal>, StoreError> {
        Ok(self.totals_by_category())
    }

    async fn monthly_trends(&self) -> Result<Vec<MonthlyTotal>, StoreError> {
        Ok(self.totals_by_month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{Category, ExpenseDate};

    fn input(amount: f64, category: Category, (y, m, d): (i32, u32, u32), description: &str) -> ExpenseInput {
        ExpenseInput {
            amount,
            category,
            date: ExpenseDate::from_ymd(y, m, d).unwrap(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = MemoryExpenseStore::new();
        let a = store.insert(input(1.0, Category::Food, (2024, 1, 1), "a")).unwrap();
        let b = store.insert(input(1.0, Category::Food, (2024, 1, 1), "a")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_rejects_bad_input() {
        let store = MemoryExpenseStore::new();
        let negative = store.insert(input(-1.0, Category::Food, (2024, 1, 1), "a"));
        assert!(matches!(negative, Err(StoreError::Submission(_))));
        let blank = store.insert(input(1.0, Category::Food, (2024, 1, 1), "  "));
        assert!(matches!(blank, Err(StoreError::Submission(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_and_remove_unknown_id() {
        let store = MemoryExpenseStore::new();
        let missing = ExpenseId::new("missing");
        assert_eq!(
            store.replace(&missing, input(1.0, Category::Food, (2024, 1, 1), "a")),
            Err(StoreError::NotFound(missing.clone()))
        );
        assert_eq!(store.remove(&missing), Err(StoreError::NotFound(missing)));
    }

    #[test]
    fn test_replace_keeps_position_and_id() {
        let store = MemoryExpenseStore::new();
        let first = store.insert(input(1.0, Category::Food, (2024, 1, 1), "first")).unwrap();
        store.insert(input(2.0, Category::Health, (2024, 1, 2), "second")).unwrap();
        let updated = store
            .replace(&first.id, input(9.0, Category::Others, (2024, 1, 3), "changed"))
            .unwrap();
        assert_eq!(updated.id, first.id);
        let all = store.find_all(CategoryFilter::All);
        assert_eq!(all[0], updated);
        assert_eq!(all[1].description, "second");
    }

    #[test]
    fn test_find_all_filters_by_category() {
        let store = MemoryExpenseStore::new();
        store.insert(input(1.0, Category::Food, (2024, 1, 1), "a")).unwrap();
        store.insert(input(2.0, Category::Transport, (2024, 1, 1), "b")).unwrap();
        let transport = store.find_all(CategoryFilter::Only(Category::Transport));
        assert_eq!(transport.len(), 1);
        assert_eq!(transport[0].description, "b");
    }

    #[test]
    fn test_aggregates() {
        let store = MemoryExpenseStore::new();
        store.insert(input(10.0, Category::Transport, (2024, 2, 10), "bus")).unwrap();
        store.insert(input(5.5, Category::Food, (2024, 1, 31), "bread")).unwrap();
        store.insert(input(4.5, Category::Food, (2024, 2, 1), "milk")).unwrap();

        assert_eq!(
            store.totals_by_category(),
            vec![
                CategoryTotal { category: "Food".to_string(), total_amount: 10.0 },
                CategoryTotal { category: "Transport".to_string(), total_amount: 10.0 },
            ]
        );
        assert_eq!(
            store.totals_by_month(),
            vec![
                MonthlyTotal { period: BucketLabel::Text("2024-01".to_string()), total_amount: 5.5 },
                MonthlyTotal { period: BucketLabel::Text("2024-02".to_string()), total_amount: 14.5 },
            ]
        );
    }

    #[test]
    fn test_clones_share_records() {
        let store = MemoryExpenseStore::new();
        let handle = store.clone();
        store.insert(input(1.0, Category::Food, (2024, 1, 1), "a")).unwrap();
        assert_eq!(handle.len(), 1);
    }
}
