//! # Expense Store Contract
//!
//! The traits every expense backend client implements, and the error taxonomy
//! they report. The browser client talks HTTP; the in-memory store in
//! [`crate::memory`] backs tests and the dev server.
//!
//! Each call is a single best-effort attempt: no caching, no retry.

use crate::expense::{ExpenseId, ExpenseInput, ExpenseRecord};
use crate::filter::CategoryFilter;
use crate::reports::{CategoryTotal, MonthlyTotal};
use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a store call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Backend unreachable, transport failure, or an unusable read response.
    #[error("Network error: {0}")]
    Network(String),
    /// A write was rejected or could not be persisted.
    #[error("Submission failed: {0}")]
    Submission(String),
    /// The addressed expense no longer exists.
    #[error("Expense {0} not found")]
    NotFound(ExpenseId),
}

/// The store call a response belongs to, used to classify failures.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOperation {
    List,
    Create,
    Update(ExpenseId),
    Delete(ExpenseId),
    Report,
}

impl StoreOperation {
    fn is_write(&self) -> bool {
        !matches!(self, StoreOperation::List | StoreOperation::Report)
    }

    /// Error for a request that never produced a response.
    pub fn transport_failure(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Network(reason.into())
    }

    /// Error for a non-success HTTP status.
    pub fn status_failure(&self, status: u16, body: &str) -> StoreError {
        let detail = if body.trim().is_empty() {
            format!("server responded with status {}", status)
        } else {
            format!("server responded with status {}: {}", status, body.trim())
        };

        match self {
            StoreOperation::Update(id) | StoreOperation::Delete(id) if status == 404 => {
                StoreError::NotFound(id.clone())
            }
            op if op.is_write() => StoreError::Submission(detail),
            _ => StoreError::Network(detail),
        }
    }

    /// Error for a success status whose body could not be decoded.
    pub fn decode_failure(&self, reason: impl Into<String>) -> StoreError {
        let detail = format!("unexpected response body: {}", reason.into());
        if self.is_write() {
            StoreError::Submission(detail)
        } else {
            StoreError::Network(detail)
        }
    }
}

/// List, create, update and delete expenses.
#[async_trait(?Send)]
pub trait ExpenseStore {
    /// Fetch expenses; a selected category is passed to the backend as a query constraint.
    async fn list(&self, filter: CategoryFilter) -> Result<Vec<ExpenseRecord>, StoreError>;

    /// Persist a new expense and return it with its assigned id.
    async fn create(&self, input: &ExpenseInput) -> Result<ExpenseRecord, StoreError>;

    /// Replace every field of an existing expense.
    async fn update(&self, id: &ExpenseId, input: &ExpenseInput) -> Result<ExpenseRecord, StoreError>;

    /// Remove an expense; removing an absent id is `NotFound`.
    async fn delete(&self, id: &ExpenseId) -> Result<(), StoreError>;
}

/// Aggregated spending series for the reports charts.
#[async_trait(?Send)]
pub trait ReportSource {
    async fn category_totals(&self) -> Result<Vec<CategoryTotal>, StoreError>;

    async fn monthly_trends(&self) -> Result<Vec<MonthlyTotal>, StoreError>;
}
