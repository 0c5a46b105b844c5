//! # Expense Form State
//!
//! State machine behind the add/edit modal. The modal is either closed, open
//! for a new expense, or open for an existing one; the variant carries the id
//! being edited so "editing without a target" cannot be represented.
//!
//! The date chosen in the date picker is held apart from the text fields and
//! merged into the payload when the form is submitted.

use crate::expense::{format_amount, Category, ExpenseDate, ExpenseId, ExpenseInput, ExpenseRecord};
use crate::store::{ExpenseStore, StoreError};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing(ExpenseId),
}

/// Inline validation message for one field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("Please enter the amount!")]
    MissingAmount,
    #[error("Amount must be a number")]
    InvalidAmount,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Please select a category!")]
    MissingCategory,
    #[error("Please select the date!")]
    MissingDate,
    #[error("Please enter the description!")]
    MissingDescription,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub amount: Option<FieldError>,
    pub category: Option<FieldError>,
    pub date: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }
}

/// A validated payload ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(ExpenseInput),
    Update(ExpenseId, ExpenseInput),
}

impl Submission {
    pub async fn dispatch<S>(&self, store: &S) -> Result<ExpenseRecord, StoreError>
    where
        S: ExpenseStore + ?Sized,
    {
        match self {
            Submission::Create(input) => store.create(input).await,
            Submission::Update(id, input) => store.update(id, input).await,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    mode: FormMode,
    amount: String,
    category: Option<Category>,
    description: String,
    selected_date: Option<ExpenseDate>,
    errors: FieldErrors,
    submitting: bool,
}

impl ExpenseForm {
    /// Open for a new expense with every field cleared.
    pub fn open_create(&mut self) {
        *self = Self {
            mode: FormMode::Creating,
            ..Self::default()
        };
    }

    /// Open for `record`, pre-populating every field from it.
    pub fn open_edit(&mut self, record: &ExpenseRecord) {
        *self = Self {
            mode: FormMode::Editing(record.id.clone()),
            amount: format_amount(record.amount),
            category: Some(record.category),
            description: record.description.clone(),
            selected_date: Some(record.date),
            ..Self::default()
        };
    }

    /// Close and discard edits without touching the backend.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Expense"
        } else {
            "Add Expense"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Expense"
        } else {
            "Add Expense"
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn selected_date(&self) -> Option<ExpenseDate> {
        self.selected_date
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
        self.errors.amount = None;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.errors.category = None;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.errors.description = None;
    }

    pub fn select_date(&mut self, date: ExpenseDate) {
        self.selected_date = Some(date);
        self.errors.date = None;
    }

    fn parse_amount(&self) -> Result<f64, FieldError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(FieldError::MissingAmount);
        }
        let amount = raw.parse::<f64>().map_err(|_| FieldError::InvalidAmount)?;
        if !amount.is_finite() {
            return Err(FieldError::InvalidAmount);
        }
        if amount < 0.0 {
            return Err(FieldError::NegativeAmount);
        }
        Ok(amount)
    }

    /// Check the required fields and build the payload for the current mode.
    pub fn validate(&self) -> Result<Submission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let amount = self.parse_amount().map_err(|e| errors.amount = Some(e)).ok();
        if self.category.is_none() {
            errors.category = Some(FieldError::MissingCategory);
        }
        if self.selected_date.is_none() {
            errors.date = Some(FieldError::MissingDate);
        }
        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some(FieldError::MissingDescription);
        }

        match (amount, self.category, self.selected_date) {
            (Some(amount), Some(category), Some(date)) if errors.is_empty() => {
                let input = ExpenseInput {
                    amount,
                    category,
                    date,
                    description: description.to_string(),
                };
                match &self.mode {
                    FormMode::Editing(id) => Ok(Submission::Update(id.clone(), input)),
                    _ => Ok(Submission::Create(input)),
                }
            }
            _ => Err(errors),
        }
    }

    /// Validate and, if everything is present, mark the form as submitting.
    /// Returns `None` when a required field blocks submission; the errors are
    /// then shown on the form and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.is_open() || self.submitting {
            return None;
        }
        match self.validate() {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the store's answer: close on success, keep every field on failure.
    pub fn finish_submit(&mut self, result: &Result<ExpenseRecord, StoreError>) {
        match result {
            Ok(_) => *self = Self::default(),
            Err(_) => self.submitting = false,
        }
    }
}
