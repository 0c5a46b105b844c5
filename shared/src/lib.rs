//! Core of the expense tracker, shared by the browser client and the dev server.
//!
//! Everything here is free of browser and server dependencies so it compiles
//! for `wasm32` and native targets alike and can be tested natively.

pub mod calendar;
pub mod config;
pub mod controller;
pub mod expense;
pub mod filter;
pub mod form;
pub mod memory;
pub mod notification;
pub mod pagination;
pub mod reports;
pub mod sequencer;
pub mod store;

pub use config::{ApiRoutes, ClientConfig, DEFAULT_API_BASE_URL};
pub use expense::{format_amount, Category, ExpenseDate, ExpenseId, ExpenseInput, ExpenseRecord};
pub use filter::CategoryFilter;
pub use form::{ExpenseForm, FieldError, FieldErrors, FormMode, Submission};
pub use memory::MemoryExpenseStore;
pub use notification::{ExpenseAction, Notification, NotificationKind};
pub use reports::{BucketLabel, CategoryTotal, ChartPoint, MonthlyTotal};
pub use sequencer::{RequestSequencer, RequestTicket};
pub use store::{ExpenseStore, ReportSource, StoreError, StoreOperation};
