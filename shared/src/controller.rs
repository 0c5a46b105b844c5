//! Submit and delete flows shared by every UI.
//!
//! These tie the form state machine to an [`ExpenseStore`] and decide which
//! notification to show. Callers refresh their list whenever the outcome says
//! so; the list is always re-fetched after a mutation rather than patched.

use crate::expense::{ExpenseId, ExpenseRecord};
use crate::form::{ExpenseForm, FieldErrors, Submission};
use crate::notification::{ExpenseAction, Notification};
use crate::store::{ExpenseStore, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation failed; no store call was made.
    Rejected(FieldErrors),
    /// The form was closed, or a submission is already in flight.
    Ignored,
    Saved {
        record: ExpenseRecord,
        notification: Notification,
    },
    Failed {
        error: StoreError,
        notification: Notification,
    },
}

impl SubmitOutcome {
    pub fn needs_refresh(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            SubmitOutcome::Saved { notification, .. } | SubmitOutcome::Failed { notification, .. } => {
                Some(notification)
            }
            _ => None,
        }
    }
}

fn action_for(submission: &Submission) -> ExpenseAction {
    match submission {
        Submission::Create(_) => ExpenseAction::Add,
        Submission::Update(..) => ExpenseAction::Update,
    }
}

/// Run a submission that [`ExpenseForm::begin_submit`] already produced, then
/// settle the form with the result.
pub async fn complete_submission<S>(
    form: &mut ExpenseForm,
    submission: &Submission,
    store: &S,
) -> SubmitOutcome
where
    S: ExpenseStore + ?Sized,
{
    let action = action_for(submission);
    let result = submission.dispatch(store).await;
    form.finish_submit(&result);

    match result {
        Ok(record) => SubmitOutcome::Saved {
            record,
            notification: Notification::success(action),
        },
        Err(error) => SubmitOutcome::Failed {
            error,
            notification: Notification::failure(action),
        },
    }
}

/// Validate, dispatch and settle the form in one step.
pub async fn submit_form<S>(form: &mut ExpenseForm, store: &S) -> SubmitOutcome
where
    S: ExpenseStore + ?Sized,
{
    match form.begin_submit() {
        Some(submission) => complete_submission(form, &submission, store).await,
        None if !form.errors().is_empty() => SubmitOutcome::Rejected(form.errors().clone()),
        None => SubmitOutcome::Ignored,
    }
}

/// Delete an expense and pick the notification for the result.
pub async fn delete_expense<S>(store: &S, id: &ExpenseId) -> (Result<(), StoreError>, Notification)
where
    S: ExpenseStore + ?Sized,
{
    let result = store.delete(id).await;
    let notification = match &result {
        Ok(()) => Notification::success(ExpenseAction::Delete),
        Err(_) => Notification::failure(ExpenseAction::Delete),
    };
    (result, notification)
}
