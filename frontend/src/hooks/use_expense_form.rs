use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::controller::{complete_submission, SubmitOutcome};
use shared::{Category, ExpenseDate, ExpenseForm, ExpenseRecord, Notification};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const COMPONENT: &str = "ExpenseForm";

/// Reducer wrapper so every action applies to the latest form, not a render snapshot.
#[derive(Clone, Default, PartialEq)]
pub struct FormState(pub ExpenseForm);

pub enum FormAction {
    OpenCreate,
    OpenEdit(ExpenseRecord),
    Cancel,
    SetAmount(String),
    SetCategory(Option<Category>),
    SetDescription(String),
    SelectDate(ExpenseDate),
    /// Replace the whole form with the result of a submit step.
    Settle(ExpenseForm),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::OpenCreate => form.open_create(),
            FormAction::OpenEdit(record) => form.open_edit(&record),
            FormAction::Cancel => form.cancel(),
            FormAction::SetAmount(amount) => form.set_amount(amount),
            FormAction::SetCategory(category) => form.set_category(category),
            FormAction::SetDescription(description) => form.set_description(description),
            FormAction::SelectDate(date) => form.select_date(date),
            FormAction::Settle(next) => form = next,
        }
        Rc::new(FormState(form))
    }
}

pub struct UseExpenseFormResult {
    pub form: ExpenseForm,
    pub actions: UseExpenseFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpenseFormActions {
    pub open_create: Callback<()>,
    pub open_edit: Callback<ExpenseRecord>,
    pub cancel: Callback<()>,
    pub on_amount_change: Callback<String>,
    pub on_category_change: Callback<Option<Category>>,
    pub on_description_change: Callback<String>,
    pub on_date_select: Callback<ExpenseDate>,
    pub submit: Callback<()>,
}

/// Drives the add/edit modal. `on_saved` fires after a successful create or update
/// so the caller can re-fetch its list.
#[hook]
pub fn use_expense_form(
    api_client: &ApiClient,
    on_notify: Callback<Notification>,
    on_saved: Callback<()>,
) -> UseExpenseFormResult {
    let state = use_reducer(FormState::default);

    let open_create = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(FormAction::OpenCreate))
    };

    let open_edit = {
        let state = state.clone();
        Callback::from(move |record: ExpenseRecord| {
            Logger::debug_with_component(COMPONENT, &format!("Editing expense {}", record.id));
            state.dispatch(FormAction::OpenEdit(record))
        })
    };

    let cancel = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(FormAction::Cancel))
    };

    let on_amount_change = {
        let state = state.clone();
        Callback::from(move |amount: String| state.dispatch(FormAction::SetAmount(amount)))
    };

    let on_category_change = {
        let state = state.clone();
        Callback::from(move |category: Option<Category>| state.dispatch(FormAction::SetCategory(category)))
    };

    let on_description_change = {
        let state = state.clone();
        Callback::from(move |description: String| state.dispatch(FormAction::SetDescription(description)))
    };

    let on_date_select = {
        let state = state.clone();
        Callback::from(move |date: ExpenseDate| state.dispatch(FormAction::SelectDate(date)))
    };

    let submit = {
        let state = state.clone();
        let api_client = api_client.clone();

        Callback::from(move |_: ()| {
            let mut draft = state.0.clone();
            let submission = match draft.begin_submit() {
                Some(submission) => submission,
                None => {
                    // Either field errors to show, or a submit already in flight
                    if !draft.errors().is_empty() {
                        Logger::warn_with_component(COMPONENT, "Submission blocked by field errors");
                    }
                    state.dispatch(FormAction::Settle(draft));
                    return;
                }
            };
            state.dispatch(FormAction::Settle(draft.clone()));

            let state = state.clone();
            let api_client = api_client.clone();
            let on_notify = on_notify.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let outcome = complete_submission(&mut draft, &submission, &api_client).await;
                state.dispatch(FormAction::Settle(draft));

                match &outcome {
                    SubmitOutcome::Saved { record, .. } => {
                        Logger::info_with_component(COMPONENT, &format!("Saved expense {}", record.id));
                    }
                    SubmitOutcome::Failed { error, .. } => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to save expense: {}", error));
                    }
                    SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => {}
                }

                if let Some(notification) = outcome.notification() {
                    on_notify.emit(notification.clone());
                }
                if outcome.needs_refresh() {
                    on_saved.emit(());
                }
            });
        })
    };

    UseExpenseFormResult {
        form: state.0.clone(),
        actions: UseExpenseFormActions {
            open_create,
            open_edit,
            cancel,
            on_amount_change,
            on_category_change,
            on_description_change,
            on_date_select,
            submit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Submission;

    fn reduce(state: FormState, action: FormAction) -> FormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_actions_apply_to_latest_form() {
        let state = reduce(FormState::default(), FormAction::OpenCreate);
        let state = reduce(state, FormAction::SetAmount("12".to_string()));
        let state = reduce(state, FormAction::SetCategory(Some(Category::Health)));
        let state = reduce(state, FormAction::SelectDate(ExpenseDate::from_ymd(2024, 5, 2).unwrap()));
        let state = reduce(state, FormAction::SetDescription("Pharmacy".to_string()));

        match state.0.validate() {
            Ok(Submission::Create(input)) => {
                assert_eq!(input.amount, 12.0);
                assert_eq!(input.description, "Pharmacy");
            }
            other => panic!("expected a create submission, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_closes() {
        let state = reduce(FormState::default(), FormAction::OpenCreate);
        let state = reduce(state, FormAction::Cancel);
        assert!(!state.0.is_open());
    }
}
