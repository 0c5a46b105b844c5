use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::controller::delete_expense;
use shared::{CategoryFilter, ExpenseId, ExpenseRecord, ExpenseStore, Notification, RequestSequencer};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const COMPONENT: &str = "use_expenses";

#[derive(Clone, PartialEq)]
pub struct ExpensesState {
    /// Records for the selected tab, in server order.
    pub records: Vec<ExpenseRecord>,
    pub filter: CategoryFilter,
    pub loading: bool,
}

impl ExpensesState {
    pub fn visible(&self) -> Vec<ExpenseRecord> {
        self.filter.visible(&self.records).into_iter().cloned().collect()
    }
}

pub struct UseExpensesResult {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    pub refresh: Callback<()>,
    pub set_filter: Callback<CategoryFilter>,
    pub delete: Callback<ExpenseId>,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient, on_notify: Callback<Notification>) -> UseExpensesResult {
    let records = use_state(Vec::<ExpenseRecord>::new);
    let filter = use_state(CategoryFilter::default);
    let loading = use_state(|| true);
    let sequencer = use_mut_ref(RequestSequencer::default);

    // The selected tab goes to the backend as `?category=`
    let refresh = {
        let api_client = api_client.clone();
        let records = records.clone();
        let loading = loading.clone();
        let sequencer = sequencer.clone();

        use_callback(*filter, move |_: (), filter| {
            let filter = *filter;
            let api_client = api_client.clone();
            let records = records.clone();
            let loading = loading.clone();
            let sequencer = sequencer.clone();
            let ticket = sequencer.borrow_mut().issue();

            spawn_local(async move {
                loading.set(true);
                let response = api_client.list(filter).await;

                let Some(result) = sequencer.borrow().accept(ticket, response) else {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Discarding stale {} list response #{}", filter, ticket.value()),
                    );
                    return;
                };

                match result {
                    Ok(fetched) => {
                        Logger::debug_with_component(COMPONENT, &format!("Loaded {} expenses", fetched.len()));
                        records.set(fetched);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to fetch expenses: {}", e));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Load on mount and again whenever the tab changes
    {
        let refresh = refresh.clone();
        use_effect_with(*filter, move |_| {
            refresh.emit(());
            || ()
        });
    }

    let set_filter = {
        let filter = filter.clone();
        use_callback((), move |selected: CategoryFilter, _| {
            Logger::info_with_component(COMPONENT, &format!("Showing {} expenses", selected));
            filter.set(selected);
        })
    };

    let delete = {
        let api_client = api_client.clone();

        use_callback((on_notify, refresh.clone()), move |id: ExpenseId, (on_notify, refresh)| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_notify = on_notify.clone();

            spawn_local(async move {
                let (result, notification) = delete_expense(&api_client, &id).await;
                match result {
                    Ok(()) => {
                        Logger::info_with_component(COMPONENT, &format!("Deleted expense {}", id));
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to delete expense {}: {}", id, e));
                    }
                }
                on_notify.emit(notification);
            });
        })
    };

    UseExpensesResult {
        state: ExpensesState {
            records: (*records).clone(),
            filter: *filter,
            loading: *loading,
        },
        actions: UseExpensesActions {
            refresh,
            set_filter,
            delete,
        },
    }
}
