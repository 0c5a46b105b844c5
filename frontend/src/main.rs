use shared::ClientConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::category_tabs::CategoryTabs;
use components::expense_form_modal::ExpenseFormModal;
use components::expense_table::ExpenseTable;
use components::notification_toast::NotificationToast;
use components::reports::ReportsView;
use hooks::use_expense_form::use_expense_form;
use hooks::use_expenses::use_expenses;
use hooks::use_notifications::use_notifications;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(Home)]
fn home() -> Html {
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let notifications = use_notifications();

    let expenses = use_expenses(&api_client, notifications.actions.notify.clone());
    let expense_form = use_expense_form(
        &api_client,
        notifications.actions.notify.clone(),
        expenses.actions.refresh.clone(),
    );

    let on_add_click = {
        let open_create = expense_form.actions.open_create.clone();
        Callback::from(move |_: MouseEvent| open_create.emit(()))
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Expenses"}</h1>
                    <button type="button" class="btn btn-primary add-expense-btn" onclick={on_add_click}>
                        {"Add Expense"}
                    </button>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <CategoryTabs
                        selected={expenses.state.filter}
                        on_select={expenses.actions.set_filter.clone()}
                    />
                    <ExpenseTable
                        expenses={expenses.state.visible()}
                        loading={expenses.state.loading}
                        on_edit={expense_form.actions.open_edit.clone()}
                        on_delete={expenses.actions.delete.clone()}
                    />
                    <ReportsView />
                </div>
            </main>

            <ExpenseFormModal form={expense_form.form.clone()} actions={expense_form.actions.clone()} />
            <NotificationToast
                notification={notifications.current.clone()}
                on_dismiss={notifications.actions.dismiss.clone()}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    api_client: ApiClient,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ApiClient> context={props.api_client.clone()}>
            <Home />
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    // Base URL is fixed at build time, e.g. EXPENSES_API_BASE_URL=http://127.0.0.1:9000 trunk build
    let config = ClientConfig::from_env_value(option_env!("EXPENSES_API_BASE_URL"));
    let api_client = ApiClient::from_config(config);
    Logger::info_with_component("App", &format!("Using expense API at {}", api_client.base_url()));

    yew::Renderer::<App>::with_props(AppProps { api_client }).render();
}
