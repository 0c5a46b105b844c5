use crate::components::date_picker::DatePicker;
use crate::hooks::use_expense_form::UseExpenseFormActions;
use shared::{Category, ExpenseForm, FieldError};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormModalProps {
    pub form: ExpenseForm,
    pub actions: UseExpenseFormActions,
}

fn field_error(error: &Option<FieldError>) -> Html {
    match error {
        Some(error) => html! { <div class="field-error">{error.to_string()}</div> },
        None => html! {},
    }
}

#[function_component(ExpenseFormModal)]
pub fn expense_form_modal(props: &ExpenseFormModalProps) -> Html {
    let form = &props.form;
    let actions = &props.actions;
    let is_submitting = form.is_submitting();

    let on_amount_input = {
        let on_amount_change = actions.on_amount_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_amount_change.emit(input.value());
        })
    };

    let on_category_change = {
        let on_category_change = actions.on_category_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_category_change.emit(select.value().parse::<Category>().ok());
        })
    };

    let on_description_input = {
        let on_description_change = actions.on_description_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_description_change.emit(input.value());
        })
    };

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    // Closing is blocked while a request is in flight
    let on_backdrop_click = {
        let cancel = actions.cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !is_submitting {
                cancel.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let cancel = actions.cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    if !form.is_open() {
        return html! {};
    }

    let errors = form.errors();
    let selected_category = form.category().map(|c| c.as_str()).unwrap_or("");

    html! {
        <div class="expense-modal-backdrop" onclick={on_backdrop_click}>
            <div class="expense-modal" onclick={on_modal_click}>
                <div class="expense-modal-content">
                    <h3 class="expense-modal-title">{form.title()}</h3>

                    <form class="expense-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="expense-amount">{"Amount"}</label>
                            <input
                                id="expense-amount"
                                type="number"
                                step="0.01"
                                min="0"
                                class="expense-input"
                                placeholder="0.00"
                                value={form.amount().to_string()}
                                oninput={on_amount_input}
                                disabled={is_submitting}
                                autofocus=true
                            />
                            {field_error(&errors.amount)}
                        </div>

                        <div class="form-group">
                            <label for="expense-category">{"Category"}</label>
                            <select
                                id="expense-category"
                                class="expense-input"
                                onchange={on_category_change}
                                disabled={is_submitting}
                            >
                                <option value="" selected={selected_category.is_empty()} disabled=true>
                                    {"Select a category"}
                                </option>
                                {for Category::ALL.iter().map(|category| html! {
                                    <option
                                        value={category.as_str()}
                                        selected={selected_category == category.as_str()}
                                    >
                                        {category.as_str()}
                                    </option>
                                })}
                            </select>
                            {field_error(&errors.category)}
                        </div>

                        <div class="form-group">
                            <DatePicker
                                label={Some("Date".to_string())}
                                selected_date={form.selected_date()}
                                on_date_change={actions.on_date_select.clone()}
                                disabled={is_submitting}
                            />
                            {field_error(&errors.date)}
                        </div>

                        <div class="form-group">
                            <label for="expense-description">{"Description"}</label>
                            <input
                                id="expense-description"
                                type="text"
                                class="expense-input"
                                placeholder="What was it for?"
                                value={form.description().to_string()}
                                oninput={on_description_input}
                                disabled={is_submitting}
                            />
                            {field_error(&errors.description)}
                        </div>

                        <div class="expense-modal-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={is_submitting}
                            >
                                {if is_submitting { "Saving..." } else { form.submit_label() }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={is_submitting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
