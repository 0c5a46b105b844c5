use crate::services::date_utils::format_locale_date;
use shared::pagination::Pagination;
use shared::{format_amount, ExpenseId, ExpenseRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    /// Records already narrowed to the selected category
    pub expenses: Vec<ExpenseRecord>,
    pub loading: bool,
    pub on_edit: Callback<ExpenseRecord>,
    pub on_delete: Callback<ExpenseId>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let pagination = use_state(Pagination::default);
    let total = props.expenses.len();

    // Never show a page past the end after the list shrinks
    let mut current = *pagination;
    current.clamp(total);
    {
        let pagination = pagination.clone();
        use_effect_with(total, move |total| {
            let mut clamped = *pagination;
            clamped.clamp(*total);
            if clamped != *pagination {
                pagination.set(clamped);
            }
            || ()
        });
    }

    let go_to = {
        let pagination = pagination.clone();
        Callback::from(move |page: usize| {
            let mut next = *pagination;
            next.go_to(page, total);
            pagination.set(next);
        })
    };

    let on_previous = {
        let go_to = go_to.clone();
        let page = current.page();
        Callback::from(move |_: MouseEvent| go_to.emit(page.saturating_sub(1)))
    };

    let on_next = {
        let go_to = go_to.clone();
        let page = current.page();
        Callback::from(move |_: MouseEvent| go_to.emit(page + 1))
    };

    html! {
        <section class="expenses-section">
            {if props.loading && total == 0 {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="expenses-table">
                            <thead>
                                <tr>
                                    <th>{"Amount"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if total == 0 {
                                    html! {
                                        <tr class="empty-row">
                                            <td colspan="5">{"No expenses to show"}</td>
                                        </tr>
                                    }
                                } else {
                                    html! {
                                        {for current.slice(&props.expenses).iter().map(|expense| {
                                            let on_edit = {
                                                let on_edit = props.on_edit.clone();
                                                let expense = expense.clone();
                                                Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                                            };
                                            let on_delete = {
                                                let on_delete = props.on_delete.clone();
                                                let id = expense.id.clone();
                                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                            };

                                            html! {
                                                <tr key={expense.id.as_str().to_string()}>
                                                    <td class="amount">{format_amount(expense.amount)}</td>
                                                    <td class="category">{expense.category.as_str()}</td>
                                                    <td class="date">{format_locale_date(expense.date)}</td>
                                                    <td class="description">{&expense.description}</td>
                                                    <td class="actions">
                                                        <button type="button" class="btn btn-link" onclick={on_edit}>{"Edit"}</button>
                                                        <button type="button" class="btn btn-link danger" onclick={on_delete}>{"Delete"}</button>
                                                    </td>
                                                </tr>
                                            }
                                        })}
                                    }
                                }}
                            </tbody>
                        </table>

                        <div class="pagination">
                            <button type="button" class="btn" onclick={on_previous} disabled={!current.has_previous()}>{"‹"}</button>
                            <span class="page-indicator">
                                {format!("Page {} of {}", current.page(), current.page_count(total))}
                            </span>
                            <button type="button" class="btn" onclick={on_next} disabled={!current.has_next(total)}>{"›"}</button>
                        </div>
                    </div>
                }
            }}
        </section>
    }
}

