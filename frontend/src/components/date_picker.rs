use crate::services::date_utils::{format_locale_date, today};
use chrono::Utc;
use shared::calendar::{month_grid, MonthCursor};
use shared::ExpenseDate;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Selected date, or None when nothing has been picked yet
    pub selected_date: Option<ExpenseDate>,
    pub on_date_change: Callback<ExpenseDate>,
    pub disabled: bool,
    #[prop_or_default]
    pub label: Option<String>,
}

/// Current UTC month, for when the browser clock gives no usable local date.
fn fallback_cursor() -> MonthCursor {
    MonthCursor::containing(Utc::now().date_naive())
}

fn initial_cursor(selected: Option<ExpenseDate>) -> MonthCursor {
    selected
        .or_else(today)
        .map(|date| MonthCursor::containing(date.date()))
        .unwrap_or_else(fallback_cursor)
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let calendar_ref = use_node_ref();
    let cursor = use_state(|| initial_cursor(props.selected_date));

    let display_text = props
        .selected_date
        .map(format_locale_date)
        .unwrap_or_else(|| "Select date".to_string());

    // Reopen on the month of the selected date
    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        let cursor = cursor.clone();
        let selected = props.selected_date;
        Callback::from(move |_: MouseEvent| {
            if !*show_calendar {
                cursor.set(initial_cursor(selected));
            }
            show_calendar.set(!*show_calendar);
        })
    };

    let on_date_select = {
        let on_date_change = props.on_date_change.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |date: ExpenseDate| {
            on_date_change.emit(date);
            show_calendar.set(false);
        })
    };

    // Close when clicking outside the picker
    {
        let show_calendar = show_calendar.clone();
        let calendar_ref = calendar_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = match (*is_open, window()) {
                (true, Some(win)) => Some(gloo::events::EventListener::new(&win, "click", move |e| {
                    let clicked_inside = e
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .zip(calendar_ref.cast::<Element>())
                        .map(|(element, picker)| picker.contains(Some(&element)))
                        .unwrap_or(true);
                    if !clicked_inside {
                        show_calendar.set(false);
                    }
                })),
                _ => None,
            };
            move || drop(listener)
        });
    }

    let prev_month = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.previous()))
    };

    let next_month = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };

    let current_day = today();
    let cells = month_grid(*cursor);

    html! {
        <div class="date-picker" ref={calendar_ref.clone()}>
            {if let Some(label) = &props.label {
                html! { <label class="date-picker-label">{label}</label> }
            } else { html! {} }}

            <div class="date-picker-input">
                <button
                    type="button"
                    class="date-display-button"
                    onclick={toggle_calendar}
                    disabled={props.disabled}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if *show_calendar && !props.disabled {
                    html! {
                        <div class="calendar-dropdown">
                            <div class="calendar-header">
                                <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                                <span class="month-year">{cursor.title()}</span>
                                <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                            </div>

                            <div class="calendar-grid">
                                <div class="weekday-header">
                                    {for WEEKDAYS.iter().map(|day| html! { <span>{*day}</span> })}
                                </div>

                                <div class="calendar-days">
                                    {for cells.iter().map(|cell| {
                                        let date = ExpenseDate::new(cell.date);
                                        let is_selected = props.selected_date == Some(date);
                                        let is_today = current_day == Some(date);
                                        let onclick = {
                                            let on_date_select = on_date_select.clone();
                                            Callback::from(move |_: MouseEvent| on_date_select.emit(date))
                                        };

                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(
                                                    "calendar-day",
                                                    cell.in_month.then_some("current-month"),
                                                    (!cell.in_month).then_some("other-month"),
                                                    is_selected.then_some("selected"),
                                                    is_today.then_some("today")
                                                )}
                                                {onclick}
                                            >
                                                {cell.date.format("%-d").to_string()}
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_cursor_follows_selection() {
        let selected = ExpenseDate::from_ymd(2023, 11, 30);
        assert_eq!(initial_cursor(selected), MonthCursor { year: 2023, month: 11 });
    }

    #[test]
    fn test_fallback_cursor_is_current_month() {
        let before = MonthCursor::containing(Utc::now().date_naive());
        let cursor = fallback_cursor();
        let after = MonthCursor::containing(Utc::now().date_naive());
        assert!(cursor == before || cursor == after);
        assert!((1..=12).contains(&cursor.month));
    }
}
