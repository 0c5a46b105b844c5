use chrono::Datelike;
use js_sys::Date;
use shared::ExpenseDate;
use wasm_bindgen::JsValue;

/// Format a date the way the browser's default locale prints it (e.g. "3/1/2024").
pub fn format_locale_date(date: ExpenseDate) -> String {
    let day = date.date();
    let js_date = Date::new_with_year_month_day(day.year() as u32, day.month0() as i32, day.day() as i32);
    js_date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Today's date in the browser's local time zone.
pub fn today() -> Option<ExpenseDate> {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    ExpenseDate::from_ymd(year as i32, month, day)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_locale_date_contains_year() {
        let date = ExpenseDate::from_ymd(2024, 3, 1).unwrap();
        let formatted = format_locale_date(date);
        assert!(formatted.contains("2024"), "got {}", formatted);
    }

    #[wasm_bindgen_test]
    fn test_today_is_a_valid_date() {
        assert!(today().is_some());
    }
}
