pub mod category_tabs;
pub mod date_picker;
pub mod expense_form_modal;
pub mod expense_table;
pub mod notification_toast;
pub mod reports;
