//! User-facing toast messages for store outcomes.

/// How long a toast stays on screen.
pub const NOTIFICATION_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// The user action a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseAction {
    Add,
    Update,
    Delete,
}

impl ExpenseAction {
    fn past_tense(&self) -> &'static str {
        match self {
            ExpenseAction::Add => "added",
            ExpenseAction::Update => "updated",
            ExpenseAction::Delete => "deleted",
        }
    }

    fn gerund(&self) -> &'static str {
        match self {
            ExpenseAction::Add => "adding",
            ExpenseAction::Update => "updating",
            ExpenseAction::Delete => "deleting",
        }
    }
}

impl Notification {
    pub fn success(action: ExpenseAction) -> Self {
        let verb = action.past_tense();
        let mut title = String::from("Expense ");
        title.push_str(&verb[..1].to_uppercase());
        title.push_str(&verb[1..]);
        Self {
            kind: NotificationKind::Success,
            title,
            message: format!("Your expense has been successfully {}.", verb),
        }
    }

    pub fn failure(action: ExpenseAction) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: format!(
                "There was an error {} your expense. Please try again.",
                action.gerund()
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
