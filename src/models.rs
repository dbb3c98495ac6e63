use serde::{Deserialize, Serialize};

/// A single reminder record. `due_date` is kept as a `YYYY-MM-DD` string
/// and compared by string equality, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub is_completed: bool,
}

/// Partial update for `PATCH /reminders/:id`. A present field replaces the
/// stored value, including `""` and `false`; absent fields are untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub is_completed: Option<bool>,
}
