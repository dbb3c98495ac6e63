use std::sync::{Arc, Mutex};

use crate::models::{Reminder, ReminderPatch};

/// In-memory reminder store: an insertion-ordered sequence behind a mutex.
///
/// Ids are client-supplied and not required to be unique; lookups act on
/// the first match in insertion order. Cloning shares the same sequence.
#[derive(Clone, Default)]
pub struct ReminderStore {
    inner: Arc<Mutex<Vec<Reminder>>>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. No uniqueness check.
    pub fn create(&self, reminder: Reminder) {
        self.inner.lock().unwrap().push(reminder);
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> Vec<Reminder> {
        self.inner.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<Reminder> {
        self.inner.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    /// Merges `patch` into the first record matching `id`. Present fields
    /// replace stored values; returns the updated record.
    pub fn update(&self, id: &str, patch: ReminderPatch) -> Option<Reminder> {
        let mut reminders = self.inner.lock().unwrap();
        let reminder = reminders.iter_mut().find(|r| r.id == id)?;
        if let Some(title) = patch.title {
            reminder.title = title;
        }
        if let Some(description) = patch.description {
            reminder.description = description;
        }
        if let Some(due_date) = patch.due_date {
            reminder.due_date = due_date;
        }
        if let Some(is_completed) = patch.is_completed {
            reminder.is_completed = is_completed;
        }
        Some(reminder.clone())
    }

    /// Removes the first record matching `id` and returns it.
    pub fn delete(&self, id: &str) -> Option<Reminder> {
        let mut reminders = self.inner.lock().unwrap();
        let index = reminders.iter().position(|r| r.id == id)?;
        Some(reminders.remove(index))
    }

    pub fn set_completed(&self, id: &str, value: bool) -> Option<Reminder> {
        let mut reminders = self.inner.lock().unwrap();
        let reminder = reminders.iter_mut().find(|r| r.id == id)?;
        reminder.is_completed = value;
        Some(reminder.clone())
    }

    /// Returns the ordered subsequence matching `predicate`.
    pub fn filter(&self, predicate: impl Fn(&Reminder) -> bool) -> Vec<Reminder> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}
