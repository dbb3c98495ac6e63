use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::store::ReminderStore;

/// Shared application state, cloned into every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ReminderStore,
}

pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Builds the router over an injected state (used by tests to observe the
/// store). Fixed-segment routes like `/reminders/completed` are static
/// routes, which axum matches ahead of the `:id` capture.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/reminders",
            get(handlers::list_reminders).post(handlers::create_reminder),
        )
        .route("/reminders/completed", get(handlers::completed_reminders))
        .route(
            "/reminders/not-completed",
            get(handlers::not_completed_reminders),
        )
        .route("/reminders/due-today", get(handlers::due_today_reminders))
        .route(
            "/reminders/:id",
            get(handlers::get_reminder)
                .patch(handlers::update_reminder)
                .delete(handlers::delete_reminder),
        )
        .route(
            "/reminders/:id/mark-completed",
            post(handlers::mark_completed),
        )
        .route(
            "/reminders/:id/unmark-completed",
            post(handlers::unmark_completed),
        )
        .with_state(state)
}
