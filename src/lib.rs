//! In-memory reminder-tracking HTTP API.
//!
//! Reminders are held in an insertion-ordered sequence for the lifetime of
//! the process; there is no persistence. The router exposes CRUD plus
//! completed / not-completed / due-today views over the same store.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use router::{app, app_with_state, AppState};
