//! Web layer for the booking core.
//!
//! Provides HTTP endpoints for registration, train composition, journey
//! scheduling, ticket sales and boarding-list export. Request strings are
//! parsed into domain types here; validation failures from the core map
//! onto HTTP statuses in [`routes::AppError`].

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
