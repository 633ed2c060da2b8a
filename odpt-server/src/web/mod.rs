//! Web layer for the fare and disruption checker.
//!
//! Provides an HTML search page and a small JSON API over the session
//! catalog and the search orchestration.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
