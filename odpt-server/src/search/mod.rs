//! Search orchestration.
//!
//! Turns three complete picks into a disruption notice and a fare, both
//! fetched on demand and never cached.

mod session;

pub use session::{
    SearchError, SearchOutcome, SearchPhase, SearchSession, SearchTicket, SearchedCombination,
    first_returned,
};
