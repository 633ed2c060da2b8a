//! Domain types for the ODPT fare and disruption checker.
//!
//! Catalog entities (operators, railways, stations) are loaded once per
//! session and never change afterwards. Disruption notices and fares are
//! fetched per search and discarded with it.

mod fare;
mod information;
mod operator;
mod railway;
mod station;

pub use fare::TrainFare;
pub use information::TrainInformation;
pub use operator::Operator;
pub use railway::Railway;
pub use station::Station;
