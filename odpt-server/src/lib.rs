//! ODPT train delay and fare checker.
//!
//! Lets a user pick a departure station, an arrival station and a railway
//! from the ODPT open-data catalog, then fetches the railway's current
//! disruption notice and the fare between the two stations.
//!
//! The catalog only links its record sets through shared identifier
//! strings. [`catalog`] merges them into entities and keeps the three
//! pickers consistent, [`fare_key`] bridges station identifiers into the
//! namespace the fare endpoint expects, and [`search`] runs one lookup.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod fare_key;
pub mod odpt;
pub mod search;
pub mod web;
