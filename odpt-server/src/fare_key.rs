//! Composite station keys for fare lookups.
//!
//! `odpt:RailwayFare` identifies stations as
//! `odpt.Station:<operator>.<line>.<station>`, scoped to the railway the
//! fare applies to. A merged [`Station`](crate::domain::Station) only
//! carries the `same_as` of whichever raw record was seen first, which may
//! belong to a different railway, so the key has to be rebuilt from the
//! selected railway plus the station's local name.
//!
//! Input shape assumptions:
//! - a railway `same_as` looks like `odpt.Railway:<operator>.<line>`; the
//!   prefix is everything after the first `:` (empty if there is none)
//! - a station `same_as` ends in `.<station>`; the suffix is everything after
//!   the last `.` (the whole string if there is none)
//!
//! Inputs that break these assumptions produce a key the fare endpoint
//! does not recognise, which comes back as an empty fare list.

use crate::domain::{Railway, Station};

/// Namespace of station identifiers accepted by the fare endpoint.
pub const FARE_STATION_NAMESPACE: &str = "odpt.Station";

/// The railway-specific part of a railway `same_as`.
pub fn railway_prefix(railway_same_as: &str) -> &str {
    railway_same_as
        .split_once(':')
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

/// The station-local part of a station `same_as`.
pub fn station_suffix(station_same_as: &str) -> &str {
    station_same_as
        .rsplit('.')
        .next()
        .unwrap_or(station_same_as)
}

/// Build the fare key for a station on a railway.
///
/// # Examples
///
/// ```
/// use odpt_server::fare_key::compose_fare_key;
///
/// let key = compose_fare_key(
///     "odpt.Railway:TokyoMetro.Ginza",
///     "odpt.Station:TokyoMetro.Hanzomon.Shibuya",
/// );
/// assert_eq!(key, "odpt.Station:TokyoMetro.Ginza.Shibuya");
/// ```
pub fn compose_fare_key(railway_same_as: &str, station_same_as: &str) -> String {
    format!(
        "{}:{}.{}",
        FARE_STATION_NAMESPACE,
        railway_prefix(railway_same_as),
        station_suffix(station_same_as)
    )
}

/// Fare keys for a departure and arrival station on one railway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareKeys {
    pub from_station: String,
    pub to_station: String,
}

impl FareKeys {
    pub fn compose(railway: &Railway, departure: &Station, arrival: &Station) -> Self {
        Self {
            from_station: compose_fare_key(&railway.same_as, &departure.same_as),
            to_station: compose_fare_key(&railway.same_as, &arrival.same_as),
        }
    }
}
