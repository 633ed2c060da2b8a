//! Compatibility filtering of the three pickers.
//!
//! Every candidate list is a pure projection of the catalog and the current
//! [`Selection`], recomputed after each change. Nothing here mutates the
//! catalog, and a selection that a later change made inconsistent is left
//! in place: its candidate list may then be empty.

use tracing::debug;

use crate::domain::{Railway, Station};

use super::Catalog;

/// The user's current picks, as catalog ids.
///
/// Ids that do not resolve in the catalog filter nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Departure station id
    pub departure: Option<String>,
    /// Arrival station id
    pub arrival: Option<String>,
    /// Railway id
    pub railway: Option<String>,
}

impl Selection {
    /// Select the departure station, or clear it if it is already selected.
    pub fn toggle_departure(&mut self, station_id: &str) {
        toggle(&mut self.departure, station_id);
    }

    /// Select the arrival station, or clear it if it is already selected.
    pub fn toggle_arrival(&mut self, station_id: &str) {
        toggle(&mut self.arrival, station_id);
    }

    /// Select the railway, or clear it if it is already selected.
    pub fn toggle_railway(&mut self, railway_id: &str) {
        toggle(&mut self.railway, railway_id);
    }

    /// Clear all three picks.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether all three picks are present.
    pub fn is_complete(&self) -> bool {
        self.departure.is_some() && self.arrival.is_some() && self.railway.is_some()
    }
}

fn toggle(slot: &mut Option<String>, id: &str) {
    if slot.as_deref() == Some(id) {
        *slot = None;
    } else {
        *slot = Some(id.to_string());
    }
}

/// Candidate lists offered for each picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<'a> {
    pub departures: Vec<&'a Station>,
    pub arrivals: Vec<&'a Station>,
    pub railways: Vec<&'a Railway>,
}

/// Stations lying on `railway`, or every station if none is selected.
pub fn station_candidates<'a>(
    stations: &'a [Station],
    railway: Option<&Railway>,
) -> Vec<&'a Station> {
    match railway {
        Some(railway) => stations
            .iter()
            .filter(|s| s.is_on(&railway.same_as))
            .collect(),
        None => stations.iter().collect(),
    }
}

/// Railways serving every selected station.
///
/// With both stations selected this is the intersection of their
/// memberships, which may be empty. With neither, every railway.
pub fn railway_candidates<'a>(
    railways: &'a [Railway],
    departure: Option<&Station>,
    arrival: Option<&Station>,
) -> Vec<&'a Railway> {
    railways
        .iter()
        .filter(|r| departure.is_none_or(|s| s.is_on(&r.same_as)))
        .filter(|r| arrival.is_none_or(|s| s.is_on(&r.same_as)))
        .collect()
}

/// Compute all three candidate lists for the current selection.
pub fn candidates<'a>(catalog: &'a Catalog, selection: &Selection) -> Candidates<'a> {
    let departure = selection.departure.as_deref().and_then(|id| catalog.station(id));
    let arrival = selection.arrival.as_deref().and_then(|id| catalog.station(id));
    let railway = selection.railway.as_deref().and_then(|id| catalog.railway(id));

    let stations = station_candidates(catalog.stations(), railway);
    let railways = railway_candidates(catalog.railways(), departure, arrival);

    debug!(
        stations = stations.len(),
        railways = railways.len(),
        "computed candidates"
    );

    Candidates {
        departures: stations.clone(),
        arrivals: stations,
        railways,
    }
}
