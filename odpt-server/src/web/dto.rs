//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Candidates, Catalog, Selection};
use crate::domain::{Railway, Station, TrainFare, TrainInformation};
use crate::search::SearchedCombination;

/// The three picks, as sent by a form or a JSON client.
///
/// Empty strings count as "not selected", which is what an HTML `<select>`
/// sends for its placeholder option.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectionParams {
    /// Departure station id
    pub departure: Option<String>,

    /// Arrival station id
    pub arrival: Option<String>,

    /// Railway id
    pub railway: Option<String>,

    /// Pick to flip after the others are applied, as `<field>:<id>`.
    /// Flipping the current pick clears it.
    #[serde(default)]
    pub toggle: Option<String>,
}

impl SelectionParams {
    pub fn into_selection(self) -> Selection {
        let mut selection = Selection {
            departure: non_empty(self.departure),
            arrival: non_empty(self.arrival),
            railway: non_empty(self.railway),
        };

        if let Some((field, id)) = self.toggle.as_deref().and_then(|t| t.split_once(':')) {
            match field {
                "departure" => selection.toggle_departure(id),
                "arrival" => selection.toggle_arrival(id),
                "railway" => selection.toggle_railway(id),
                _ => debug!(field, "ignoring toggle of unknown picker"),
            }
        }

        selection
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A station in a candidate list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub operator: String,
    pub operator_name: String,
    /// Railway `same_as` values
    pub railways: Vec<String>,
}

impl StationResult {
    pub fn from_station(station: &Station, catalog: &Catalog) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            operator: station.operator.clone(),
            operator_name: catalog.operator_name(&station.operator).to_string(),
            railways: station.railways.clone(),
        }
    }
}

/// A railway in a candidate list.
#[derive(Debug, Serialize)]
pub struct RailwayResult {
    pub id: String,
    pub name: String,
    pub same_as: String,
    pub operator: String,
    pub operator_name: String,
}

impl RailwayResult {
    pub fn from_railway(railway: &Railway, catalog: &Catalog) -> Self {
        Self {
            id: railway.id.clone(),
            name: railway.name.clone(),
            same_as: railway.same_as.clone(),
            operator: railway.operator.clone(),
            operator_name: catalog.operator_name(&railway.operator).to_string(),
        }
    }
}

/// Candidate lists for the three pickers.
#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub departures: Vec<StationResult>,
    pub arrivals: Vec<StationResult>,
    pub railways: Vec<RailwayResult>,
}

impl CandidatesResponse {
    pub fn from_candidates(candidates: &Candidates<'_>, catalog: &Catalog) -> Self {
        let stations = |list: &[&Station]| -> Vec<StationResult> {
            list.iter()
                .map(|s| StationResult::from_station(s, catalog))
                .collect()
        };

        Self {
            departures: stations(&candidates.departures),
            arrivals: stations(&candidates.arrivals),
            railways: candidates
                .railways
                .iter()
                .map(|r| RailwayResult::from_railway(r, catalog))
                .collect(),
        }
    }
}

/// Disruption notice in a search response.
#[derive(Debug, Serialize)]
pub struct InformationResult {
    pub text: String,
    /// RFC 3339 issue time
    pub date: Option<String>,
}

impl From<&TrainInformation> for InformationResult {
    fn from(info: &TrainInformation) -> Self {
        Self {
            text: info.information_text.clone(),
            date: info.date.map(|d| d.to_rfc3339()),
        }
    }
}

/// Fare in a search response.
#[derive(Debug, Serialize)]
pub struct FareResult {
    /// Ticket fare in yen
    pub ticket_fare: Option<u32>,
    /// IC card fare in yen
    pub ic_card_fare: Option<u32>,
}

impl From<&TrainFare> for FareResult {
    fn from(fare: &TrainFare) -> Self {
        Self {
            ticket_fare: fare.ticket_fare,
            ic_card_fare: fare.ic_card_fare,
        }
    }
}

/// Result of a search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub departure: StationResult,
    pub arrival: StationResult,
    pub railway: RailwayResult,

    /// Absent when no notice is published (normal service)
    pub information: Option<InformationResult>,

    /// Absent when no fare is on file
    pub fare: Option<FareResult>,

    /// Composite keys the fare was looked up with
    pub from_station_key: String,
    pub to_station_key: String,

    /// RFC 3339 completion time
    pub searched_at: String,
}

impl SearchResponse {
    pub fn from_result(result: &SearchedCombination, catalog: &Catalog) -> Self {
        Self {
            departure: StationResult::from_station(&result.departure, catalog),
            arrival: StationResult::from_station(&result.arrival, catalog),
            railway: RailwayResult::from_railway(&result.railway, catalog),
            information: result.information.as_ref().map(InformationResult::from),
            fare: result.fare.as_ref().map(FareResult::from),
            from_station_key: result.fare_keys.from_station.clone(),
            to_station_key: result.fare_keys.to_station.clone(),
            searched_at: result.searched_at.to_rfc3339(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
