//! One user's search interaction.
//!
//! A search goes `Idle -> Searching -> Result`, or back to `Idle` on reset
//! or failure. Running a search is split in three so that the selections
//! stay editable while the lookups are in flight:
//!
//! 1. [`SearchSession::begin_search`] validates the selections, gates on
//!    the in-flight flag and hands out a [`SearchTicket`].
//! 2. [`SearchTicket::run`] issues both lookups concurrently and waits for
//!    both.
//! 3. [`SearchSession::complete`] publishes the snapshot in one step.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::catalog::{Candidates, Catalog, Selection, candidates};
use crate::domain::{Railway, Station, TrainFare, TrainInformation};
use crate::fare_key::FareKeys;
use crate::odpt::{OdptError, TransitLookup};

/// Error from a search attempt.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// One of the three pickers is empty
    #[error("no {0} selected")]
    Incomplete(&'static str),

    /// A selected id is not in the catalog
    #[error("unknown {kind}: {id}")]
    UnknownSelection { kind: &'static str, id: String },

    /// Another search from this session has not completed yet
    #[error("a search is already in progress")]
    InFlight,

    /// The session was reset while the search was running
    #[error("search was superseded by a reset")]
    Superseded,

    /// A downstream lookup failed
    #[error("lookup failed: {0}")]
    Lookup(#[from] OdptError),
}

/// Where a session is in its search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Result,
}

/// Snapshot of one completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchedCombination {
    pub departure: Station,
    pub arrival: Station,
    pub railway: Railway,
    /// Current disruption notice; absent means nothing was published.
    pub information: Option<TrainInformation>,
    /// Fare between the two stations; absent means none is on file.
    pub fare: Option<TrainFare>,
    /// Keys the fare was looked up with.
    pub fare_keys: FareKeys,
    /// Wall-clock time both lookups finished.
    pub searched_at: DateTime<Local>,
}

/// Picks "the" record from a list-valued lookup.
///
/// Arbitrary-first: the catalog is expected to return at most one relevant
/// record per query, and when it returns more the first in response order
/// wins.
pub fn first_returned<T>(records: Vec<T>) -> Option<T> {
    records.into_iter().next()
}

/// Selections, phase and last result of one interaction.
#[derive(Debug)]
pub struct SearchSession {
    selection: Selection,
    phase: SearchPhase,
    result: Option<SearchedCombination>,
    /// Bumped on reset so tickets issued earlier are recognised as stale.
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            phase: SearchPhase::Idle,
            result: None,
            generation: 0,
        }
    }

    /// Start from existing picks (e.g. decoded from a request).
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::new()
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The last published snapshot.
    pub fn result(&self) -> Option<&SearchedCombination> {
        self.result.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn toggle_departure(&mut self, station_id: &str) {
        self.selection.toggle_departure(station_id);
    }

    pub fn toggle_arrival(&mut self, station_id: &str) {
        self.selection.toggle_arrival(station_id);
    }

    pub fn toggle_railway(&mut self, railway_id: &str) {
        self.selection.toggle_railway(railway_id);
    }

    /// Candidate lists for the current picks.
    pub fn candidates<'a>(&self, catalog: &'a Catalog) -> Candidates<'a> {
        candidates(catalog, &self.selection)
    }

    /// Clear all picks and discard the snapshot.
    ///
    /// A search still in flight is not cancelled, but its outcome will be
    /// rejected by [`complete`](Self::complete).
    pub fn reset(&mut self) {
        self.selection.clear();
        self.result = None;
        self.phase = SearchPhase::Idle;
        self.generation += 1;
    }

    /// Validate the picks and move to `Searching`.
    ///
    /// On error nothing changes and no lookup should be issued.
    pub fn begin_search(&mut self, catalog: &Catalog) -> Result<SearchTicket, SearchError> {
        if self.is_searching() {
            return Err(SearchError::InFlight);
        }

        let departure_id = self
            .selection
            .departure
            .as_deref()
            .ok_or(SearchError::Incomplete("departure station"))?;
        let arrival_id = self
            .selection
            .arrival
            .as_deref()
            .ok_or(SearchError::Incomplete("arrival station"))?;
        let railway_id = self
            .selection
            .railway
            .as_deref()
            .ok_or(SearchError::Incomplete("railway"))?;

        let departure = resolve_station(catalog, "departure station", departure_id)?;
        let arrival = resolve_station(catalog, "arrival station", arrival_id)?;
        let railway = catalog
            .railway(railway_id)
            .ok_or_else(|| SearchError::UnknownSelection {
                kind: "railway",
                id: railway_id.to_string(),
            })?;

        let fare_keys = FareKeys::compose(railway, departure, arrival);

        info!(
            departure = %departure.name,
            arrival = %arrival.name,
            railway = %railway.name,
            "starting search"
        );

        let ticket = SearchTicket {
            generation: self.generation,
            departure: departure.clone(),
            arrival: arrival.clone(),
            railway: railway.clone(),
            fare_keys,
        };

        self.phase = SearchPhase::Searching;
        self.result = None;

        Ok(ticket)
    }

    /// Publish the outcome of a ticket.
    ///
    /// Success moves to `Result`. Failure moves back to `Idle` with the
    /// picks intact so the user can retry. Outcomes of tickets issued
    /// before a [`reset`](Self::reset) are dropped.
    pub fn complete(
        &mut self,
        outcome: SearchOutcome,
    ) -> Result<&SearchedCombination, SearchError> {
        if outcome.generation != self.generation {
            warn!("dropping outcome of a search superseded by reset");
            return Err(SearchError::Superseded);
        }

        match outcome.result {
            Ok(snapshot) => {
                info!(
                    has_information = snapshot.information.is_some(),
                    has_fare = snapshot.fare.is_some(),
                    "search completed"
                );
                self.phase = SearchPhase::Result;
                Ok(self.result.insert(snapshot))
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.phase = SearchPhase::Idle;
                Err(e)
            }
        }
    }

    /// Run a whole search: begin, look up, complete.
    pub async fn search<L: TransitLookup>(
        &mut self,
        catalog: &Catalog,
        lookup: &L,
    ) -> Result<&SearchedCombination, SearchError> {
        let ticket = self.begin_search(catalog)?;
        let outcome = ticket.run(lookup).await;
        self.complete(outcome)
    }
}

fn resolve_station<'a>(
    catalog: &'a Catalog,
    kind: &'static str,
    id: &str,
) -> Result<&'a Station, SearchError> {
    catalog
        .station(id)
        .ok_or_else(|| SearchError::UnknownSelection {
            kind,
            id: id.to_string(),
        })
}

/// A validated search, detached from the session while it runs.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    departure: Station,
    arrival: Station,
    railway: Railway,
    fare_keys: FareKeys,
}

impl SearchTicket {
    pub fn fare_keys(&self) -> &FareKeys {
        &self.fare_keys
    }

    /// Issue both lookups and wait for both to finish.
    pub async fn run<L: TransitLookup>(self, lookup: &L) -> SearchOutcome {
        let information =
            lookup.fetch_train_information(&self.railway.operator, &self.railway.same_as);
        let fare =
            lookup.fetch_railway_fare(&self.fare_keys.from_station, &self.fare_keys.to_station);

        let (information, fare) = futures::future::join(information, fare).await;

        let result = match (information, fare) {
            (Ok(information), Ok(fare)) => Ok(SearchedCombination {
                information: first_returned(information).map(TrainInformation::from),
                fare: first_returned(fare).map(TrainFare::from),
                searched_at: Local::now(),
                departure: self.departure,
                arrival: self.arrival,
                railway: self.railway,
                fare_keys: self.fare_keys,
            }),
            (Err(e), _) | (_, Err(e)) => Err(SearchError::Lookup(e)),
        };

        SearchOutcome {
            generation: self.generation,
            result,
        }
    }
}

/// What a [`SearchTicket`] produced, to be handed to [`SearchSession::complete`].
#[derive(Debug)]
pub struct SearchOutcome {
    generation: u64,
    result: Result<SearchedCombination, SearchError>,
}
