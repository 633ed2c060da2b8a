//! Mock ODPT client for testing without API access.
//!
//! Serves in-memory records as if they were live API responses, filtering
//! them the way the real endpoints do, and counts calls per endpoint.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::error::{Endpoint, OdptError};
use super::source::{CatalogSource, TransitLookup};
use super::types::{OperatorDto, RailwayDto, RailwayFareDto, StationDto, TrainInformationDto};

/// Mock ODPT client that serves data from memory.
#[derive(Default)]
pub struct MockOdptClient {
    stations: Vec<StationDto>,
    operators: Vec<OperatorDto>,
    railways: Vec<RailwayDto>,
    information: Vec<TrainInformationDto>,
    fares: Vec<RailwayFareDto>,
    failing: HashSet<Endpoint>,
    calls: Mutex<HashMap<Endpoint, usize>>,
}

impl MockOdptClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stations(mut self, stations: Vec<StationDto>) -> Self {
        self.stations = stations;
        self
    }

    pub fn with_operators(mut self, operators: Vec<OperatorDto>) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_railways(mut self, railways: Vec<RailwayDto>) -> Self {
        self.railways = railways;
        self
    }

    pub fn with_information(mut self, information: Vec<TrainInformationDto>) -> Self {
        self.information = information;
        self
    }

    pub fn with_fares(mut self, fares: Vec<RailwayFareDto>) -> Self {
        self.fares = fares;
        self
    }

    /// Make every call to `endpoint` fail with a 503.
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Number of calls made to `endpoint` so far.
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(&endpoint).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Total number of calls made to any endpoint.
    pub fn total_calls(&self) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.values().sum())
            .unwrap_or(0)
    }

    /// Count a call and fail it if the endpoint is marked as failing.
    fn record(&self, endpoint: Endpoint) -> Result<(), OdptError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(endpoint).or_insert(0) += 1;
        }

        if self.failing.contains(&endpoint) {
            return Err(OdptError::Api {
                endpoint,
                status: 503,
                message: "mock failure".to_string(),
            });
        }

        Ok(())
    }
}

impl CatalogSource for MockOdptClient {
    async fn fetch_stations(&self) -> Result<Vec<StationDto>, OdptError> {
        self.record(Endpoint::Stations)?;
        Ok(self.stations.clone())
    }

    async fn fetch_operators(&self) -> Result<Vec<OperatorDto>, OdptError> {
        self.record(Endpoint::Operators)?;
        Ok(self.operators.clone())
    }

    async fn fetch_railways(&self) -> Result<Vec<RailwayDto>, OdptError> {
        self.record(Endpoint::Railways)?;
        Ok(self.railways.clone())
    }
}

impl TransitLookup for MockOdptClient {
    async fn fetch_train_information(
        &self,
        operator_same_as: &str,
        railway_same_as: &str,
    ) -> Result<Vec<TrainInformationDto>, OdptError> {
        self.record(Endpoint::TrainInformation)?;
        Ok(self
            .information
            .iter()
            .filter(|i| {
                i.operator == operator_same_as && i.railway.as_deref() == Some(railway_same_as)
            })
            .cloned()
            .collect())
    }

    async fn fetch_railway_fare(
        &self,
        from_station_key: &str,
        to_station_key: &str,
    ) -> Result<Vec<RailwayFareDto>, OdptError> {
        self.record(Endpoint::RailwayFare)?;
        Ok(self
            .fares
            .iter()
            .filter(|f| f.from_station == from_station_key && f.to_station == to_station_key)
            .cloned()
            .collect())
    }
}
