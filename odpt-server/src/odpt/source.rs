//! Capabilities the core needs from the catalog.
//!
//! The session catalog only needs [`CatalogSource`]; a search only needs
//! [`TransitLookup`]. Both are implemented by the live client and by the mock.

use std::future::Future;

use super::error::OdptError;
use super::types::{OperatorDto, RailwayDto, RailwayFareDto, StationDto, TrainInformationDto};

/// Source of the catalog record sets loaded once per session.
pub trait CatalogSource {
    /// All station records, one per (station, railway) pairing.
    fn fetch_stations(&self) -> impl Future<Output = Result<Vec<StationDto>, OdptError>> + Send;

    /// All operator records.
    fn fetch_operators(&self) -> impl Future<Output = Result<Vec<OperatorDto>, OdptError>> + Send;

    /// All railway records.
    fn fetch_railways(&self) -> impl Future<Output = Result<Vec<RailwayDto>, OdptError>> + Send;
}

/// Per-search lookups.
pub trait TransitLookup {
    /// Disruption notices for one railway of one operator.
    fn fetch_train_information(
        &self,
        operator_same_as: &str,
        railway_same_as: &str,
    ) -> impl Future<Output = Result<Vec<TrainInformationDto>, OdptError>> + Send;

    /// Fares between two composite fare keys.
    fn fetch_railway_fare(
        &self,
        from_station_key: &str,
        to_station_key: &str,
    ) -> impl Future<Output = Result<Vec<RailwayFareDto>, OdptError>> + Send;
}
