//! Session catalog of operators, railways and stations.
//!
//! Loaded once when the session starts and read-only afterwards. The
//! catalog is passed explicitly to whatever needs it rather than living in
//! a global.

pub mod filter;
pub mod normalize;

use tracing::info;

use crate::domain::{Operator, Railway, Station};
use crate::odpt::{CatalogSource, OdptError, OperatorDto, RailwayDto, StationDto};

pub use filter::{Candidates, Selection, candidates};

/// Display name used when an operator cannot be resolved.
pub const UNKNOWN_OPERATOR: &str = "不明";

/// Normalized catalog entities for one session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    operators: Vec<Operator>,
    railways: Vec<Railway>,
    stations: Vec<Station>,
}

impl Catalog {
    /// Build a catalog from already-normalized entities.
    pub fn new(operators: Vec<Operator>, railways: Vec<Railway>, stations: Vec<Station>) -> Self {
        Self {
            operators,
            railways,
            stations,
        }
    }

    /// Build a catalog from raw catalog records.
    pub fn from_records(
        stations: Vec<StationDto>,
        operators: Vec<OperatorDto>,
        railways: Vec<RailwayDto>,
    ) -> Self {
        Self::new(
            normalize::normalize_operators(operators),
            normalize::normalize_railways(railways),
            normalize::normalize_stations(stations),
        )
    }

    /// Fetch all three record sets and normalize them.
    ///
    /// The fetches run concurrently. Any failure aborts the load: a
    /// partial catalog is never returned.
    pub async fn load<S: CatalogSource>(source: &S) -> Result<Self, OdptError> {
        let (stations, operators, railways) = futures::try_join!(
            source.fetch_stations(),
            source.fetch_operators(),
            source.fetch_railways()
        )?;

        let raw_stations = stations.len();
        let catalog = Self::from_records(stations, operators, railways);

        info!(
            operators = catalog.operators.len(),
            railways = catalog.railways.len(),
            stations = catalog.stations.len(),
            raw_stations,
            "loaded catalog"
        );

        Ok(catalog)
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn railways(&self) -> &[Railway] {
        &self.railways
    }

    /// Stations, sorted by name.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn railway(&self, id: &str) -> Option<&Railway> {
        self.railways.iter().find(|r| r.id == id)
    }

    /// Look up an operator by its `same_as`.
    pub fn operator(&self, same_as: &str) -> Option<&Operator> {
        self.operators.iter().find(|o| o.same_as == same_as)
    }

    /// Operator name for display, or [`UNKNOWN_OPERATOR`].
    pub fn operator_name(&self, same_as: &str) -> &str {
        self.operator(same_as)
            .map(|o| o.name.as_str())
            .unwrap_or(UNKNOWN_OPERATOR)
    }
}
