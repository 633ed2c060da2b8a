//! ODPT (Open Data Platform for Transportation) API client.
//!
//! The catalog exposes stations, operators and railways as independent
//! record sets linked only by shared `owl:sameAs` strings. Each request is a
//! GET to `<base>/<resource>` with the consumer key and any filters as
//! query parameters; the response is always a JSON array.

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, OdptClient, OdptConfig};
pub use error::{Endpoint, OdptError};
pub use mock::MockOdptClient;
pub use source::{CatalogSource, TransitLookup};
pub use types::{
    LocalizedText, OperatorDto, RailwayDto, RailwayFareDto, StationDto, TrainInformationDto,
};
