//! ODPT open-data API client.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{Endpoint, OdptError};
use super::source::{CatalogSource, TransitLookup};
use super::types::{OperatorDto, RailwayDto, RailwayFareDto, StationDto, TrainInformationDto};

/// Default base URL for the ODPT API (v4).
pub const DEFAULT_BASE_URL: &str = "https://api.odpt.org/api/v4";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the ODPT client.
#[derive(Debug, Clone)]
pub struct OdptConfig {
    /// Consumer key, sent as the `acl:consumerKey` query parameter
    pub consumer_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OdptConfig {
    /// Create a new config with the given consumer key.
    pub fn new(consumer_key: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ODPT API client.
///
/// Every call is a one-shot GET; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct OdptClient {
    http: reqwest::Client,
    base_url: String,
    consumer_key: String,
}

impl OdptClient {
    /// Create a new ODPT client with the given configuration.
    pub fn new(config: OdptConfig) -> Result<Self, OdptError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            consumer_key: config.consumer_key,
        })
    }

    /// URL of an endpoint, without query parameters.
    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.resource())
    }

    /// Fetch every record of `endpoint` matching the given filters.
    async fn get_records<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filters: &[(&str, &str)],
    ) -> Result<Vec<T>, OdptError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(filters.len() + 1);
        query.extend_from_slice(filters);
        query.push(("acl:consumerKey", self.consumer_key.as_str()));

        debug!(%endpoint, ?filters, "requesting catalog records");

        let response = self
            .http
            .get(self.url(endpoint))
            .query(&query)
            .send()
            .await
            .map_err(|source| OdptError::Http { endpoint, source })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(OdptError::Unauthorized { endpoint });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OdptError::Api {
                endpoint,
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| OdptError::Http { endpoint, source })?;

        let records: Vec<T> = serde_json::from_str(&body).map_err(|e| OdptError::Json {
            endpoint,
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        debug!(%endpoint, count = records.len(), "received catalog records");
        Ok(records)
    }
}

impl CatalogSource for OdptClient {
    async fn fetch_stations(&self) -> Result<Vec<StationDto>, OdptError> {
        self.get_records(Endpoint::Stations, &[]).await
    }

    async fn fetch_operators(&self) -> Result<Vec<OperatorDto>, OdptError> {
        self.get_records(Endpoint::Operators, &[]).await
    }

    async fn fetch_railways(&self) -> Result<Vec<RailwayDto>, OdptError> {
        self.get_records(Endpoint::Railways, &[]).await
    }
}

impl TransitLookup for OdptClient {
    async fn fetch_train_information(
        &self,
        operator_same_as: &str,
        railway_same_as: &str,
    ) -> Result<Vec<TrainInformationDto>, OdptError> {
        self.get_records(
            Endpoint::TrainInformation,
            &[
                ("odpt:operator", operator_same_as),
                ("odpt:railway", railway_same_as),
            ],
        )
        .await
    }

    async fn fetch_railway_fare(
        &self,
        from_station_key: &str,
        to_station_key: &str,
    ) -> Result<Vec<RailwayFareDto>, OdptError> {
        self.get_records(
            Endpoint::RailwayFare,
            &[
                ("odpt:fromStation", from_station_key),
                ("odpt:toStation", to_station_key),
            ],
        )
        .await
    }
}
