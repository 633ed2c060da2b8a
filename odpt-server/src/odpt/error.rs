//! ODPT client error types.

use std::fmt;

/// The catalog endpoint a request was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Stations,
    Operators,
    Railways,
    TrainInformation,
    RailwayFare,
}

impl Endpoint {
    /// The ODPT resource name used in the request path.
    pub fn resource(&self) -> &'static str {
        match self {
            Endpoint::Stations => "odpt:Station",
            Endpoint::Operators => "odpt:Operator",
            Endpoint::Railways => "odpt:Railway",
            Endpoint::TrainInformation => "odpt:TrainInformation",
            Endpoint::RailwayFare => "odpt:RailwayFare",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

/// Errors that can occur when talking to the ODPT API.
#[derive(Debug, thiserror::Error)]
pub enum OdptError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("{endpoint} request failed: {source}")]
    Http {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Consumer key rejected
    #[error("{endpoint} unauthorized: check ODPT_API_KEY")]
    Unauthorized { endpoint: Endpoint },

    /// API returned an error status
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },

    /// Response body was not the expected JSON array
    #[error("{endpoint} JSON parse error: {message}")]
    Json {
        endpoint: Endpoint,
        message: String,
        body: Option<String>,
    },
}

impl OdptError {
    /// The endpoint that failed. `None` only for client construction errors.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            OdptError::Http { endpoint, .. }
            | OdptError::Unauthorized { endpoint }
            | OdptError::Api { endpoint, .. }
            | OdptError::Json { endpoint, .. } => Some(*endpoint),
            OdptError::Client(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OdptError::Api {
            endpoint: Endpoint::RailwayFare,
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "odpt:RailwayFare returned 503: Service Unavailable"
        );
        assert_eq!(err.endpoint(), Some(Endpoint::RailwayFare));

        let err = OdptError::Json {
            endpoint: Endpoint::Stations,
            message: "expected a sequence".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("odpt:Station"));
        assert!(err.to_string().contains("expected a sequence"));

        let err = OdptError::Unauthorized {
            endpoint: Endpoint::Operators,
        };
        assert_eq!(err.endpoint(), Some(Endpoint::Operators));
        assert_eq!(err.to_string(), "odpt:Operator unauthorized: check ODPT_API_KEY");
    }
}
