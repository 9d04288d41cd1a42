use thiserror::Error;

use crate::types::{ResourceKind, RoadId};

/// Errors returned by the autobahn API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response envelope did not contain the list named after the resource kind.
    #[error("response from {url} has no \"{field}\" list")]
    MissingList { url: String, field: &'static str },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// One road whose resources could not all be fetched.
///
/// Contained by the aggregator: the road is logged and left out of the report.
#[derive(Debug, Error)]
#[error("failed to load {kind} for road {road}: {source}")]
pub struct RoadFailure {
    pub road: RoadId,
    pub kind: ResourceKind,
    #[source]
    pub source: ApiError,
}

/// Errors that abort a whole load cycle.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch road list: {0}")]
    RoadList(#[source] ApiError),
}
