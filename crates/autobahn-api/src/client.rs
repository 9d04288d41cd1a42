//! HTTP client for the autobahn road-information API.
//!
//! One unauthenticated GET per call, no retries and no caching. Road
//! identifiers come from the API itself and are interpolated into request
//! paths without escaping.

use std::time::Duration;

use autobahn_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::ApiError;
use crate::types::{ResourceEntry, ResourceKind, ResourceList, RoadId, RoadListResponse};

/// Client for the autobahn REST API.
///
/// Use [`AutobahnClient::new`] with the loaded configuration, or
/// [`AutobahnClient::with_base_url`] to point at a mock server in tests.
pub struct AutobahnClient {
    client: Client,
    base_url: String,
}

impl AutobahnClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if the configured base
    /// URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// `timeout_secs` of `None` leaves requests without an overall timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` is not a
    /// valid absolute URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: trimmed.to_owned(),
        })
    }

    /// Fetches the identifiers of every road the API knows about.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body is not `{"roads": [...]}`.
    pub async fn fetch_road_list(&self) -> Result<Vec<RoadId>, ApiError> {
        let url = self.road_list_url();
        let body = self.request_json(&url).await?;
        let envelope: RoadListResponse =
            serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
                context: "road list".to_owned(),
                source: e,
            })?;
        Ok(envelope.roads)
    }

    /// Fetches one sub-resource list for a road.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::MissingList`] if the envelope lacks the `kind` key.
    /// - [`ApiError::Deserialize`] if the body or its entries do not match the
    ///   expected shape.
    pub async fn fetch_resource(
        &self,
        kind: ResourceKind,
        road: &str,
    ) -> Result<ResourceList, ApiError> {
        let url = self.resource_url(kind, road);
        let mut body = self.request_json(&url).await?;

        let list = body
            .get_mut(kind.as_str())
            .map(serde_json::Value::take)
            .ok_or_else(|| ApiError::MissingList {
                url: url.clone(),
                field: kind.as_str(),
            })?;

        let entries: Vec<ResourceEntry> =
            serde_json::from_value(list).map_err(|e| ApiError::Deserialize {
                context: format!("{kind} list for road {road}"),
                source: e,
            })?;

        Ok(ResourceList { kind, entries })
    }

    /// Fetches a single entry from `/details/{kind}/{id}`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body is not an entry object.
    pub async fn fetch_details(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<ResourceEntry, ApiError> {
        let url = self.details_url(kind, id);
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: format!("{kind} details for {id}"),
            source: e,
        })
    }

    fn road_list_url(&self) -> String {
        self.base_url.clone()
    }

    fn resource_url(&self, kind: ResourceKind, road: &str) -> String {
        format!("{}/{road}/services/{kind}", self.base_url)
    }

    fn details_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/details/{kind}/{id}", self.base_url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    async fn request_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
