//! Fan-out/fan-in load of every road's status.
//!
//! One load fetches the road list, then processes every road concurrently:
//! each road issues its five resource requests at once and reduces them into
//! a [`RoadSummary`]. A failing road is logged and excluded; it never cancels
//! the other roads. Only a failed road list aborts the load.

use futures::stream::{self, StreamExt};

use crate::client::AutobahnClient;
use crate::error::{LoadError, RoadFailure};
use crate::reduce::{summarize_road, RoadResources, RoadSummary};
use crate::types::{ResourceKind, RoadId};

/// Immutable result of one load cycle.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Summaries of the roads that loaded, in road-list order.
    pub summaries: Vec<RoadSummary>,
    /// Roads left out because one of their requests failed.
    pub failed_roads: Vec<RoadId>,
}

impl LoadReport {
    /// Number of roads named by the road list.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.summaries.len() + self.failed_roads.len()
    }
}

/// Loads every road with no cap on concurrently processed roads.
///
/// # Errors
///
/// Returns [`LoadError::RoadList`] if the road list cannot be fetched.
/// Per-road failures are not errors; see [`LoadReport::failed_roads`].
pub async fn load_all(client: &AutobahnClient) -> Result<LoadReport, LoadError> {
    load_all_with_limit(client, None).await
}

/// Loads every road, processing at most `max_concurrent_roads` at a time.
///
/// `None` processes every road at once. Summaries keep road-list order
/// regardless of completion order.
///
/// # Errors
///
/// Returns [`LoadError::RoadList`] if the road list cannot be fetched.
pub async fn load_all_with_limit(
    client: &AutobahnClient,
    max_concurrent_roads: Option<usize>,
) -> Result<LoadReport, LoadError> {
    let roads = client.fetch_road_list().await.map_err(LoadError::RoadList)?;
    let limit = max_concurrent_roads.unwrap_or(roads.len()).max(1);
    tracing::debug!(roads = roads.len(), limit, "loading road status");

    let outcomes: Vec<Result<RoadSummary, RoadFailure>> = stream::iter(&roads)
        .map(|road| load_road(client, road))
        .buffered(limit)
        .collect()
        .await;

    let mut report = LoadReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(summary) => report.summaries.push(summary),
            Err(failure) => {
                tracing::warn!(
                    road = %failure.road,
                    kind = %failure.kind,
                    error = %failure.source,
                    "excluding road from report"
                );
                report.failed_roads.push(failure.road);
            }
        }
    }

    if !report.failed_roads.is_empty() {
        tracing::warn!(
            failed_roads = report.failed_roads.len(),
            total_roads = roads.len(),
            "some roads failed to load"
        );
    }
    tracing::info!(
        loaded = report.summaries.len(),
        total_roads = roads.len(),
        "road status load complete"
    );

    Ok(report)
}

/// Fetches the five resource lists of `road` concurrently and reduces them.
///
/// # Errors
///
/// Returns a [`RoadFailure`] naming the first resource kind whose request
/// failed; the remaining requests for this road are dropped.
pub async fn load_road(client: &AutobahnClient, road: &str) -> Result<RoadSummary, RoadFailure> {
    let fetch = move |kind: ResourceKind| async move {
        client
            .fetch_resource(kind, road)
            .await
            .map(|list| list.entries)
            .map_err(|source| RoadFailure {
                road: road.to_owned(),
                kind,
                source,
            })
    };

    let (roadworks, parking_lorry, warnings, closures, charging_stations) = tokio::try_join!(
        fetch(ResourceKind::Roadworks),
        fetch(ResourceKind::ParkingLorry),
        fetch(ResourceKind::Warning),
        fetch(ResourceKind::Closure),
        fetch(ResourceKind::ElectricChargingStation),
    )?;

    let resources = RoadResources {
        roadworks,
        parking_lorry,
        warnings,
        closures,
        charging_stations,
    };
    Ok(summarize_road(road, &resources))
}
