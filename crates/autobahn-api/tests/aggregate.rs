//! Integration tests for the road status load using wiremock HTTP mocks.

use std::time::Duration;

use autobahn_api::{load_all, load_all_with_limit, load_road, AutobahnClient, LoadError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KINDS: [&str; 5] = [
    "roadworks",
    "parking_lorry",
    "warning",
    "closure",
    "electric_charging_station",
];

fn test_client(server: &MockServer) -> AutobahnClient {
    AutobahnClient::with_base_url(
        &format!("{}/o/autobahn", server.uri()),
        Some(5),
        "autobahn-test/0.1",
    )
    .expect("client construction should not fail")
}

async fn mount_road_list(server: &MockServer, roads: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/o/autobahn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "roads": roads })))
        .mount(server)
        .await;
}

/// Mounts empty lists for every kind of `road`, except `failing_kind` which answers 500.
async fn mount_road(server: &MockServer, road: &str, failing_kind: Option<&str>, delay_ms: u64) {
    for kind in KINDS {
        let response = if failing_kind == Some(kind) {
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200)
                .set_body_json(json!({ kind: [] }))
                .set_delay(Duration::from_millis(delay_ms))
        };
        Mock::given(method("GET"))
            .and(path(format!("/o/autobahn/{road}/services/{kind}")))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn load_road_reduces_all_five_resources() {
    let server = MockServer::start().await;
    let bodies = [
        (
            "roadworks",
            json!({ "roadworks": [{
                "subtitle": "Köln Richtung Dortmund",
                "description": ["Beginn: 01.03.24"]
            }] }),
        ),
        (
            "parking_lorry",
            json!({ "parking_lorry": [{ "title": "Rastplatz Hasselt", "subtitle": "PWC" }] }),
        ),
        (
            "warning",
            json!({ "warning": [{ "title": "Stau" }, { "title": "Unfall" }, { "title": "Glätte" }] }),
        ),
        (
            "closure",
            json!({ "closure": [{
                "title": "AS Köln-Niehl",
                "future": true,
                "startTimestamp": "2024-03-05T07:00:00.000+0100"
            }] }),
        ),
        (
            "electric_charging_station",
            json!({ "electric_charging_station": [{
                "coordinate": { "lat": "52.123", "long": "13.987" }
            }] }),
        ),
    ];
    for (kind, body) in bodies {
        Mock::given(method("GET"))
            .and(path(format!("/o/autobahn/A1/services/{kind}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let summary = load_road(&test_client(&server), "A1")
        .await
        .expect("all five requests succeed");

    assert_eq!(summary.name, "A1");
    assert_eq!(summary.roadworks.as_deref(), Some("Beginn: 01.03.24"));
    assert_eq!(summary.direction.as_deref(), Some("Köln Richtung Dortmund"));
    assert_eq!(summary.parking_lorry.as_deref(), Some("Rastplatz Hasselt \n PWC"));
    assert_eq!(summary.warnings, vec!["Stau", "Unfall", "Glätte"]);
    assert_eq!(
        summary.closure.as_deref(),
        Some("Closure on AS Köln-Niehl from \n 5.3.2024")
    );
    assert_eq!(
        summary.charging_station.as_deref(),
        Some("Station at coordinates :\n (52.1 , 14.0)")
    );
}

#[tokio::test]
async fn load_road_fails_when_any_resource_fails() {
    let server = MockServer::start().await;
    mount_road(&server, "A7", Some("closure"), 0).await;

    let failure = load_road(&test_client(&server), "A7")
        .await
        .expect_err("closure request answers 500");

    assert_eq!(failure.road, "A7");
    assert_eq!(failure.kind.as_str(), "closure");
}

#[tokio::test]
async fn load_all_excludes_failed_roads_without_aborting() {
    let server = MockServer::start().await;
    mount_road_list(&server, &["A1", "A2", "A3"]).await;
    mount_road(&server, "A1", None, 0).await;
    mount_road(&server, "A2", Some("warning"), 0).await;
    mount_road(&server, "A3", None, 0).await;

    let report = load_all(&test_client(&server))
        .await
        .expect("road list loads");

    let names: Vec<&str> = report.summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A1", "A3"]);
    assert_eq!(report.failed_roads, vec!["A2"]);
    assert_eq!(report.road_count(), 3);
}

#[tokio::test]
async fn load_all_keeps_road_list_order_despite_completion_order() {
    let server = MockServer::start().await;
    mount_road_list(&server, &["A1", "A2", "A3"]).await;
    mount_road(&server, "A1", None, 300).await;
    mount_road(&server, "A2", None, 150).await;
    mount_road(&server, "A3", None, 0).await;

    let report = load_all(&test_client(&server))
        .await
        .expect("road list loads");

    let names: Vec<&str> = report.summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A1", "A2", "A3"]);
    assert!(report.failed_roads.is_empty());
}

#[tokio::test]
async fn load_all_with_limit_still_loads_every_road() {
    let server = MockServer::start().await;
    mount_road_list(&server, &["A1", "A2", "A3", "A4"]).await;
    for road in ["A1", "A2", "A3", "A4"] {
        mount_road(&server, road, None, 10).await;
    }

    let report = load_all_with_limit(&test_client(&server), Some(1))
        .await
        .expect("road list loads");

    assert_eq!(report.summaries.len(), 4);
}

#[tokio::test]
async fn load_all_with_every_road_failing_returns_empty_report() {
    let server = MockServer::start().await;
    mount_road_list(&server, &["A1", "A2"]).await;

    let report = load_all(&test_client(&server))
        .await
        .expect("road list loads even if every road fails");

    assert!(report.summaries.is_empty());
    assert_eq!(report.failed_roads, vec!["A1", "A2"]);
}

#[tokio::test]
async fn load_all_with_empty_road_list_is_empty() {
    let server = MockServer::start().await;
    mount_road_list(&server, &[]).await;

    let report = load_all(&test_client(&server))
        .await
        .expect("empty road list is fine");

    assert_eq!(report.road_count(), 0);
}

#[tokio::test]
async fn load_all_fails_when_road_list_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/o/autobahn"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = load_all(&test_client(&server)).await;
    assert!(
        matches!(result, Err(LoadError::RoadList(_))),
        "expected RoadList failure, got: {result:?}"
    );
}
