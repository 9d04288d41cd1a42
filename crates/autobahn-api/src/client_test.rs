use super::*;

fn test_client(base_url: &str) -> AutobahnClient {
    AutobahnClient::with_base_url(base_url, Some(5), "autobahn-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn road_list_url_is_the_base_url() {
    let client = test_client("https://verkehr.autobahn.de/o/autobahn");
    assert_eq!(
        client.road_list_url(),
        "https://verkehr.autobahn.de/o/autobahn"
    );
}

#[test]
fn resource_url_interpolates_road_and_kind() {
    let client = test_client("https://verkehr.autobahn.de/o/autobahn/");
    assert_eq!(
        client.resource_url(ResourceKind::ElectricChargingStation, "A100"),
        "https://verkehr.autobahn.de/o/autobahn/A100/services/electric_charging_station"
    );
}

#[test]
fn details_url_interpolates_kind_and_id() {
    let client = test_client("https://verkehr.autobahn.de/o/autobahn");
    assert_eq!(
        client.details_url(ResourceKind::Closure, "Q2xvc3VyZV9f"),
        "https://verkehr.autobahn.de/o/autobahn/details/closure/Q2xvc3VyZV9f"
    );
}

#[test]
fn with_base_url_rejects_relative_url() {
    let result = AutobahnClient::with_base_url("not a url", None, "autobahn-test/0.1");
    assert!(
        matches!(result, Err(ApiError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn new_uses_configured_base_url() {
    let config = AppConfig {
        env: autobahn_core::Environment::Test,
        base_url: "http://localhost:9999/o/autobahn/".to_owned(),
        log_level: "info".to_owned(),
        user_agent: "autobahn-test/0.1".to_owned(),
        request_timeout_secs: None,
        max_concurrent_roads: None,
    };
    let client = AutobahnClient::new(&config).expect("client from config");
    assert_eq!(client.road_list_url(), "http://localhost:9999/o/autobahn");
}
