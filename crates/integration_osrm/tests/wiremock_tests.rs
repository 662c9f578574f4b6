//! Integration tests for the OSRM and Nominatim clients using wiremock
//!
//! These tests verify both clients' behavior against a mock HTTP server,
//! ensuring proper handling of the various response scenarios.

use integration_osrm::{
    GeocodingClient, NominatimGeocodingClient, OsrmConfig, OsrmError, OsrmRouteClient, Point,
    RoutingClient,
};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing both services at the mock server
fn test_config(mock_server: &MockServer) -> OsrmConfig {
    OsrmConfig {
        router_base_url: mock_server.uri(),
        nominatim_base_url: mock_server.uri(),
        ..OsrmConfig::for_testing()
    }
}

fn berlin() -> Point {
    Point {
        lat: "52.52".to_string(),
        lon: "13.405".to_string(),
    }
}

fn hamburg() -> Point {
    Point {
        lat: "53.55".to_string(),
        lon: "9.993".to_string(),
    }
}

// ============================================================================
// Geocoding
// ============================================================================

#[tokio::test]
async fn test_geocode_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Berlin"))
        .and(query_param("format", "jsonv2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "52.52", "lon": "13.405", "display_name": "Berlin" }
        ])))
        .mount(&mock_server)
        .await;

    let client =
        NominatimGeocodingClient::new(&test_config(&mock_server)).expect("client builds");
    let point = client.geocode("Berlin").await.expect("geocoded");

    assert_eq!(point, berlin());
}

#[tokio::test]
async fn test_geocode_picks_first_match() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "52.52", "lon": "13.405" },
            { "lat": "48.13", "lon": "11.58" }
        ])))
        .mount(&mock_server)
        .await;

    let client =
        NominatimGeocodingClient::new(&test_config(&mock_server)).expect("client builds");
    let point = client.geocode("Berlin").await.expect("geocoded");

    assert_eq!(point.lat, "52.52");
}

#[tokio::test]
async fn test_geocode_empty_result_is_no_location_matches() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client =
        NominatimGeocodingClient::new(&test_config(&mock_server)).expect("client builds");
    let err = client.geocode("Atlantis").await.expect_err("not found");

    match err {
        OsrmError::NoLocationMatches(address) => assert_eq!(address, "Atlantis"),
        other => panic!("expected NoLocationMatches, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_empty_address_skips_network() {
    let mock_server = MockServer::start().await;

    let client =
        NominatimGeocodingClient::new(&test_config(&mock_server)).expect("client builds");
    let err = client.geocode("   ").await.expect_err("empty address");

    assert!(matches!(err, OsrmError::NoLocationMatches(_)));
    assert!(mock_server.received_requests().await.expect("requests").is_empty());
}

#[tokio::test]
async fn test_geocode_server_error_is_request_failed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client =
        NominatimGeocodingClient::new(&test_config(&mock_server)).expect("client builds");
    let err = client.geocode("Berlin").await.expect_err("http 503");

    assert!(matches!(err, OsrmError::RequestFailed(_)));
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_route_success_rounds_up() {
    let mock_server = MockServer::start().await;
    // 690s → 12min, 4200m → 5km
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "routes": [ { "duration": 690.0, "distance": 4200.0 } ]
        })))
        .mount(&mock_server)
        .await;

    let client = OsrmRouteClient::new(&test_config(&mock_server)).expect("client builds");
    let trip = client.route(&berlin(), &hamburg()).await.expect("routed");

    assert_eq!(trip.duration_minutes, 12);
    assert_eq!(trip.distance_km, 5);
}

#[tokio::test]
async fn test_route_url_is_lon_lat_ordered() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/13.405,52.52;9.993,53.55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "routes": [ { "duration": 60.0, "distance": 1000.0 } ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OsrmRouteClient::new(&test_config(&mock_server)).expect("client builds");
    client.route(&berlin(), &hamburg()).await.expect("routed");
}

#[tokio::test]
async fn test_route_empty_routes_is_no_routes_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "routes": [] })))
        .mount(&mock_server)
        .await;

    let client = OsrmRouteClient::new(&test_config(&mock_server)).expect("client builds");
    let err = client.route(&berlin(), &hamburg()).await.expect_err("no route");

    assert!(matches!(err, OsrmError::NoRoutesFound));
}

#[tokio::test]
async fn test_route_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = OsrmRouteClient::new(&test_config(&mock_server)).expect("client builds");
    let err = client.route(&berlin(), &hamburg()).await.expect_err("bad body");

    assert!(matches!(err, OsrmError::ParseError(_)));
}

#[tokio::test]
async fn test_route_server_error_is_request_failed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = OsrmRouteClient::new(&test_config(&mock_server)).expect("client builds");
    let err = client.route(&berlin(), &hamburg()).await.expect_err("http 500");

    assert!(matches!(err, OsrmError::RequestFailed(_)));
}
