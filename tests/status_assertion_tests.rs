//! Expected-status semantics: the default, explicit overrides, and what a
//! mismatch carries.

use mlb_lookup::{
    Config, Endpoint, FortyManRoster, LookupClient, LookupError, PlayerInfo, QueryParams,
    constants,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> LookupClient {
    LookupClient::with_config(Config {
        base_uri: server.uri(),
        http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    })
    .expect("Failed to create test client")
}

/// Omitting the expected status is equivalent to passing 200 explicitly.
#[tokio::test]
async fn test_default_expected_status_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/named.player_info.bam"))
        .and(query_param("player_id", "493316"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let query = PlayerInfo {
        player_id: "493316".to_string(),
    };
    let implicit = client.player_info(query.clone(), None).await.unwrap();
    let explicit = client
        .player_info(query, Some(StatusCode::OK))
        .await
        .unwrap();

    assert_eq!(implicit.status, explicit.status);
}

/// Expecting 404 from a service that answers 200 is a hard failure
/// reporting both values.
#[tokio::test]
async fn test_expected_404_actual_200_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/named.roster_40.bam"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .forty_man_roster(
            FortyManRoster {
                team_id: "121".to_string(),
            },
            Some(StatusCode::NOT_FOUND),
        )
        .await;

    match result {
        Err(LookupError::StatusMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 404);
            assert_eq!(actual, 200);
        }
        other => panic!("expected StatusMismatch, got {other:?}"),
    }
}

/// A mismatch still hands the full response over for inspection.
#[tokio::test]
async fn test_mismatch_carries_full_response() {
    let mock_server = MockServer::start().await;

    let body = json!({ "player_info": { "queryResults": { "totalSize": "0" } } });
    Mock::given(method("GET"))
        .and(path("/json/named.player_info.bam"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(&body)
                .append_header("x-request-id", "abc123"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client
        .player_info(
            PlayerInfo {
                player_id: "493316".to_string(),
            },
            None,
        )
        .await
        .unwrap_err();

    assert!(error.is_status_mismatch());
    assert!(!error.is_transport());

    let response = error.response().expect("mismatch must carry the response");
    assert_eq!(response.status_code(), 500);
    assert_eq!(response.header("x-request-id"), Some("abc123"));
    assert!(response.body.contains("totalSize"));
    assert!(response.url.contains("player_id=493316"));
}

/// Expecting the error status the service actually returns is a success.
#[tokio::test]
async fn test_expected_error_status_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/named.player_info.bam"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client
        .player_info(
            PlayerInfo {
                player_id: "0".to_string(),
            },
            Some(StatusCode::NOT_FOUND),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "not found");
}

/// A connection failure is a transport error, distinct from any status
/// assertion.
#[tokio::test]
async fn test_unreachable_service_is_transport_failure() {
    let client = LookupClient::with_config(Config {
        base_uri: "http://127.0.0.1:1".to_string(),
        http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    })
    .unwrap();

    let error = client
        .player_info(
            PlayerInfo {
                player_id: "493316".to_string(),
            },
            None,
        )
        .await
        .unwrap_err();

    assert!(error.is_transport());
    assert!(error.response().is_none());
}

/// Declared-set violations surface before any request goes out.
#[tokio::test]
async fn test_raw_request_parameter_validation() {
    let mock_server = MockServer::start().await;
    // No mocks mounted: a request reaching the server would 404.
    let client = create_test_client(&mock_server);

    let missing = client
        .request(Endpoint::PlayerInfo, QueryParams::new(), StatusCode::OK)
        .await;
    assert!(matches!(missing, Err(LookupError::MissingParam { .. })));

    let unknown = client
        .request(
            Endpoint::PlayerInfo,
            QueryParams::new()
                .with("player_id", "493316")
                .with("team_id", "121"),
            StatusCode::OK,
        )
        .await;
    assert!(matches!(unknown, Err(LookupError::UnknownParam { .. })));
}
