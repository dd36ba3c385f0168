//! Workout store client against a mocked HTTP endpoint.

use stride_metrics::store::WorkoutStoreClient;
use stride_metrics::utils::StoreError;

#[test]
fn test_fetch_workouts() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/workouts")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"date": "2024-03-13T07:00:00Z", "distance": 5.0, "avg_pace": "5:00"},
                {"date": "2024-03-12T07:00:00Z", "distance": 7.5}]"#,
        )
        .create();

    let client = WorkoutStoreClient::new(format!("{}/api", server.url()))
        .unwrap()
        .with_token("secret-token");

    let workouts = client.fetch_workouts().unwrap();

    mock.assert();
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[1].distance_km(), 7.5);
}

#[test]
fn test_fetch_workouts_null_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/workouts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create();

    let client = WorkoutStoreClient::new(server.url()).unwrap();

    assert!(client.fetch_workouts().unwrap().is_empty());
}

#[test]
fn test_fetch_workouts_unauthorized() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/workouts").with_status(401).create();

    let client = WorkoutStoreClient::new(server.url()).unwrap();

    assert!(matches!(client.fetch_workouts(), Err(StoreError::Unauthorized)));
}

#[test]
fn test_fetch_workouts_server_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/workouts")
        .with_status(500)
        .with_body("database unavailable")
        .create();

    let client = WorkoutStoreClient::new(server.url()).unwrap();

    match client.fetch_workouts() {
        Err(StoreError::InvalidResponse(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("database unavailable"));
        }
        other => panic!("expected InvalidResponse, got {:?}", other.map(|w| w.len())),
    }
}
