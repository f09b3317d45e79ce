use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Vec<Value> {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    value.as_array().cloned().expect("expected a JSON array")
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn unknown_resource_is_404() {
    let resp = get("/podiums").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unfiltered_resource_returns_all_fixtures() {
    let resp = get("/drivers").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let drivers = body_json(resp).await;
    assert_eq!(drivers.len(), 3);
}

#[tokio::test]
async fn numeric_filter_applies_equality() {
    let resp = get("/drivers?driver_number=1").await;
    let drivers = body_json(resp).await;
    assert_eq!(drivers.len(), 2);
    assert!(drivers.iter().all(|d| d["driver_number"] == 1));
}

#[tokio::test]
async fn string_filter_applies_equality() {
    let resp = get("/drivers?name_acronym=HAM").await;
    let drivers = body_json(resp).await;
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0]["full_name"], "Lewis HAMILTON");
}

#[tokio::test]
async fn latest_sentinel_resolves_to_highest_session_key() {
    let resp = get("/drivers?session_key=latest").await;
    let drivers = body_json(resp).await;
    assert_eq!(drivers.len(), 2);
    assert!(drivers.iter().all(|d| d["session_key"] == 9165));
}

#[tokio::test]
async fn latest_sentinel_resolves_for_meeting_key() {
    let resp = get("/meetings?meeting_key=latest").await;
    let meetings = body_json(resp).await;
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0]["meeting_name"], "Singapore Grand Prix");
}

#[tokio::test]
async fn combined_selector_and_sentinels() {
    let resp = get("/laps?driver_number=44&meeting_key=latest&session_key=latest").await;
    let laps = body_json(resp).await;
    assert_eq!(laps.len(), 1);
    assert_eq!(laps[0]["lap_number"], 12);
}

#[tokio::test]
async fn no_match_returns_empty_array() {
    let resp = get("/sessions?year=1990").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let sessions = body_json(resp).await;
    assert!(sessions.is_empty());
}
