use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::webhooks::core::staleness::DEFAULT_STALE_AFTER;
use crate::shell::http::router;
use crate::tests::fixtures::app::{API_KEY, make_test_state};

async fn ingest(app: &Router, id: &str, body: &str) -> StatusCode {
    app.clone()
        .oneshot(
            Request::post(format!("/webhook/{id}?api_key={API_KEY}"))
                .header("content-type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

async fn fetch(app: &Router, id: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/get_data/{id}?api_key={API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn it_should_return_payloads_in_the_order_they_were_posted() {
    let app = router(make_test_state());

    assert_eq!(ingest(&app, "abc", r#"{"x":1}"#).await, StatusCode::OK);
    assert_eq!(fetch(&app, "abc").await, (StatusCode::OK, json!([{"x": 1}])));

    assert_eq!(ingest(&app, "abc", r#"{"x":2}"#).await, StatusCode::OK);
    assert_eq!(
        fetch(&app, "abc").await,
        (StatusCode::OK, json!([{"x": 1}, {"x": 2}]))
    );
}

#[tokio::test]
async fn it_should_return_the_same_payloads_on_repeated_reads() {
    let app = router(make_test_state());
    ingest(&app, "abc", r#"{"x":1}"#).await;

    let first = fetch(&app, "abc").await;
    let second = fetch(&app, "abc").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn it_should_scope_payloads_by_identifier() {
    let app = router(make_test_state());
    ingest(&app, "a", "1").await;
    ingest(&app, "b", "2").await;

    assert_eq!(fetch(&app, "a").await, (StatusCode::OK, json!([1])));
    assert_eq!(fetch(&app, "b").await, (StatusCode::OK, json!([2])));
    assert_eq!(fetch(&app, "c").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn it_should_start_a_fresh_sequence_when_posting_after_the_idle_window() {
    let app = router(make_test_state());
    ingest(&app, "abc", r#"{"x":1}"#).await;
    tokio::time::advance(DEFAULT_STALE_AFTER + Duration::from_secs(1)).await;

    ingest(&app, "abc", r#"{"x":2}"#).await;

    assert_eq!(fetch(&app, "abc").await, (StatusCode::OK, json!([{"x": 2}])));
}

#[tokio::test(start_paused = true)]
async fn it_should_tell_a_cleared_identifier_apart_from_an_unknown_one() {
    let app = router(make_test_state());
    ingest(&app, "abc", r#"{"x":1}"#).await;
    tokio::time::advance(DEFAULT_STALE_AFTER + Duration::from_secs(1)).await;

    assert_eq!(fetch(&app, "abc").await, (StatusCode::OK, json!([])));
    assert_eq!(fetch(&app, "xyz").await.0, StatusCode::NOT_FOUND);
}
