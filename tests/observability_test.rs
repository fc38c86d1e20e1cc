use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::Request;
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use recap::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, init_tracing, request_id_middleware,
};

fn echo_router() -> Router {
    Router::new()
        .route(
            "/",
            get(|Extension(id): Extension<RequestId>| async move { id.to_string() }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_created_then_exposes_value() {
    let request_id = RequestId::new("test-123");

    assert_eq!(request_id.as_str(), "test-123");
    assert_eq!(request_id.clone(), request_id);
}

#[test]
fn given_generated_request_ids_when_compared_then_differ() {
    assert_ne!(RequestId::generate(), RequestId::generate());
}

#[tokio::test]
async fn given_inbound_request_id_when_handled_then_handler_and_response_see_it() {
    let response = echo_router()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"abc-123");
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_one_is_generated() {
    let response = echo_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(header.len(), 36);
}

#[test]
fn given_default_config_when_created_then_filter_targets_crate() {
    let config = TracingConfig::default();

    assert!(!config.environment.is_empty());
    assert!(config.default_filter.contains("recap=debug"));
}

#[test]
fn given_subscriber_installed_when_initializing_again_then_does_not_panic() {
    let config = TracingConfig::default();

    init_tracing(&config);
    init_tracing(&config);
}
