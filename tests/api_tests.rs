use concierge_backend::message::{ChatResponse, ReplySource};
use concierge_backend::routes::create_router;
use concierge_backend::services::responder::Responder;
use concierge_backend::state::AppState;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

fn fallback_only_app() -> axum::Router {
    let state = Arc::new(AppState::new(Responder::with_default_rules(None)));
    create_router().with_state(state)
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_chat_endpoint_returns_fallback_reply() {
    let app = fallback_only_app();

    let response = app
        .oneshot(chat_request(r#"{"user_message": "Tôi muốn đặt bàn tối nay"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(chat_resp.source, ReplySource::Fallback);
    assert!(!chat_resp.reply.is_empty());
    assert!(chat_resp.reply.contains("đặt bàn"));
}

#[tokio::test]
async fn test_source_serializes_as_lowercase_string() {
    let app = fallback_only_app();

    let response = app
        .oneshot(chat_request(r#"{"user_message": "hello"}"#))
        .await
        .unwrap();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(raw["source"], "fallback");
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let app = fallback_only_app();

    let response = app
        .oneshot(chat_request(r#"{"user_message": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let err: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    assert!(err["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_whitespace_only_message_is_rejected() {
    let app = fallback_only_app();

    let response = app
        .oneshot(chat_request(r#"{"user_message": "   \n\t  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_is_client_error() {
    let app = fallback_only_app();

    let response = app
        .oneshot(chat_request(r#"{"message": "wrong field name"}"#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = fallback_only_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
