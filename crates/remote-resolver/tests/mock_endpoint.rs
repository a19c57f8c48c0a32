use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use brandsetu_chat_remote_resolver::{RemoteConfigBuilder, RemoteResolver};
use brandsetu_chat_resolver::{AnswerResolver, ErrorKind, ResolverError};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_endpoint(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn resolver_for(base_url: String) -> RemoteResolver {
    RemoteResolver::new(
        RemoteConfigBuilder::new()
            .with_base_url(base_url)
            .with_timeout(Duration::from_millis(500))
            .build(),
    )
}

#[tokio::test]
async fn test_reply_with_options() {
    let app = Router::new().route(
        "/api/chat",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({ "message": "pricing" }));
            Json(json!({
                "success": true,
                "data": {
                    "response": "Our plans start at ₹15,000",
                    "options": ["Tell me more", "Contact sales"]
                }
            }))
        }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let resolution = resolver.resolve("pricing").await.unwrap();
    assert_eq!(
        resolution.reply.as_deref(),
        Some("Our plans start at ₹15,000")
    );
    assert_eq!(resolution.suggestions, vec!["Tell me more", "Contact sales"]);
}

#[tokio::test]
async fn test_reply_missing() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "success": true, "data": {} })) }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let resolution = resolver.resolve("hmm").await.unwrap();
    assert_eq!(resolution.reply, None);
    assert!(resolution.suggestions.is_empty());
}

#[tokio::test]
async fn test_server_error() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false })),
            )
        }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let err = resolver.resolve("pricing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Status);
}

#[tokio::test]
async fn test_not_json() {
    let app = Router::new().route("/api/chat", post(|| async { "oops" }));
    let resolver = resolver_for(spawn_endpoint(app).await);

    let err = resolver.resolve("pricing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_json_with_wrong_content_type() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            (
                [("content-type", "text/plain")],
                r#"{ "data": { "response": "Hello!", "options": ["Pricing"] } }"#,
            )
        }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let resolution = resolver.resolve("hi").await.unwrap();
    assert_eq!(resolution.reply.as_deref(), Some("Hello!"));
    assert_eq!(resolution.suggestions, vec!["Pricing"]);
}

#[tokio::test]
async fn test_malformed_json() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            ([("content-type", "application/json")], "{ \"data\": ")
        }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let err = resolver.resolve("pricing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_timeout() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "data": { "response": "too late" } }))
        }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let err = resolver.resolve("pricing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
}

#[tokio::test]
async fn test_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let resolver = resolver_for(format!("http://{addr}"));

    let err = resolver.resolve("pricing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn test_health() {
    let app = Router::new().route(
        "/api/health",
        get(|| async {
            Json(json!({ "status": "healthy", "version": "2.2.0" }))
        }),
    );
    let resolver = resolver_for(spawn_endpoint(app).await);

    let health = resolver.check_health().await.unwrap();
    assert!(health.is_healthy());
}
