//! Integration tests for the HTTP server, health and config endpoints, and
//! graceful shutdown.

use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use agent_chat_proxy::config::{AppConfig, Credentials, Upstream};
use agent_chat_proxy::health::HealthResponse;
use agent_chat_proxy::server::{self, AppState, Stats};

fn test_app_config() -> AppConfig {
    AppConfig {
        app_title: "Support Bot".into(),
        allow_attachments: true,
        ..AppConfig::default()
    }
}

async fn start_test_server() -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let state = Arc::new(AppState {
        upstream: Upstream::new("http://localhost:19999", Credentials::new("svc", "secret")),
        app_config: test_app_config(),
        http_client: server::build_http_client(),
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let router = server::build_router(state, 1_048_576);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}

#[tokio::test]
async fn health_endpoint_returns_healthy() {
    let (addr, shutdown) = start_test_server().await;

    let url = format!("http://{addr}/health");
    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 200);

    let health: HealthResponse = resp.json().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(health.upstream.url, "http://localhost:19999");
    assert!(health.upstream.auth);
    assert_eq!(health.stats.requests_forwarded, 0);
    assert_eq!(health.stats.requests_failed, 0);
    assert_eq!(health.stats.preflights, 0);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn health_never_exposes_credentials() {
    let (addr, shutdown) = start_test_server().await;

    let body = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("secret"));
    assert!(!body.contains("c3ZjOnNlY3JldA"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn config_endpoint_serves_snapshot() {
    let (addr, shutdown) = start_test_server().await;

    let resp = reqwest::get(format!("http://{addr}/config")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["appTitle"], "Support Bot");
    assert_eq!(json["appDescription"], "Agent Chat UX by LangChain");
    assert_eq!(json["allowAttachments"], true);
    assert_eq!(json["proxyApiUrl"], "http://localhost:3000/api");
    assert_eq!(json["assistantId"], "agent");

    let _ = shutdown.send(());
}

#[tokio::test]
async fn paths_outside_prefix_return_404() {
    let (addr, shutdown) = start_test_server().await;

    for path in ["/nonexistent", "/apis/threads", "/threads/1"] {
        let resp = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
        assert_eq!(resp.status(), 404, "path {path}");
    }

    let _ = shutdown.send(());
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let resp = reqwest::Client::new()
        .request(
            reqwest::Method::from_bytes(b"PROPFIND").unwrap(),
            format!("http://{addr}/api/threads"),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);

    let _ = shutdown.send(());
}

fn unreachable_state() -> Arc<AppState> {
    Arc::new(AppState {
        upstream: Upstream::new("", None),
        app_config: AppConfig::default(),
        http_client: server::build_http_client(),
        start_time: Instant::now(),
        stats: Stats::new(),
    })
}

#[tokio::test]
async fn declared_oversized_body_gets_413_before_forwarding() {
    let state = unreachable_state();
    let router = server::build_router(Arc::clone(&state), 16);

    let request = Request::builder()
        .method("POST")
        .uri("/api/threads")
        .header(header::CONTENT_LENGTH, "64")
        .body(Body::from(vec![b'x'; 64]))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(state.stats.forwarded.load(Ordering::Relaxed), 0);
    assert_eq!(state.stats.failed.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn undeclared_oversized_body_gets_json_500() {
    let state = unreachable_state();
    let router = server::build_router(Arc::clone(&state), 16);

    let request = Request::builder()
        .method("POST")
        .uri("/api/threads")
        .body(Body::from(vec![b'x'; 64]))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Internal server error");
    assert_eq!(state.stats.failed.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn graceful_shutdown_works() {
    let (addr, shutdown) = start_test_server().await;

    // Verify server is running
    let url = format!("http://{addr}/health");
    assert!(reqwest::get(&url).await.is_ok());

    // Send shutdown
    let _ = shutdown.send(());

    // Give it a moment to shut down
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Server should no longer accept connections
    let result = reqwest::get(&url).await;
    assert!(result.is_err());
}
