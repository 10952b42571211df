//! `agent-chat-proxy run` — start the proxy server.
//!
//! Resolves the upstream settings from flags/env and the configuration
//! snapshot from `NEXT_PUBLIC_*` variables, then starts the Axum HTTP
//! server with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::RunArgs;
use crate::config::{AppConfig, Credentials, Upstream};
use crate::error::ProxyError;
use crate::logging;
use crate::server::{self, AppState, Stats};

pub async fn execute(args: RunArgs) -> Result<(), ProxyError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let upstream = resolve_upstream(&args);
    let app_config = AppConfig::from_env();

    let state = Arc::new(AppState {
        upstream,
        app_config,
        http_client: server::build_http_client(),
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let upstream_url = state.upstream.base_url.clone();
    let auth_user = state
        .upstream
        .credentials
        .as_ref()
        .map_or("", |c| c.username())
        .to_string();

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        upstream = %upstream_url,
        auth_user = %auth_user,
        "agent-chat-proxy started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("agent-chat-proxy stopped");
    Ok(())
}

fn resolve_upstream(args: &RunArgs) -> Upstream {
    if args.upstream_url.is_empty() {
        tracing::warn!("LANGGRAPH_API_URL is empty, every forwarded request will fail");
    }

    let username = args.basic_auth_username.as_deref().unwrap_or_default();
    let password = args.basic_auth_password.as_deref().unwrap_or_default();
    let credentials = Credentials::new(username, password);
    if credentials.is_none() && (!username.is_empty() || !password.is_empty()) {
        tracing::warn!("basic auth needs both username and password, injection disabled");
    }

    Upstream::new(args.upstream_url.clone(), credentials)
}
