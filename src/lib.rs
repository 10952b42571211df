//! agent-chat-proxy is a minimal HTTP forwarding layer.
//!
//! It receives requests under `/api`, rewrites them for a single upstream
//! backend, optionally injects a static basic-auth pair, and streams the
//! upstream response back with permissive CORS headers. A configuration
//! snapshot of UI display settings is resolved once at startup and served
//! at `/config`.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health, config).
//! - [`config`] -- The configuration snapshot and upstream settings, both
//!   built once at startup.
//! - [`error`] -- Unified error type using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`proxy`] -- Core HTTP forwarding: target URL construction, header
//!   filtering, CORS, and streamed relay.
//! - [`server`] -- Axum server setup, shared application state, HTTP client, and
//!   graceful shutdown.
//! - [`snapshot`] -- `GET /config` endpoint handler.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod proxy;
pub mod server;
pub mod snapshot;
