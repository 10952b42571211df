//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, health, config), and their associated argument
//! structs. Every `run` flag has an environment variable equivalent for
//! container deployments.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "agent-chat-proxy",
    version,
    about = "HTTP forwarding proxy for a single LangGraph upstream",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        LANGGRAPH_API_URL=http://localhost:2024 agent-chat-proxy run\n  \
        agent-chat-proxy health                Check a running instance\n  \
        agent-chat-proxy config --format json  Print the resolved UI settings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the proxy server
    Run(Box<RunArgs>),

    /// Check health of a running instance
    Health(HealthArgs),

    /// Print the resolved configuration snapshot
    Config(ConfigArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        agent-chat-proxy run -u http://localhost:2024            Local LangGraph server\n  \
        agent-chat-proxy run -u https://lg.example -p 8080 --pretty\n  \
        BASIC_AUTH_USERNAME=svc BASIC_AUTH_PASSWORD=... agent-chat-proxy run")]
pub struct RunArgs {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Upstream --
    /// Base URL requests under /api are forwarded to
    #[arg(
        short,
        long,
        env = "LANGGRAPH_API_URL",
        default_value = "",
        help_heading = "Upstream"
    )]
    pub upstream_url: String,

    /// Basic auth username injected into forwarded requests
    #[arg(long, env = "BASIC_AUTH_USERNAME", help_heading = "Upstream")]
    pub basic_auth_username: Option<String>,

    /// Basic auth password injected into forwarded requests
    #[arg(
        long,
        env = "BASIC_AUTH_PASSWORD",
        hide_env_values = true,
        help_heading = "Upstream"
    )]
    pub basic_auth_password: Option<String>,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 10 * 1_048_576,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:3000")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
