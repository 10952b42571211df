//! Unified error type for the proxy.
//!
//! [`ProxyError`] covers startup failures (bad listen address, socket
//! errors), forwarding failures (URI construction, outbound transport,
//! inbound body capture), and CLI failures (health check, serialization).
//! Forwarding failures never reach the caller as anything but the generic
//! 500 response; their detail only goes to the log.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProxyError {
    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI '{uri}': {source}")]
    UriParse {
        uri: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to read request body: {source}")]
    BodyRead {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ProxyError {
    pub(crate) fn http(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::HttpRequest {
            source: source.into(),
        }
    }
}
