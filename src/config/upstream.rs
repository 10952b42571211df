//! The single forwarding target and its optional basic-auth pair.

use axum::http::HeaderValue;
use base64::Engine;

#[derive(Debug, Clone)]
pub struct Upstream {
    /// Base URL every forwarded path is appended to. May be empty, in which
    /// case each forwarded request fails with the generic 500 response.
    pub base_url: String,
    pub credentials: Option<Credentials>,
}

impl Upstream {
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }
}

/// Static basic-auth pair injected into every forwarded request.
///
/// The `Authorization` value is encoded once at construction and marked
/// sensitive so it never shows up in debug output of header maps.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    header: HeaderValue,
}

impl Credentials {
    /// Returns `None` unless both `username` and `password` are non-empty.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Option<Self> {
        if username.is_empty() || password.is_empty() {
            return None;
        }
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
        let mut header = HeaderValue::from_str(&format!("Basic {encoded}")).ok()?;
        header.set_sensitive(true);
        Some(Self {
            username: username.to_string(),
            header,
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub const fn authorization(&self) -> &HeaderValue {
        &self.header
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_basic_authorization() {
        let creds = Credentials::new("user", "pass").unwrap();
        assert_eq!(creds.authorization(), "Basic dXNlcjpwYXNz");
        assert!(creds.authorization().is_sensitive());
        assert_eq!(creds.username(), "user");
    }

    #[test]
    fn either_half_empty_disables_injection() {
        assert!(Credentials::new("", "pass").is_none());
        assert!(Credentials::new("user", "").is_none());
        assert!(Credentials::new("", "").is_none());
    }

    #[test]
    fn debug_output_redacts_password() {
        let creds = Credentials::new("admin", "hunter2").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("YWRtaW46aHVudGVyMg"));
    }
}
