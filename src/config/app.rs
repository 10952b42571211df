//! Configuration snapshot with environment overrides.
//!
//! Every setting resolves as "environment value if set and non-empty,
//! otherwise the hardcoded default". There is no validation and no
//! failure mode.

use serde::{Deserialize, Serialize};

pub const APP_TITLE_ENV: &str = "NEXT_PUBLIC_APP_TITLE";
pub const APP_DESCRIPTION_ENV: &str = "NEXT_PUBLIC_APP_DESCRIPTION";
pub const ALLOW_ATTACHMENTS_ENV: &str = "NEXT_PUBLIC_ALLOW_ATTACHMENTS";
pub const GITHUB_REPO_URL_ENV: &str = "NEXT_PUBLIC_GITHUB_REPO_URL";
pub const PROXY_API_URL_ENV: &str = "NEXT_PUBLIC_PROXY_API_URL";
pub const ASSISTANT_ID_ENV: &str = "NEXT_PUBLIC_ASSISTANT_ID";

const DEFAULT_APP_TITLE: &str = "Agent Chat";
const DEFAULT_APP_DESCRIPTION: &str = "Agent Chat UX by LangChain";
const DEFAULT_GITHUB_REPO_URL: &str = "https://github.com/devs-talha/langgraph-agent-ui";
const DEFAULT_PROXY_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_ASSISTANT_ID: &str = "agent";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub app_title: String,
    pub app_description: String,
    /// On whenever the variable holds any non-empty value, `"false"` included.
    pub allow_attachments: bool,
    pub github_repo_url: String,
    pub proxy_api_url: String,
    pub assistant_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            app_description: DEFAULT_APP_DESCRIPTION.to_string(),
            allow_attachments: false,
            github_repo_url: DEFAULT_GITHUB_REPO_URL.to_string(),
            proxy_api_url: DEFAULT_PROXY_API_URL.to_string(),
            assistant_id: DEFAULT_ASSISTANT_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve every setting from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every setting through `lookup`, falling back to the default
    /// when it yields `None` or an empty string.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Self {
            app_title: or_default(APP_TITLE_ENV, DEFAULT_APP_TITLE),
            app_description: or_default(APP_DESCRIPTION_ENV, DEFAULT_APP_DESCRIPTION),
            allow_attachments: get(ALLOW_ATTACHMENTS_ENV).is_some(),
            github_repo_url: or_default(GITHUB_REPO_URL_ENV, DEFAULT_GITHUB_REPO_URL),
            proxy_api_url: or_default(PROXY_API_URL_ENV, DEFAULT_PROXY_API_URL),
            assistant_id: or_default(ASSISTANT_ID_ENV, DEFAULT_ASSISTANT_ID),
        }
    }
}
