//! `agent-chat-proxy config` — print the resolved configuration snapshot.

use crate::cli::{ConfigArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::ProxyError;

pub fn execute(args: &ConfigArgs) -> Result<(), ProxyError> {
    let config = AppConfig::from_env();
    println!("{}", render(&config, &args.format)?);
    Ok(())
}

fn render(config: &AppConfig, format: &OutputFormat) -> Result<String, ProxyError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Text => Ok(format!(
            "  app title:          {}\n  \
             app description:    {}\n  \
             allow attachments:  {}\n  \
             github repo url:    {}\n  \
             proxy api url:      {}\n  \
             assistant id:       {}",
            config.app_title,
            config.app_description,
            config.allow_attachments,
            config.github_repo_url,
            config.proxy_api_url,
            config.assistant_id,
        )),
    }
}
