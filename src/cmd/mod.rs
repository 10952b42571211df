//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`health`], or [`config`]. Each handler
//! lives in its own submodule.

pub mod config;
pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::ProxyError;

pub async fn dispatch(cli: Cli) -> Result<(), ProxyError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        Some(Commands::Config(ref args)) => config::execute(args),
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  agent-chat-proxy v{version} \u{2014} HTTP forwarding proxy\n\n  \
         No command provided. To get started:\n\n    \
         agent-chat-proxy run -u <upstream>    Forward /api/* to <upstream>\n    \
         agent-chat-proxy health               Check a running instance\n    \
         agent-chat-proxy config               Show the resolved UI settings\n    \
         agent-chat-proxy --help               See all commands and options\n"
    );
}
