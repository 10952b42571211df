use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = agent_chat_proxy::cli::Cli::parse();
    if let Err(e) = agent_chat_proxy::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
