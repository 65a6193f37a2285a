//! hindsight-mcp executable.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hindsight_mcp::{Config, McpServer, McpSession, SERVER_NAME, SERVER_VERSION};

/// MCP server exposing Hindsight long-term memory.
#[derive(Parser, Debug)]
#[command(name = "hindsight-mcp")]
#[command(version, about)]
struct Args {
    /// Hindsight base URL, overriding the environment
    #[arg(long)]
    url: Option<String>,

    /// Default memory bank, overriding the environment
    #[arg(long)]
    bank: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // stdout is reserved for protocol frames
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env().with_overrides(args.url, args.bank);

    let session = match McpSession::new(&config) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "failed to start server");
            std::process::exit(1);
        }
    };
    let server = McpServer::new(session);

    info!("{SERVER_NAME} MCP server v{SERVER_VERSION} started");
    info!("API: {}", config.api_root());
    info!("Default bank: {}", config.bank_id());

    if let Err(e) = server.run().await {
        error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
