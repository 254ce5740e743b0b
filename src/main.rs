use mcp_craft_server::config::ServerConfig;
use mcp_craft_server::server::McpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-craft-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut server = McpServer::new(config);
    if let Err(e) = server.run().await {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}
