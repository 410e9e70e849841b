use clap::Parser;
use tokio::net::TcpListener;

use service_chain::config::{validate_config, Cli, ServiceConfig};
use service_chain::http::HttpServer;
use service_chain::lifecycle::Shutdown;
use service_chain::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("service-chain v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = ServiceConfig::from_cli(cli);
    validate_config(&config)?;

    tracing::info!(
        service = %config.service,
        service_path = %config.service_path(),
        bind_address = %config.listener.bind_address,
        peer = ?config.peer,
        "Configuration loaded"
    );

    // Bind failure is the one fatal startup error
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
