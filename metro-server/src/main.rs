use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::AppConfig;
use metro_server::metro::MetroSystem;
use metro_server::network::load_network;
use metro_server::planner::FareCalculator;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load the network (fail fast on bad data)
    let network = match load_network(&config.data_dir) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, dir = %config.data_dir.display(), "Failed to load network");
            return ExitCode::FAILURE;
        }
    };

    let metro = MetroSystem::new(network, FareCalculator::new(config.fare_per_hop));
    let state = AppState::new(metro, &config.currency);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %config.bind_addr, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "Metro ticket system listening");
    info!("  GET  /              - Web interface");
    info!("  GET  /api/stations  - List stations");
    info!("  GET  /api/quote     - Price a trip");
    info!("  POST /api/tickets   - Purchase a ticket");
    info!("  GET  /api/tickets   - List purchased tickets");
    info!("  GET  /api/network   - Network map data");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
