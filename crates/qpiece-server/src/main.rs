//! qpiece server binary entry point.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qpiece_engine::{QuantumConfig, QuantumService};
use qpiece_server::{AppState, ServerConfig, create_router};

/// qpiece - quantum randomness and superposition services for games
#[derive(Parser)]
#[command(name = "qpiece-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "QPIECE_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Widest register a single circuit may use
    #[arg(long, env = "MAX_QUBITS")]
    max_qubits: u32,

    /// Backend that samples measurement shots
    #[arg(long, env = "MACHINE_NAME")]
    machine_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qpiece_server=info,qpiece_engine=warn,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let quantum = QuantumConfig::new(cli.max_qubits, cli.machine_name)?;
    tracing::info!(
        "Using '{}' with at most {} qubits per circuit",
        quantum.machine_name,
        quantum.max_qubits
    );
    let service = QuantumService::with_simulators(quantum)?;

    let config = ServerConfig {
        bind_address: cli.bind,
    };
    let bind_addr = config.bind_address;
    let state = Arc::new(AppState::with_config(service, config));

    let app = create_router(state);

    tracing::info!("Starting qpiece server at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
