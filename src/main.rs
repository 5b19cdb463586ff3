use std::sync::Arc;

use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use uuid_mcp_server::{
    config::Config,
    logging,
    mcp::server::SUPPORTED_PROTOCOL_VERSION,
    transport::stdio::{interrupt_on, serve, StopReason},
    uuid_source::RandomUuidSource,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    logging::init_logging(&config);

    let state = AppState::new(Arc::new(RandomUuidSource::new()));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        protocol = SUPPORTED_PROTOCOL_VERSION,
        "server starting on stdio"
    );

    let reason = serve(
        &state,
        BufReader::new(stdin()),
        stdout(),
        interrupt_on(tokio::signal::ctrl_c()),
    )
    .await?;
    info!(reason = ?reason, "server stopped");

    // The pending blocking stdin read would otherwise hold up runtime shutdown.
    if reason == StopReason::Interrupted {
        std::process::exit(0);
    }

    Ok(())
}
