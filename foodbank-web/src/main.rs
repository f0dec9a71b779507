use foodbank_web::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration and logging
    let config = setup_environment();

    print_banner();

    tracing::info!(environment = %config.environment, "Food bank front-end starting...");

    // 2. Inventory API client
    let state = ServerState::initialize(&config)?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
