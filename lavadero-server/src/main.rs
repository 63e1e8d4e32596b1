use lavadero_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    lavadero_server::init_logger();

    tracing::info!("Lavadero server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (database, event bus, collaborators)
    let state = ServerState::initialize(&config).await?;

    // 4. Run HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
