use relay_server::{config, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // The model table is built once from the environment and immutable
    // afterwards.
    let registry = config::registry_from_env();
    if registry.is_empty() {
        tracing::warn!("no models configured; set LLAMA_MODEL / LLAMA2_MODEL / CODELLAMA_MODEL");
    }

    let state = AppState {
        registry: Arc::new(registry),
    };

    let addr = config::bind_addr();
    tracing::info!("Starting server on {}", addr);

    relay_server::run_server(state, addr).await?;
    Ok(())
}
