use bfhl_service::config::BfhlConfig;
use bfhl_service::error::AppError;
use bfhl_service::observability::init_tracing;
use bfhl_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = BfhlConfig::load()?;

    init_tracing("info");

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        "Starting bfhl service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
