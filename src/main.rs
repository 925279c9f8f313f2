use anyhow::Result;
use machinery_site::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("machinery_site=info".parse()?),
        )
        .init();

    info!("Starting machinery site");

    // Load configuration from environment
    let config = Config::from_env()?;

    server::serve(&config).await
}
