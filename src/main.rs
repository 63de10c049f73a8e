use prabogo_app::{App, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    let addr = config.socket_addr()?;

    let app = App::bind(addr).await?;

    tracing::info!("Prabogo v1 service running on {}", addr);
    tracing::debug!("Version {}", env!("CARGO_PKG_VERSION"));

    app.run().await
}

fn setup_tracing() {
    // RUST_LOG wins when set, otherwise default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
