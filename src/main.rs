use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cake_order::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cake_order=debug"))
        )
        .init();

    tracing::info!("Starting cake order service");

    let config = Config::load()?;
    let store = cake_order::open_store(&config).await?;

    cake_order::serve(&config, store).await
}
