//! Cake order form.
//!
//! A single order (customer name, cake type, fillings) is kept in a document
//! store and rendered back as an HTML form page.

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod store;
pub mod web;

use std::net::TcpListener;
use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::store::{InMemoryOrderStore, OrderStore, ScyllaOrderStore};

/// Open the store selected by the config.
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn OrderStore>> {
    let store: Arc<dyn OrderStore> = match config.store {
        StoreBackend::Scylla => Arc::new(ScyllaOrderStore::connect(&config.scylla).await?),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory order store, orders are lost on restart");
            Arc::new(InMemoryOrderStore::new())
        }
    };

    Ok(store)
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(config: &Config, store: Arc<dyn OrderStore>) -> anyhow::Result<()> {
    let metrics = Arc::new(metrics::Metrics::new()?);
    let state = actix_web::web::Data::new(web::AppState::new(store, metrics));

    let address = config.bind_address();
    tracing::info!("Binding to {address}");
    let listener = TcpListener::bind(&address)?;

    tracing::info!("Server running on http://{address}");
    web::run(listener, state)?.await?;

    tracing::info!("Server shut down");
    Ok(())
}
