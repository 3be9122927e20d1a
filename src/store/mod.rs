// ============================================================================
// Order Store - Persistence Layer
// ============================================================================
//
// The store knows nothing about validation or partial updates: it loads and
// saves whole order records by key. Saving is a blind upsert, so two
// concurrent read-modify-write cycles resolve as last write wins.
//
// ============================================================================

mod memory;
mod scylladb;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::order::{Order, OrderKey};

pub use self::memory::InMemoryOrderStore;
pub use self::scylladb::{ScyllaConfig, ScyllaOrderStore};

/// Durable storage for order records.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Load the record stored under `key`, if any. Never creates one.
    async fn load(&self, key: OrderKey) -> Result<Option<Order>>;

    /// Create or replace the record stored under `key`.
    async fn save(&self, key: OrderKey, order: &Order) -> Result<()>;
}
