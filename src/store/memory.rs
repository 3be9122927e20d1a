use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::OrderStore;
use crate::domain::order::{Order, OrderKey};

/// Process-local store, used by the test suites and `CAKE_ORDER_STORE=memory`.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderKey, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn load(&self, key: OrderKey) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&key).cloned())
    }

    async fn save(&self, key: OrderKey, order: &Order) -> Result<()> {
        self.orders.write().await.insert(key, order.clone());
        Ok(())
    }
}
