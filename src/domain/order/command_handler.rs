use std::sync::Arc;

use chrono::Utc;

use crate::error::AppError;
use crate::store::OrderStore;

use super::aggregate::Order;
use super::commands::OrderCommand;
use super::value_objects::OrderKey;

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Command → validate → load → apply → save
//
// The load/save pair is not atomic. Two requests racing on the same order
// can lose one update; the later save wins.
//
// ============================================================================

#[derive(Clone)]
pub struct OrderCommandHandler {
    store: Arc<dyn OrderStore>,
    key: OrderKey,
}

impl OrderCommandHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self::for_key(store, OrderKey::CURRENT)
    }

    pub fn for_key(store: Arc<dyn OrderStore>, key: OrderKey) -> Self {
        Self { store, key }
    }

    /// The stored order, or a blank one when nothing was submitted yet.
    pub async fn current_order(&self) -> Result<Order, AppError> {
        Ok(self.store.load(self.key).await?.unwrap_or_default())
    }

    pub async fn set_name(&self, name: impl Into<String>) -> Result<Order, AppError> {
        self.handle(OrderCommand::SetName { name: name.into() }).await
    }

    pub async fn set_cake_type(&self, cake_type: impl Into<String>) -> Result<Order, AppError> {
        self.handle(OrderCommand::SetCakeType { cake_type: cake_type.into() }).await
    }

    pub async fn set_fillings(&self, fillings: Vec<String>) -> Result<Order, AppError> {
        self.handle(OrderCommand::SetFillings { fillings }).await
    }

    /// Handle a command and persist the resulting order
    pub async fn handle(&self, command: OrderCommand) -> Result<Order, AppError> {
        let field = command.field();

        // Rejected commands never reach storage
        if let Err(e) = command.validate() {
            tracing::warn!(field, error = %e, "Rejected order update");
            return Err(e.into());
        }

        let existing = self.store.load(self.key).await?;
        let created = existing.is_none();

        let mut order = existing.unwrap_or_default();
        order.apply(command)?;
        order.updated_at = Some(Utc::now());

        self.store.save(self.key, &order).await?;

        tracing::info!(
            order_id = %self.key.as_uuid(),
            field,
            created,
            "Order updated"
        );

        Ok(order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderError;
    use crate::store::InMemoryOrderStore;

    fn handler() -> (Arc<InMemoryOrderStore>, OrderCommandHandler) {
        let store = Arc::new(InMemoryOrderStore::new());
        let handler = OrderCommandHandler::new(store.clone());
        (store, handler)
    }

    #[tokio::test]
    async fn test_reading_does_not_create_order() {
        let (store, handler) = handler();

        let order = handler.current_order().await.unwrap();

        assert_eq!(order, Order::default());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_name_creates_order() {
        let (store, handler) = handler();

        handler.set_name("Hungry Person").await.unwrap();

        let stored = store.load(OrderKey::CURRENT).await.unwrap().unwrap();
        assert_eq!(stored.name_text(), "Hungry Person");
        assert!(stored.cake_type.is_none());
        assert!(stored.fillings.is_empty());
        assert!(stored.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_empty_name_on_empty_store_creates_nothing() {
        let (store, handler) = handler();

        let result = handler.set_name("").await;

        assert!(matches!(result, Err(AppError::Order(OrderError::NameRequired))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_name_keeps_existing_name() {
        let (store, handler) = handler();
        let original = Order {
            name: Some("original name".to_string()),
            ..Order::default()
        };
        store.save(OrderKey::CURRENT, &original).await.unwrap();

        let result = handler.set_name("  ").await;

        assert!(result.is_err());
        assert_eq!(store.load(OrderKey::CURRENT).await.unwrap(), Some(original));
    }

    #[tokio::test]
    async fn test_second_name_replaces_first() {
        let (_, handler) = handler();

        handler.set_name("Inquisitive User").await.unwrap();
        let order = handler.set_name("Anxious User").await.unwrap();

        assert_eq!(order.name_text(), "Anxious User");
        assert_eq!(handler.current_order().await.unwrap().name_text(), "Anxious User");
    }

    #[tokio::test]
    async fn test_cake_type_overwrites_and_keeps_name() {
        let (store, handler) = handler();
        store
            .save(
                OrderKey::CURRENT,
                &Order {
                    name: Some("Hungry User".to_string()),
                    cake_type: Some("Not Whole wheat".to_string()),
                    ..Order::default()
                },
            )
            .await
            .unwrap();

        handler.set_cake_type("Whole wheat").await.unwrap();

        let order = handler.current_order().await.unwrap();
        assert_eq!(order.cake_type_text(), "Whole wheat");
        assert_eq!(order.name_text(), "Hungry User");
    }

    #[tokio::test]
    async fn test_set_fillings_creates_order() {
        let (_, handler) = handler();

        handler
            .set_fillings(vec!["Chocolate chips".to_string(), "Sprinkles".to_string()])
            .await
            .unwrap();

        let order = handler.current_order().await.unwrap();
        assert_eq!(order.fillings, vec!["Chocolate chips", "Sprinkles"]);
        assert!(order.name.is_none());
    }

    #[tokio::test]
    async fn test_handlers_for_different_keys_are_isolated() {
        let store = Arc::new(InMemoryOrderStore::new());
        let current = OrderCommandHandler::new(store.clone());
        let other = OrderCommandHandler::for_key(store.clone(), OrderKey::new(uuid::Uuid::new_v4()));

        other.set_name("Someone Else").await.unwrap();

        assert_eq!(current.current_order().await.unwrap(), Order::default());
        assert_eq!(store.len().await, 1);
    }
}
