use crate::domain::order::{Order, OrderError, OrderId, OrderItem, OrderRepository};

use super::errors::OrderServiceError;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: Request -> Order (business rules) -> Repository
//
// The only component that calls `save` / `delete` on the repository.
//
// ============================================================================

pub struct OrderService<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Read-only access to the underlying store
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create an OPEN order with a generated id and persist it
    pub fn create_order(&mut self, items: Vec<OrderItem>) -> Result<Order, OrderServiceError> {
        let order = Order::create(items).map_err(|e| self.reject_invalid(e))?;
        Ok(self.persist_new(order))
    }

    /// Create an OPEN order under a caller-chosen id.
    ///
    /// Refuses an id that is already stored rather than overwriting it.
    pub fn create_order_with_id(
        &mut self,
        order_id: OrderId,
        items: Vec<OrderItem>,
    ) -> Result<Order, OrderServiceError> {
        if self.repository.get(&order_id).is_some() {
            tracing::warn!(order_id = %order_id, "Order id already in use");
            return Err(OrderServiceError::AlreadyExists(order_id));
        }

        let order = Order::create_with_id(order_id, items).map_err(|e| self.reject_invalid(e))?;
        Ok(self.persist_new(order))
    }

    /// Look up an order; `None` when absent
    pub fn get_order(&self, order_id: &OrderId) -> Option<Order> {
        self.repository.get(order_id)
    }

    /// Flag an order as CANCELED. The record is kept.
    pub fn cancel_order(&mut self, order_id: &OrderId) -> Result<(), OrderServiceError> {
        let Some(mut order) = self.repository.get(order_id) else {
            tracing::warn!(order_id = %order_id, "Cannot cancel: order not found");
            return Err(OrderServiceError::NotFound(order_id.clone()));
        };

        if let Err(e) = order.cancel() {
            tracing::warn!(order_id = %order_id, error = %e, "Cancel rejected");
            return Err(if e.is_invalid_order() {
                OrderServiceError::InvalidOrder(e)
            } else {
                OrderServiceError::AlreadyCanceled(order_id.clone())
            });
        }

        self.repository.save(order);

        tracing::info!(order_id = %order_id, "✅ Order canceled");
        Ok(())
    }

    /// Erase an order. Removing an unknown id is a no-op returning `false`.
    pub fn remove_order(&mut self, order_id: &OrderId) -> bool {
        if !self.repository.delete(order_id) {
            tracing::debug!(order_id = %order_id, "Nothing to remove");
            return false;
        }

        tracing::info!(order_id = %order_id, "🗑️ Order removed");
        true
    }

    fn persist_new(&mut self, order: Order) -> Order {
        tracing::info!(
            order_id = %order.id(),
            item_count = order.items().len(),
            total = %order.total(),
            "✅ Order created"
        );

        self.repository.save(order.clone());
        order
    }

    fn reject_invalid(&self, error: OrderError) -> OrderServiceError {
        tracing::warn!(error = %error, "Order rejected");
        OrderServiceError::InvalidOrder(error)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::infrastructure::InMemoryOrderRepository;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> OrderService<InMemoryOrderRepository> {
        OrderService::new(InMemoryOrderRepository::new())
    }

    fn items() -> Vec<OrderItem> {
        vec![
            OrderItem::new("book", 2, dec!(12.5)),
            OrderItem::new("pen", 3, dec!(1.2)),
        ]
    }

    #[test]
    fn test_create_order_and_total() {
        let mut service = service();

        let order = service.create_order(items()).unwrap();

        assert_eq!(order.total(), dec!(28.6));
        assert_eq!(order.status(), OrderStatus::Open);
        assert_eq!(service.repository().get(order.id()), Some(order));
    }

    #[test]
    fn test_create_order_rejects_empty_items() {
        let mut service = service();

        let err = service.create_order(vec![]).unwrap_err();

        assert_eq!(err, OrderServiceError::InvalidOrder(OrderError::EmptyItems));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn test_create_order_rejects_negative_price() {
        let mut service = service();

        let err = service
            .create_order(vec![OrderItem::new("A", 1, dec!(-1))])
            .unwrap_err();

        assert!(matches!(
            err,
            OrderServiceError::InvalidOrder(OrderError::InvalidUnitPrice { .. })
        ));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn test_create_order_rejects_total_overflow() {
        let mut service = service();

        let err = service
            .create_order(vec![
                OrderItem::new("A", 1, Decimal::MAX),
                OrderItem::new("B", 1, Decimal::MAX),
            ])
            .unwrap_err();

        assert_eq!(err, OrderServiceError::InvalidOrder(OrderError::TotalOverflow));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn test_create_order_with_id() {
        let mut service = service();
        let id = OrderId::new("order-42");

        let order = service.create_order_with_id(id.clone(), items()).unwrap();

        assert_eq!(order.id(), &id);
        assert!(service.get_order(&id).is_some());
    }

    #[test]
    fn test_create_order_with_existing_id_fails() {
        let mut service = service();
        let id = OrderId::new("order-42");
        let first = service.create_order_with_id(id.clone(), items()).unwrap();

        let err = service
            .create_order_with_id(id.clone(), vec![OrderItem::new("other", 1, dec!(1))])
            .unwrap_err();

        assert_eq!(err, OrderServiceError::AlreadyExists(id.clone()));
        assert_eq!(service.get_order(&id), Some(first));
    }

    #[test]
    fn test_cancel_order_keeps_record() {
        let mut service = service();
        let order = service.create_order(items()).unwrap();

        service.cancel_order(order.id()).unwrap();

        let stored = service.get_order(order.id()).unwrap();
        assert_eq!(stored.status(), OrderStatus::Canceled);
        assert_eq!(stored.total(), dec!(28.6));
    }

    #[test]
    fn test_cancel_order_twice() {
        let mut service = service();
        let order = service.create_order(items()).unwrap();

        assert!(service.cancel_order(order.id()).is_ok());
        assert_eq!(
            service.cancel_order(order.id()),
            Err(OrderServiceError::AlreadyCanceled(order.id().clone()))
        );
    }

    #[test]
    fn test_cancel_missing_order() {
        let mut service = service();
        let id = OrderId::generate();

        assert_eq!(service.cancel_order(&id), Err(OrderServiceError::NotFound(id)));
    }

    #[test]
    fn test_remove_order_erases_record() {
        let mut service = service();
        let order = service.create_order(items()).unwrap();

        assert!(service.remove_order(order.id()));
        assert!(service.get_order(order.id()).is_none());
        assert!(service.repository().is_empty());
    }

    #[test]
    fn test_remove_missing_order_returns_false() {
        let mut service = service();
        service.create_order(items()).unwrap();

        assert!(!service.remove_order(&OrderId::new("zzz")));
        assert_eq!(service.repository().len(), 1);
    }

    #[test]
    fn test_cancel_after_remove_is_not_found() {
        let mut service = service();
        let order = service.create_order(items()).unwrap();
        service.remove_order(order.id());

        assert_eq!(
            service.cancel_order(order.id()),
            Err(OrderServiceError::NotFound(order.id().clone()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = OrderServiceError::InvalidOrder(OrderError::EmptyItems);
        assert_eq!(err.to_string(), "Invalid order: Order items cannot be empty");

        // Domain detail appears once in the message, not again as a source
        assert!(std::error::Error::source(&err).is_none());

        let err = OrderServiceError::NotFound(OrderId::new("abc"));
        assert_eq!(err.to_string(), "Order not found: abc");
    }
}
