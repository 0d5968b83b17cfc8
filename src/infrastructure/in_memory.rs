use std::collections::HashMap;

use crate::domain::order::{Order, OrderId, OrderRepository};

// ============================================================================
// In-Memory Order Repository - Volatile Storage Adapter
// ============================================================================
//
// Implements the OrderRepository port with a single HashMap keyed by order id.
//
// - Nothing survives the process
// - Not thread-safe: mutation goes through `&mut self`, callers serialize
// - Lookup is by key only, iteration order is irrelevant
//
// ============================================================================

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: HashMap<OrderId, Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&mut self, order: Order) {
        tracing::debug!(
            order_id = %order.id(),
            status = %order.status(),
            "Saving order"
        );

        self.orders.insert(order.id().clone(), order);
    }

    fn get(&self, order_id: &OrderId) -> Option<Order> {
        self.orders.get(order_id).cloned()
    }

    fn delete(&mut self, order_id: &OrderId) -> bool {
        let removed = self.orders.remove(order_id).is_some();

        tracing::debug!(order_id = %order_id, removed, "Deleting order");

        removed
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
