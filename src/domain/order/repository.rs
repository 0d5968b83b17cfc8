use super::aggregate::Order;
use super::value_objects::OrderId;

// ============================================================================
// Order Repository - Storage Port
// ============================================================================
//
// The contract the application layer depends on. Concrete storage lives in
// `crate::infrastructure`.
//
// ============================================================================

pub trait OrderRepository {
    /// Insert or overwrite the order under its id
    fn save(&mut self, order: Order);

    /// Look up an order. `None` means not found; this is never an error.
    fn get(&self, order_id: &OrderId) -> Option<Order>;

    /// Remove an order. Returns whether a record existed and was removed.
    fn delete(&mut self, order_id: &OrderId) -> bool;
}
