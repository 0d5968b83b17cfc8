// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific domain code:
// - Value objects (OrderId, OrderItem, OrderStatus)
// - Errors (OrderError enum)
// - Aggregate (Order with its business rules)
// - Repository (storage port implemented by infrastructure adapters)
//
// Nothing here knows about a concrete store or the outer caller.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;
pub mod repository;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
pub use repository::*;
