use crate::domain::order::{OrderError, OrderId};

// ============================================================================
// Order Use-Case Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderServiceError {
    #[error("Invalid order: {0}")]
    InvalidOrder(OrderError),

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Order is already canceled: {0}")]
    AlreadyCanceled(OrderId),

    #[error("Order already exists: {0}")]
    AlreadyExists(OrderId),
}
