use rust_decimal::Decimal;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Product id cannot be empty")]
    EmptyProductId,

    #[error("Invalid item quantity for {product_id}: {quantity}")]
    InvalidQuantity { product_id: String, quantity: i32 },

    #[error("Invalid unit price for {product_id}: {unit_price}")]
    InvalidUnitPrice { product_id: String, unit_price: Decimal },

    #[error("Order total exceeds the representable amount")]
    TotalOverflow,

    #[error("Order is already canceled")]
    AlreadyCanceled,
}

impl OrderError {
    /// True for violations of the creation rules (as opposed to state transitions)
    pub fn is_invalid_order(&self) -> bool {
        !matches!(self, OrderError::AlreadyCanceled)
    }
}
