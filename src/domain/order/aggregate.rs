use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::errors::OrderError;
use super::value_objects::{OrderId, OrderItem, OrderStatus};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================
//
// Key Rules:
// 1. An order is created OPEN with at least one valid item
// 2. Items are fixed once the order exists
// 3. Status only moves OPEN -> CANCELED, never back
// 4. The total is always derived from the items, never stored
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    // Identity
    id: OrderId,

    // Current State
    items: Vec<OrderItem>,
    status: OrderStatus,

    // Audit Trail
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new OPEN order with a freshly generated id
    pub fn create(items: Vec<OrderItem>) -> Result<Self, OrderError> {
        Self::create_with_id(OrderId::generate(), items)
    }

    /// Create a new OPEN order under a caller-chosen id
    pub fn create_with_id(id: OrderId, items: Vec<OrderItem>) -> Result<Self, OrderError> {
        Self::validate_items(&items)?;

        let now = Utc::now();
        Ok(Self {
            id,
            items,
            status: OrderStatus::Open,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validate business rules before accepting items
    fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let mut total = Decimal::ZERO;
        for item in items {
            item.validate()?;

            // The total must stay computable for the lifetime of the order
            total = item
                .checked_line_total()
                .and_then(|line| total.checked_add(line))
                .ok_or(OrderError::TotalOverflow)?;
        }

        Ok(())
    }

    /// Sum of quantity × unit price over all items
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Move the order to CANCELED.
    ///
    /// Fails with [`OrderError::AlreadyCanceled`] if it is not OPEN.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        match self.status {
            OrderStatus::Open => {
                self.status = OrderStatus::Canceled;
                self.updated_at = Utc::now();
                Ok(())
            }
            OrderStatus::Canceled => Err(OrderError::AlreadyCanceled),
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Canceled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
