// ============================================================================
// Order Service - Ports & Adapters Order Management Core
// ============================================================================
//
// Layers:
// - domain:         Order aggregate, value objects, errors, repository port
// - application:    OrderService use cases (create / cancel / remove)
// - infrastructure: repository adapters (in-memory)
// - config:         telemetry configuration
//
// ============================================================================

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{OrderService, OrderServiceError};
pub use domain::order::{Order, OrderError, OrderId, OrderItem, OrderRepository, OrderStatus};
pub use infrastructure::InMemoryOrderRepository;
