// ============================================================================
// Application Layer - Use Cases
// ============================================================================
//
// The surface outer callers (HTTP handlers, CLIs, the demo binary) invoke.
// Combines domain rules with the repository port.
//
// ============================================================================

pub mod errors;
pub mod order_service;

pub use errors::OrderServiceError;
pub use order_service::OrderService;
