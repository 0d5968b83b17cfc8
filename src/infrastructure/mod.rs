// ============================================================================
// Infrastructure - Storage Adapters
// ============================================================================
//
// Concrete implementations of the domain's repository ports.
//
// ============================================================================

pub mod in_memory;

pub use in_memory::InMemoryOrderRepository;
