// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Errors
// - Aggregate implementation
// - Repository port
//
// This layer has no storage or transport dependencies.
//
// ============================================================================

pub mod order;
