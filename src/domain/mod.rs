// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Everything here is independent of HTTP and of the storage engine; it only
// talks to storage through the `OrderStore` trait.
//
// ============================================================================

pub mod order;
