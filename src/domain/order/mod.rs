// ============================================================================
// Order Domain - Business Logic for the cake order
// ============================================================================
//
// - Value objects (OrderKey, menu catalog)
// - Commands (SetName, SetCakeType, SetFillings)
// - Errors (OrderError enum)
// - Aggregate (Order with partial-update rules)
// - Command Handler (OrderCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
