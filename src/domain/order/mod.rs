// ============================================================================
// Order Domain - Validation Logic for Order Submissions
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Order, Address, Currency)
// - Errors (FormatError, BusinessRuleError, OrderError)
// - Schema validator (structure and field formats)
// - Business validator (currency conversion, price ceiling)
// - Validator registry (currency → validator)
// - Command Handler (OrderCommandHandler)
//
// Nothing here performs I/O; the HTTP layer lives in `crate::api`.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod schema;
pub mod validator;
pub mod registry;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use validator::*;
pub use registry::*;
pub use command_handler::*;
