// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific validation logic. Each domain has its
// own subdirectory with:
// - Value objects
// - Errors
// - Validators
// - Command handler
//
// This layer is completely separate from the HTTP layer.
//
// ============================================================================

pub mod order;
