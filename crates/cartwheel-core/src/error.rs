//! # Error Types
//!
//! Domain-specific error types for cartwheel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartwheel-core errors (this file)                                     │
//! │  ├── CoreError        - Cart operation failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → (embedding app's error type)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (quantity, position, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Cart operation errors.
///
/// These errors represent business rule violations. Every failing operation
/// is atomic: when a variant below is returned, the cart involved is exactly
/// as it was before the call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Quantity must be greater than zero.
    ///
    /// ## When This Occurs
    /// - Adding an item with quantity 0
    /// - Adding an item with a negative quantity (e.g. a sign error upstream)
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Unit price must not be negative.
    ///
    /// Zero is allowed (free items); anything below zero is a caller bug.
    #[error("Unit price cannot be negative: {price}")]
    NegativeUnitPrice { price: Money },

    /// Positional removal pointed outside the cart.
    ///
    /// ## When This Occurs
    /// - Removing at a position >= the number of lines
    /// - A stale index held across a mutation
    ///
    /// Surfacing this instead of silently returning false makes caller
    /// bugs visible at the call site.
    #[error("Position {position} is out of range for a cart with {len} items")]
    PositionOutOfRange { position: usize, len: usize },

    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
