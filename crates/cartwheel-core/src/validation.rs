//! # Validation Module
//!
//! Input validation utilities for Cartwheel.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Embedding application (web handler, shell, test rig)         │
//! │  ├── Basic format checks before calling into the core                  │
//! │  └── THIS MODULE: field validators it can reuse                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart operations (cart module)                                │
//! │  ├── Typed guards on every mutation (quantity, price, caps)            │
//! │  └── Reject-before-mutate: failed calls leave state untouched          │
//! │                                                                         │
//! │  Defense in depth: both layers catch different mistakes                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CUSTOMER_ID_LEN, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer identifier.
///
/// ## Rules
/// - Must not be blank (empty or whitespace only)
/// - Must be at most 64 characters
///
/// The registry keys carts by the identifier exactly as passed; validation
/// only rejects values that could never name a customer.
///
/// ## Example
/// ```rust
/// use cartwheel_core::validation::validate_customer_id;
///
/// assert!(validate_customer_id("customer-1001").is_ok());
/// assert!(validate_customer_id("").is_err());
/// assert!(validate_customer_id("   ").is_err());
/// ```
pub fn validate_customer_id(customer_id: &str) -> ValidationResult<()> {
    if customer_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer_id".to_string(),
        });
    }

    if customer_id.len() > MAX_CUSTOMER_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "customer_id".to_string(),
            max: MAX_CUSTOMER_ID_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// The cart enforces the same rules itself; this function lets an outer
/// layer reject bad input before a cart is ever looked up.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use cartwheel_core::money::Money;
/// use cartwheel_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("customer-1001").is_ok());
        assert!(validate_customer_id("a").is_ok());

        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("   ").is_err());
        assert!(validate_customer_id(&"x".repeat(65)).is_err());
        assert!(validate_customer_id(&"x".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
    }
}
