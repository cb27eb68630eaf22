//! # Domain Types
//!
//! Core domain types used throughout Cartwheel.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (u64)     │   │  product       │   │  id (UUID)      │       │
//! │  │  description    │   │  unit_price    │   │  customer_id    │       │
//! │  │                 │   │  quantity      │   │  items          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Product lives here; LineItem and Cart live in the cart module.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product's `code` is its business key: two products with the same code
//! are the same product, whatever their descriptions say.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product that can be placed in a cart.
///
/// ## Design Notes
/// - Immutable once constructed: fields are private and there are no setters,
///   so a product handed to a cart can never change identity under it.
/// - Equality and hashing go through `code` only. Descriptions are display
///   data and carry no identity.
///
/// ## Example
/// ```rust
/// use cartwheel_core::types::Product;
///
/// let a = Product::new(42, "Espresso Beans 250g");
/// let b = Product::new(42, "Espresso Beans (relabeled)");
///
/// // Same code, same product
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Business identifier - unique key.
    code: u64,

    /// Display name shown on lines and receipts.
    description: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(code: u64, description: impl Into<String>) -> Self {
        Product {
            code,
            description: description.into(),
        }
    }

    /// Returns the product code (business key).
    #[inline]
    pub const fn code(&self) -> u64 {
        self.code
    }

    /// Returns the product description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Equality by business key only.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

/// Hash must agree with equality: code only.
impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_accessors() {
        let product = Product::new(7, "Oat Milk 1L");
        assert_eq!(product.code(), 7);
        assert_eq!(product.description(), "Oat Milk 1L");
    }

    #[test]
    fn test_equality_is_by_code() {
        let a = Product::new(7, "Oat Milk 1L");
        let b = Product::new(7, "Oat Milk 1L (new label)");
        let c = Product::new(8, "Oat Milk 1L");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Product::new(7, "Oat Milk 1L"));

        // Same code hashes to the same bucket regardless of description
        assert!(set.contains(&Product::new(7, "renamed")));
        assert!(!set.contains(&Product::new(8, "Oat Milk 1L")));
    }
}
