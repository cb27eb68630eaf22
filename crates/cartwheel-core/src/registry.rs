//! # Cart Registry
//!
//! Creation and lookup of carts by customer, plus the cross-cart
//! average-ticket metric.
//!
//! ## Registry Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Registry Operations                                │
//! │                                                                         │
//! │  create("alice") ──► cart exists? ──► yes ──► hand back the same cart  │
//! │                            │                                            │
//! │                            └──────────► no ───► new empty cart, stored  │
//! │                                                                         │
//! │  average_ticket() ─► Σ cart.total_value() / cart count, half-up cents  │
//! │                                                                         │
//! │  invalidate("alice") ─► drop the cart (checkout done / session gone)   │
//! │                                                                         │
//! │  There is NO expiry timer: carts live until invalidated.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Isolation
//! Registry instances are independent of each other. A cart created in one
//! registry is invisible to every other registry, for all operations.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_customer_id;

/// Creates, stores, and aggregates carts, keyed by customer identifier.
///
/// ## Usage
/// ```rust
/// use cartwheel_core::money::Money;
/// use cartwheel_core::registry::CartRegistry;
/// use cartwheel_core::types::Product;
///
/// let mut registry = CartRegistry::new();
///
/// let cart = registry.create("customer-1001").unwrap();
/// cart.add_item(&Product::new(1, "Espresso Beans 250g"), Money::from_cents(1099), 1)
///     .unwrap();
///
/// assert_eq!(registry.average_ticket(), Money::from_cents(1099));
///
/// // Checkout done
/// assert!(registry.invalidate("customer-1001"));
/// ```
#[derive(Debug, Default)]
pub struct CartRegistry {
    carts: HashMap<String, Cart>,
}

impl CartRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        CartRegistry {
            carts: HashMap::new(),
        }
    }

    /// Returns the customer's cart, creating an empty one on first access.
    ///
    /// Idempotent: calling twice with the same id hands back the same
    /// underlying cart, so mutations through one call are visible through
    /// the next.
    ///
    /// ## Errors
    /// Blank customer ids (empty or whitespace) and ids over the length cap
    /// are rejected through the validation layer; the registry is unchanged.
    pub fn create(&mut self, customer_id: &str) -> CoreResult<&mut Cart> {
        validate_customer_id(customer_id)?;

        match self.carts.entry(customer_id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!(customer_id = %customer_id, "Creating cart");
                Ok(entry.insert(Cart::new(customer_id)))
            }
        }
    }

    /// Read-only lookup of a customer's cart.
    ///
    /// Unlike [`CartRegistry::create`], never creates anything.
    pub fn get(&self, customer_id: &str) -> Option<&Cart> {
        self.carts.get(customer_id)
    }

    /// Removes the customer's cart, returning whether one was removed.
    ///
    /// Models checkout completion or session expiry. There is no automatic
    /// expiry: the embedding application decides when a cart's life ends
    /// and calls this.
    pub fn invalidate(&mut self, customer_id: &str) -> bool {
        let removed = self.carts.remove(customer_id).is_some();
        debug!(customer_id = %customer_id, removed = removed, "Invalidating cart");
        removed
    }

    /// Computes the average ticket over all registered carts.
    ///
    /// The average is the sum of every cart's [`Cart::total_value`] divided
    /// by the number of carts, rounded to the cent with half-up rounding
    /// (fractions of a cent from .5 round up, below .5 round down).
    ///
    /// With no carts registered the average is zero; there is never a
    /// division by zero.
    ///
    /// ## Example
    /// ```text
    /// Carts: $10.00, $20.00, $15.00
    ///      │
    ///      ▼
    /// Sum: $45.00, count: 3
    ///      │
    ///      ▼
    /// Average ticket: $15.00
    /// ```
    pub fn average_ticket(&self) -> Money {
        if self.carts.is_empty() {
            return Money::zero();
        }

        let sum = self
            .carts
            .values()
            .fold(Money::zero(), |acc, cart| acc + cart.total_value());

        sum.divide_round_half_up(self.carts.len() as i64)
    }

    /// Returns the number of registered carts.
    #[inline]
    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }

    /// Checks if the registry has no carts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Product;

    fn beans() -> Product {
        Product::new(1, "Espresso Beans 250g")
    }

    /// Adds a single line worth exactly `cents` to the customer's cart.
    fn stock_cart(registry: &mut CartRegistry, customer_id: &str, cents: i64) {
        registry
            .create(customer_id)
            .unwrap()
            .add_item(&beans(), Money::from_cents(cents), 1)
            .unwrap();
    }

    #[test]
    fn test_create_is_idempotent() {
        let mut registry = CartRegistry::new();

        let first_id = {
            let cart = registry.create("customer-1001").unwrap();
            cart.add_item(&beans(), Money::from_cents(999), 2).unwrap();
            cart.id().to_string()
        };

        // Second create returns the same cart: same surrogate id, and the
        // earlier mutation is visible
        let cart = registry.create("customer-1001").unwrap();
        assert_eq!(cart.id(), first_id);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(registry.cart_count(), 1);
    }

    #[test]
    fn test_create_rejects_blank_customer_id() {
        let mut registry = CartRegistry::new();

        assert!(matches!(
            registry.create("").unwrap_err(),
            CoreError::Validation(_)
        ));
        assert!(registry.create("   ").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_never_creates() {
        let mut registry = CartRegistry::new();

        assert!(registry.get("customer-1001").is_none());
        registry.create("customer-1001").unwrap();
        assert!(registry.get("customer-1001").is_some());
        assert_eq!(registry.cart_count(), 1);
    }

    #[test]
    fn test_average_ticket_of_known_totals() {
        let mut registry = CartRegistry::new();

        stock_cart(&mut registry, "a", 1000); // $10.00
        stock_cart(&mut registry, "b", 2000); // $20.00
        stock_cart(&mut registry, "c", 1500); // $15.00

        assert_eq!(registry.average_ticket(), Money::from_cents(1500)); // $15.00
    }

    #[test]
    fn test_average_ticket_empty_registry_is_zero() {
        let registry = CartRegistry::new();
        assert_eq!(registry.average_ticket(), Money::zero());
    }

    #[test]
    fn test_average_ticket_rounds_half_up() {
        let mut registry = CartRegistry::new();

        // $10.00 + $10.01 = $20.01 over 2 carts → $10.005 → $10.01.
        // Banker's rounding would give $10.00; half-up must not.
        stock_cart(&mut registry, "a", 1000);
        stock_cart(&mut registry, "b", 1001);

        assert_eq!(registry.average_ticket(), Money::from_cents(1001));
    }

    #[test]
    fn test_average_ticket_rounds_below_half_down() {
        let mut registry = CartRegistry::new();

        // $10.00 over 3 carts → $3.333… → $3.33
        stock_cart(&mut registry, "a", 1000);
        registry.create("b").unwrap();
        registry.create("c").unwrap();

        assert_eq!(registry.average_ticket(), Money::from_cents(333));
    }

    #[test]
    fn test_empty_carts_count_toward_average() {
        let mut registry = CartRegistry::new();

        stock_cart(&mut registry, "a", 1000);
        registry.create("b").unwrap(); // $0.00 cart

        assert_eq!(registry.average_ticket(), Money::from_cents(500));
    }

    #[test]
    fn test_invalidate() {
        let mut registry = CartRegistry::new();
        registry.create("customer-1001").unwrap();

        assert!(registry.invalidate("customer-1001"));
        assert!(registry.is_empty());

        // Second invalidation finds nothing
        assert!(!registry.invalidate("customer-1001"));
    }

    #[test]
    fn test_create_after_invalidate_is_a_fresh_cart() {
        let mut registry = CartRegistry::new();

        let old_id = {
            let cart = registry.create("customer-1001").unwrap();
            cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();
            cart.id().to_string()
        };

        registry.invalidate("customer-1001");

        let cart = registry.create("customer-1001").unwrap();
        assert!(cart.is_empty());
        assert_ne!(cart.id(), old_id);
    }

    #[test]
    fn test_registry_instances_are_isolated() {
        let mut left = CartRegistry::new();
        let mut right = CartRegistry::new();

        stock_cart(&mut left, "customer-1001", 1000);

        assert!(right.get("customer-1001").is_none());
        assert_eq!(right.average_ticket(), Money::zero());

        // And the same customer can get a second, unrelated cart over there
        let other = right.create("customer-1001").unwrap();
        assert!(other.is_empty());
        assert_ne!(other.id(), left.get("customer-1001").unwrap().id());
    }
}
