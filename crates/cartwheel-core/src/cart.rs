//! # Cart Module
//!
//! One customer's shopping cart: an ordered list of line items with
//! merge-on-add semantics.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Caller Action            Cart Method             State Change          │
//! │  ─────────────            ───────────             ────────────          │
//! │                                                                         │
//! │  Add product ───────────► add_item() ───────────► merge or append      │
//! │                                                                         │
//! │  Remove by product ─────► remove_product() ─────► drop matching line   │
//! │                                                                         │
//! │  Remove by position ────► remove_at() ──────────► drop line at index   │
//! │                                                                         │
//! │  Read total ────────────► total_value() ────────► (read only)          │
//! │                                                                         │
//! │  Read lines ────────────► items() ──────────────► (snapshot copy)      │
//! │                                                                         │
//! │  NOTE: every mutation validates first; a failed call never leaves       │
//! │        a half-applied change behind.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// LineItem
// =============================================================================

/// A line in the shopping cart: one product, its unit price, and a quantity.
///
/// ## Design Notes
/// - The price is whatever the caller supplied on the *latest* add of this
///   product: re-adding with a different price overwrites it (last write
///   wins). Prices are never summed or averaged across adds.
/// - `added_at` is frozen when the line first enters the cart and survives
///   later quantity merges.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// The product this line refers to.
    product: Product,

    /// Unit price for this line.
    unit_price: Money,

    /// Quantity in cart. Always > 0 for a line that exists.
    quantity: i64,

    /// When this line first entered the cart.
    #[ts(as = "String")]
    added_at: DateTime<Utc>,
}

impl LineItem {
    fn new(product: Product, unit_price: Money, quantity: i64) -> Self {
        LineItem {
            product,
            unit_price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the product on this line.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the unit price.
    #[inline]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the quantity.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns when this line first entered the cart.
    #[inline]
    pub const fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// ## Example
    /// ```rust
    /// use cartwheel_core::cart::Cart;
    /// use cartwheel_core::money::Money;
    /// use cartwheel_core::types::Product;
    ///
    /// let mut cart = Cart::new("customer-1001");
    /// cart.add_item(&Product::new(1, "Espresso Beans 250g"), Money::from_cents(299), 3)
    ///     .unwrap();
    ///
    /// let items = cart.items();
    /// assert_eq!(items[0].line_total(), Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one customer.
///
/// ## Invariants
/// - Lines are unique by product code (adding the same product merges)
/// - Line order is insertion order
/// - Quantity is always > 0 on every line
/// - Maximum lines: 100; maximum quantity per line: 999
///
/// ## Identity
/// Follows the dual-key pattern: `id` is an immutable UUID surrogate,
/// `customer_id` is the business key the registry looks carts up by.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Unique identifier (UUID v4), frozen at creation.
    id: String,

    /// The customer this cart belongs to.
    customer_id: String,

    /// Lines in the cart, in insertion order.
    items: Vec<LineItem>,

    /// When the cart was created.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart for a customer.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Cart {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns the cart's surrogate id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the customer this cart belongs to.
    #[inline]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Returns when the cart was created.
    #[inline]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds a product to the cart, merging with an existing line if present.
    ///
    /// ## Behavior
    /// - Product already in cart: the line's quantity becomes
    ///   `current + quantity`, and if `unit_price` differs in value from the
    ///   stored price, the stored price is replaced with `unit_price`.
    /// - Product not in cart: a new line is appended at the end.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] when `quantity <= 0`
    /// - [`CoreError::NegativeUnitPrice`] when `unit_price < 0`
    /// - [`CoreError::QuantityTooLarge`] when the resulting line quantity
    ///   would exceed [`MAX_ITEM_QUANTITY`]
    /// - [`CoreError::CartTooLarge`] when a new line would exceed
    ///   [`MAX_CART_ITEMS`]
    ///
    /// On any error the cart is left exactly as it was.
    ///
    /// ## Example
    /// ```rust
    /// use cartwheel_core::cart::Cart;
    /// use cartwheel_core::money::Money;
    /// use cartwheel_core::types::Product;
    ///
    /// let mut cart = Cart::new("customer-1001");
    /// let beans = Product::new(1, "Espresso Beans 250g");
    ///
    /// cart.add_item(&beans, Money::from_cents(1099), 2).unwrap();
    /// cart.add_item(&beans, Money::from_cents(999), 1).unwrap();
    ///
    /// // One line: quantity merged, price is the latest
    /// assert_eq!(cart.item_count(), 1);
    /// assert_eq!(cart.total_quantity(), 3);
    /// assert_eq!(cart.total_value(), Money::from_cents(2997));
    /// ```
    pub fn add_item(
        &mut self,
        product: &Product,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity { quantity });
        }

        if unit_price.is_negative() {
            return Err(CoreError::NegativeUnitPrice { price: unit_price });
        }

        // Merge path: the product already has a line
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product.code() == product.code())
        {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }

            line.quantity = new_qty;
            // Last write wins for the price, compared by value
            if line.unit_price != unit_price {
                line.unit_price = unit_price;
            }
            return Ok(());
        }

        // Append path: a brand-new line
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items
            .push(LineItem::new(product.clone(), unit_price, quantity));
        Ok(())
    }

    /// Removes the line matching this product's code, if present.
    ///
    /// Returns whether a removal occurred. A missing product is not an
    /// error: the cart is unchanged and `false` comes back.
    pub fn remove_product(&mut self, product: &Product) -> bool {
        match self
            .items
            .iter()
            .position(|line| line.product.code() == product.code())
        {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Removes the line at a zero-based position in insertion order.
    ///
    /// ## Errors
    /// [`CoreError::PositionOutOfRange`] when `position >= item_count()`.
    /// Unlike [`Cart::remove_product`], a bad position is treated as a
    /// caller bug and surfaced loudly.
    pub fn remove_at(&mut self, position: usize) -> CoreResult<()> {
        if position >= self.items.len() {
            return Err(CoreError::PositionOutOfRange {
                position,
                len: self.items.len(),
            });
        }

        self.items.remove(position);
        Ok(())
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the cart total: the exact sum of all line totals.
    ///
    /// An empty cart totals exactly zero.
    pub fn total_value(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Returns a snapshot of the lines, in insertion order.
    ///
    /// The returned vector is a copy: mutating it (or the clones inside)
    /// has no effect on the cart.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Returns the number of lines in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn beans() -> Product {
        Product::new(1, "Espresso Beans 250g")
    }

    fn milk() -> Product {
        Product::new(2, "Oat Milk 1L")
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(999), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_value(), Money::from_cents(1998));
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(999), 2).unwrap();
        cart.add_item(&beans(), Money::from_cents(999), 3).unwrap();

        assert_eq!(cart.item_count(), 1); // still one line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_same_product_new_price_wins() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(1099), 1).unwrap();
        cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 1);
        // Latest price, not a sum ($20.98) or an average ($10.49)
        assert_eq!(items[0].unit_price(), Money::from_cents(999));
        assert_eq!(items[0].quantity(), 2);
        assert_eq!(cart.total_value(), Money::from_cents(1998));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new("customer-1001");

        let err = cart.add_item(&beans(), Money::from_cents(999), 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { quantity: 0 }));

        let err = cart
            .add_item(&beans(), Money::from_cents(999), -4)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { quantity: -4 }));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut cart = Cart::new("customer-1001");

        let err = cart
            .add_item(&beans(), Money::from_cents(-1), 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::NegativeUnitPrice { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_allows_zero_price() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::zero(), 1).unwrap();
        assert_eq!(cart.total_value(), Money::zero());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_failed_merge_leaves_line_untouched() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(999), 998).unwrap();

        // 998 + 5 would blow past MAX_ITEM_QUANTITY
        let err = cart.add_item(&beans(), Money::from_cents(500), 5).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));

        // Neither the quantity nor the price moved
        let items = cart.items();
        assert_eq!(items[0].quantity(), 998);
        assert_eq!(items[0].unit_price(), Money::from_cents(999));
    }

    #[test]
    fn test_cart_line_cap() {
        let mut cart = Cart::new("customer-1001");

        for code in 0..MAX_CART_ITEMS as u64 {
            cart.add_item(&Product::new(code, "bulk"), Money::from_cents(100), 1)
                .unwrap();
        }

        let err = cart
            .add_item(&Product::new(9999, "one too many"), Money::from_cents(100), 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
        assert_eq!(cart.item_count(), MAX_CART_ITEMS);
    }

    #[test]
    fn test_remove_product() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();

        assert!(cart.remove_product(&beans()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_product_returns_false() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();

        assert!(!cart.remove_product(&milk()));
        // Nothing changed
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_value(), Money::from_cents(999));
    }

    #[test]
    fn test_remove_matches_by_code_not_description() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();

        // Same code, different description: still the same product
        assert!(cart.remove_product(&Product::new(1, "relabeled")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(100), 1).unwrap();
        cart.add_item(&milk(), Money::from_cents(200), 1).unwrap();
        cart.add_item(&Product::new(3, "Dark Chocolate 70%"), Money::from_cents(300), 1)
            .unwrap();

        cart.remove_at(1).unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product().code(), 1);
        assert_eq!(items[1].product().code(), 3);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut cart = Cart::new("customer-1001");
        cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();

        let err = cart.remove_at(1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::PositionOutOfRange { position: 1, len: 1 }
        ));
        assert_eq!(cart.item_count(), 1);

        let mut empty = Cart::new("customer-1002");
        assert!(empty.remove_at(0).is_err());
    }

    #[test]
    fn test_total_value_sums_lines_exactly() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(1099), 2).unwrap(); // $21.98
        cart.add_item(&milk(), Money::from_cents(350), 3).unwrap(); // $10.50

        assert_eq!(cart.total_value(), Money::from_cents(3248)); // $32.48
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new("customer-1001");
        assert_eq!(cart.total_value(), Money::zero());
    }

    #[test]
    fn test_items_is_a_snapshot() {
        let mut cart = Cart::new("customer-1001");
        cart.add_item(&beans(), Money::from_cents(999), 1).unwrap();

        let mut snapshot = cart.items();
        snapshot.clear();

        // The cart did not notice
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_insertion_order_survives_merges() {
        let mut cart = Cart::new("customer-1001");

        cart.add_item(&beans(), Money::from_cents(100), 1).unwrap();
        cart.add_item(&milk(), Money::from_cents(200), 1).unwrap();
        // Merging into the first line must not move it to the back
        cart.add_item(&beans(), Money::from_cents(100), 1).unwrap();

        let items = cart.items();
        assert_eq!(items[0].product().code(), 1);
        assert_eq!(items[1].product().code(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new("customer-1001");
        cart.add_item(&beans(), Money::from_cents(999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_value(), Money::zero());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let mut cart = Cart::new("customer-1001");
        cart.add_item(&beans(), Money::from_cents(999), 2).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["customerId"], "customer-1001");
        assert_eq!(json["items"][0]["unitPrice"], 999);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["product"]["code"], 1);
        assert!(json["createdAt"].is_string());
    }
}
